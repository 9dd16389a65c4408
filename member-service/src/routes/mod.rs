pub(crate) mod address;
pub(crate) mod board;
pub(crate) mod category;
pub(crate) mod extract;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod member;
pub(crate) mod refresh;

// re-export items from sub-modules
pub use extract::*;
pub use login::*;
pub use logout::*;
pub use refresh::*;

pub mod board_store;
pub mod category_store;
pub mod jwt_key_store;
pub mod member_store;
pub mod session_store;

pub use board_store::*;
pub use category_store::*;
pub use jwt_key_store::JwtKeyStore;
pub use member_store::*;
pub use session_store::*;

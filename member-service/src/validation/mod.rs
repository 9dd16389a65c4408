mod email;
mod password;
mod user_id;

pub use email::*;
pub use password::*;
pub use user_id::*;

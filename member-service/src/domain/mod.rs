pub mod data_stores;

mod address;
mod auth_context;
mod board;
mod category;
mod claims;
mod email;
mod member;
mod member_requests;
mod nickname;
mod page;
mod password;
mod role;
mod user_id;

pub use address::*;
pub use auth_context::*;
pub use board::*;
pub use category::*;
pub use claims::*;
pub use data_stores::*;
pub use email::*;
pub use member::*;
pub use member_requests::*;
pub use nickname::*;
pub use page::*;
pub use password::*;
pub use role::*;
pub use user_id::*;

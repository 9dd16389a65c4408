pub mod auth_guard;
pub mod auth_service;
pub mod board_service;
pub mod category_service;
pub mod credentials;
pub mod data_stores;
pub mod hashmap_board_store;
pub mod hashmap_category_store;
pub mod hashmap_member_store;
pub mod hashmap_session_store;
pub mod member_service;
pub mod token_service;

pub use auth_guard::*;
pub use auth_service::*;
pub use board_service::*;
pub use category_service::*;
pub use credentials::*;
pub use data_stores::*;
pub use hashmap_board_store::*;
pub use hashmap_category_store::*;
pub use hashmap_member_store::*;
pub use hashmap_session_store::*;
pub use member_service::*;
pub use token_service::*;

mod auth;
mod board;
mod member;

pub use auth::*;
pub use board::*;
pub use member::*;

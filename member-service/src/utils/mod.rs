pub mod config;
pub mod consts;

pub use config::{AdminBootstrap, Config, ConfigError};
pub use consts::*;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{BoardStore, CategoryStore, MemberStore, SessionStore};
use crate::services::{SecretHasher, TokenService};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type MemberStoreType = Arc<RwLock<dyn MemberStore>>;
pub type SessionStoreType = Arc<RwLock<dyn SessionStore>>;
pub type CategoryStoreType = Arc<RwLock<dyn CategoryStore>>;
pub type BoardStoreType = Arc<RwLock<dyn BoardStore>>;
pub type TokenServiceType = Arc<TokenService>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub member_store: MemberStoreType,
    pub session_store: SessionStoreType,
    pub category_store: CategoryStoreType,
    pub board_store: BoardStoreType,
    pub token_service: TokenServiceType,
    pub hasher: SecretHasher,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        member_store: MemberStoreType,
        session_store: SessionStoreType,
        category_store: CategoryStoreType,
        board_store: BoardStoreType,
        token_service: TokenServiceType,
        config: ConfigType,
    ) -> Self {
        Self {
            member_store,
            session_store,
            category_store,
            board_store,
            token_service,
            hasher: SecretHasher::from_config(&config),
            config,
        }
    }
}

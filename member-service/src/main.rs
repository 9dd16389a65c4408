use std::sync::Arc;

use member_service::app_state::{AppState, SessionStoreType};
use member_service::services::{
    HashmapBoardStore, HashmapCategoryStore, HashmapMemberStore, HashmapSessionStore,
    MemberService, RedisService, RedisSessionStore, TokenService,
};
use member_service::utils::Config;
use member_service::Application;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Arc::new(Config::from_env().expect("Failed to load config"));

    let token_service = Arc::new(
        TokenService::from_config(&config).expect("JWT_ACTIVE_KID has no signing key"),
    );

    let session_store: SessionStoreType = match config.redis_host() {
        Some(host) => {
            log::info!("using redis session store at {host}");
            let redis = RedisService::new(host).expect("Failed to create redis client");
            Arc::new(RwLock::new(RedisSessionStore::new(Arc::new(redis))))
        }
        None => {
            log::warn!("REDIS_HOST not set, refresh sessions are kept in memory");
            Arc::new(RwLock::new(HashmapSessionStore::default()))
        }
    };

    let app_state = AppState::new(
        Arc::new(RwLock::new(HashmapMemberStore::default())),
        session_store,
        Arc::new(RwLock::new(HashmapCategoryStore::default())),
        Arc::new(RwLock::new(HashmapBoardStore::default())),
        token_service,
        config.clone(),
    );

    if let Some(admin) = config.admin_bootstrap() {
        match MemberService::bootstrap_admin(&app_state, admin).await {
            Ok(Some(member)) => log::info!("created administrator {}", member.user_id),
            Ok(None) => log::info!("administrator {} already exists", admin.user_id),
            Err(e) => log::error!("failed to create administrator {}: {e}", admin.user_id),
        }
    }

    let app = Application::build(app_state, config.app_address())
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

use std::{error::Error, future::Future, future::IntoFuture, pin::Pin};

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use app_state::AppState;
use routes::{address, board, category, login, logout, member, refresh};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // members
        .route("/api/member/register", post(member::register))
        .route("/api/member/login", post(login::login))
        .route("/api/member/refresh", post(refresh::refresh))
        .route("/api/member/logout", post(logout::logout))
        .route("/api/member", get(member::profile))
        .route("/api/member/list", get(member::list))
        .route("/api/member/find-user-id", post(member::find_user_id))
        .route("/api/member/check-password", post(member::check_password))
        .route(
            "/api/member/{member_id}",
            put(member::update).delete(member::delete),
        )
        .route(
            "/api/member/address",
            post(address::add_address).get(address::list_addresses),
        )
        .route(
            "/api/member/address/{address_id}",
            delete(address::remove_address),
        )
        // categories
        .route(
            "/api/category",
            get(category::list_categories).post(category::create_category),
        )
        .route("/api/category/search", get(category::search_categories))
        .route(
            "/api/category/{category_id}",
            get(category::get_category).put(category::update_category),
        )
        .route(
            "/api/category/{category_id}/status",
            patch(category::change_category_status),
        )
        .route(
            "/api/category/{category_id}/order",
            patch(category::change_category_order),
        )
        // boards
        .route("/api/board", post(board::create_board))
        .route("/api/board/search", get(board::search_boards))
        .route(
            "/api/board/category/{category_id}",
            get(board::boards_by_category),
        )
        .route("/api/board/member/{member_id}", get(board::boards_by_member))
        .route("/api/board/admin", get(board::admin_boards))
        .route("/api/board/admin/counts", get(board::admin_board_counts))
        .route("/api/board/admin/search", get(board::admin_search_boards))
        .route(
            "/api/board/admin/{board_id}/status",
            patch(board::change_board_status),
        )
        .route(
            "/api/board/{board_id}",
            get(board::get_board).put(board::update_board),
        )
        .layer(cors)
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    /// Binds `address`; port `0` picks an ephemeral port, reported back in `address`.
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let listener = TcpListener::bind(address).await?;
        let local = listener.local_addr()?;

        let http_future = axum::serve(listener, app_router(app_state)).into_future();

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", local),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}

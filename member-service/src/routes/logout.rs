use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::app_state::AppState;
use crate::errors::AuthError;
use crate::routes::Authenticated;
use crate::services::AuthService;

pub async fn logout(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
) -> Result<impl IntoResponse, AuthError> {
    AuthService::logout(&state, &ctx).await?;
    Ok(StatusCode::OK)
}

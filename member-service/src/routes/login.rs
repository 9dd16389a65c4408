use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::LoginRequestBody;
use crate::errors::AuthError;
use crate::services::AuthService;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, AuthError> {
    let tokens = AuthService::login(&state, &request.user_id, &request.password).await?;
    Ok((StatusCode::OK, Json(tokens)))
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::RefreshRequestBody;
use crate::errors::AuthError;
use crate::services::AuthService;

pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequestBody>,
) -> Result<impl IntoResponse, AuthError> {
    let tokens = AuthService::refresh(&state, &request.refresh_token).await?;
    Ok((StatusCode::OK, Json(tokens)))
}

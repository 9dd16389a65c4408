use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::AddressCreateRequest;
use crate::errors::MemberError;
use crate::routes::Authenticated;
use crate::services::MemberService;

pub async fn add_address(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Json(request): Json<AddressCreateRequest>,
) -> Result<impl IntoResponse, MemberError> {
    let address = MemberService::add_address(&state, &ctx, request).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

pub async fn list_addresses(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
) -> Result<impl IntoResponse, MemberError> {
    let addresses = MemberService::list_addresses(&state, &ctx).await?;
    Ok((StatusCode::OK, Json(addresses)))
}

pub async fn remove_address(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(address_id): Path<i64>,
) -> Result<impl IntoResponse, MemberError> {
    MemberService::remove_address(&state, &ctx, address_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

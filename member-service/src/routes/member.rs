use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{
    FindUserIdRequestBody, MemberUpdateRequestBody, PageParams, PageRequest,
    PasswordCheckRequestBody, RegisterRequestBody, RegisterResponse,
};
use crate::errors::MemberError;
use crate::routes::Authenticated;
use crate::services::MemberService;

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequestBody>,
) -> Result<impl IntoResponse, MemberError> {
    let member = MemberService::register(&state, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            member_id: member.member_id,
            user_id: member.user_id,
        }),
    ))
}

pub async fn profile(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
) -> Result<impl IntoResponse, MemberError> {
    let profile = MemberService::profile(&state, &ctx).await?;
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn update(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(member_id): Path<i64>,
    Json(request): Json<MemberUpdateRequestBody>,
) -> Result<impl IntoResponse, MemberError> {
    let profile = MemberService::update(&state, &ctx, member_id, request).await?;
    Ok((StatusCode::OK, Json(profile)))
}

pub async fn delete(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(member_id): Path<i64>,
) -> Result<impl IntoResponse, MemberError> {
    MemberService::delete(&state, &ctx, member_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, MemberError> {
    let page = PageRequest::try_from(params).map_err(MemberError::Validation)?;
    let members = MemberService::list(&state, &ctx, page).await?;
    Ok((StatusCode::OK, Json(members)))
}

pub async fn find_user_id(
    State(state): State<AppState>,
    Json(request): Json<FindUserIdRequestBody>,
) -> Result<impl IntoResponse, MemberError> {
    let found = MemberService::find_user_id(&state, request).await?;
    Ok((StatusCode::OK, Json(found)))
}

pub async fn check_password(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Json(request): Json<PasswordCheckRequestBody>,
) -> Result<impl IntoResponse, MemberError> {
    MemberService::check_password(&state, &ctx, &request.password).await?;
    Ok(StatusCode::OK)
}

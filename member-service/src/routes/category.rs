use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{
    CategoryCreateRequest, CategoryOrderRequest, CategorySearchParams, CategoryStatusRequest,
    CategoryUpdateRequest,
};
use crate::errors::BoardError;
use crate::routes::Authenticated;
use crate::services::CategoryService;

pub async fn list_categories(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
) -> Result<impl IntoResponse, BoardError> {
    let categories = CategoryService::list_active(&state, &ctx).await?;
    Ok((StatusCode::OK, Json(categories)))
}

pub async fn get_category(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(category_id): Path<i64>,
) -> Result<impl IntoResponse, BoardError> {
    let category = CategoryService::get(&state, &ctx, category_id).await?;
    Ok((StatusCode::OK, Json(category)))
}

pub async fn create_category(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Json(request): Json<CategoryCreateRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let category = CategoryService::create(&state, &ctx, request).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(category_id): Path<i64>,
    Json(request): Json<CategoryUpdateRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let category = CategoryService::update(&state, &ctx, category_id, request).await?;
    Ok((StatusCode::OK, Json(category)))
}

pub async fn change_category_status(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(category_id): Path<i64>,
    Json(request): Json<CategoryStatusRequest>,
) -> Result<impl IntoResponse, BoardError> {
    CategoryService::change_status(&state, &ctx, category_id, &request.status).await?;
    Ok(StatusCode::OK)
}

pub async fn change_category_order(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(category_id): Path<i64>,
    Json(request): Json<CategoryOrderRequest>,
) -> Result<impl IntoResponse, BoardError> {
    CategoryService::change_order(&state, &ctx, category_id, request.order).await?;
    Ok(StatusCode::OK)
}

pub async fn search_categories(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Query(params): Query<CategorySearchParams>,
) -> Result<impl IntoResponse, BoardError> {
    let categories = CategoryService::search(&state, &ctx, &params.name).await?;
    Ok((StatusCode::OK, Json(categories)))
}

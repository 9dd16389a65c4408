use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{
    page_of, AdminBoardParams, AdminBoardSearchParams, BoardCreateRequest, BoardListParams,
    BoardSearchParams, BoardStatusRequest, BoardUpdateRequest,
};
use crate::errors::BoardError;
use crate::routes::{Authenticated, MaybeAuthenticated};
use crate::services::BoardService;

pub async fn create_board(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Json(request): Json<BoardCreateRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let board = BoardService::create(&state, &ctx, request).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

pub async fn get_board(
    State(state): State<AppState>,
    MaybeAuthenticated(ctx): MaybeAuthenticated,
    Path(board_id): Path<i64>,
) -> Result<impl IntoResponse, BoardError> {
    let board = BoardService::get(&state, ctx.as_ref(), board_id).await?;
    Ok((StatusCode::OK, Json(board)))
}

pub async fn update_board(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(board_id): Path<i64>,
    Json(request): Json<BoardUpdateRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let board = BoardService::update(&state, &ctx, board_id, request).await?;
    Ok((StatusCode::OK, Json(board)))
}

pub async fn boards_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(params): Query<BoardListParams>,
) -> Result<impl IntoResponse, BoardError> {
    let page = page_of(params.page, params.size).map_err(BoardError::Validation)?;
    let boards =
        BoardService::list_by_category(&state, category_id, params.board_type, page).await?;
    Ok((StatusCode::OK, Json(boards)))
}

pub async fn search_boards(
    State(state): State<AppState>,
    Query(params): Query<BoardSearchParams>,
) -> Result<impl IntoResponse, BoardError> {
    let page = page_of(params.page, params.size).map_err(BoardError::Validation)?;
    let boards = BoardService::search(&state, &params.keyword, params.board_type, page).await?;
    Ok((StatusCode::OK, Json(boards)))
}

pub async fn boards_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
    Query(params): Query<BoardListParams>,
) -> Result<impl IntoResponse, BoardError> {
    let page = page_of(params.page, params.size).map_err(BoardError::Validation)?;
    let boards = BoardService::list_by_member(&state, member_id, params.board_type, page).await?;
    Ok((StatusCode::OK, Json(boards)))
}

pub async fn admin_boards(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Query(params): Query<AdminBoardParams>,
) -> Result<impl IntoResponse, BoardError> {
    let page = page_of(params.page, params.size).map_err(BoardError::Validation)?;
    let boards = BoardService::admin_list(&state, &ctx, params.status.as_deref(), page).await?;
    Ok((StatusCode::OK, Json(boards)))
}

pub async fn admin_board_counts(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
) -> Result<impl IntoResponse, BoardError> {
    let counts = BoardService::admin_counts(&state, &ctx).await?;
    Ok((StatusCode::OK, Json(counts)))
}

pub async fn admin_search_boards(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Query(params): Query<AdminBoardSearchParams>,
) -> Result<impl IntoResponse, BoardError> {
    let page = page_of(params.page, params.size).map_err(BoardError::Validation)?;
    let boards = BoardService::admin_search(
        &state,
        &ctx,
        params.category_id,
        params.board_type,
        params.status.as_deref(),
        &params.keyword,
        page,
    )
    .await?;
    Ok((StatusCode::OK, Json(boards)))
}

pub async fn change_board_status(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Path(board_id): Path<i64>,
    Json(request): Json<BoardStatusRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let board = BoardService::change_status(&state, &ctx, board_id, &request.status).await?;
    Ok((StatusCode::OK, Json(board)))
}

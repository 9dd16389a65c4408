use crate::app_state::AppState;
use crate::domain::{
    AdminBoardFilter, AuthContext, BoardCreateRequest, BoardResponse, BoardStatus,
    BoardStatusCount, BoardText, BoardType, BoardUpdateRequest, NewBoard, Page, PageRequest,
    Role,
};
use crate::errors::{AuthError, BoardError};

pub struct BoardService {}

impl BoardService {
    pub async fn create(
        state: &AppState,
        ctx: &AuthContext,
        request: BoardCreateRequest,
    ) -> Result<BoardResponse, BoardError> {
        ctx.require(Role::User)?;
        let text = BoardText::new(request.title, request.content).map_err(BoardError::Validation)?;

        state
            .category_store
            .read()
            .await
            .get_active_by_id(request.category_id)
            .await?;

        let board = state
            .board_store
            .write()
            .await
            .insert(NewBoard {
                category_id: request.category_id,
                member_id: ctx.member_id,
                text,
                board_type: request.board_type,
                board_status: request.board_status.unwrap_or_default(),
            })
            .await?;

        log::info!(
            "board {} created by member {}",
            board.board_id,
            ctx.member_id
        );
        Ok(BoardResponse::from(&board))
    }

    /// Unpublished boards look missing to everyone but their author and administrators.
    pub async fn get(
        state: &AppState,
        ctx: Option<&AuthContext>,
        board_id: i64,
    ) -> Result<BoardResponse, BoardError> {
        let board = state.board_store.read().await.get_by_id(board_id).await?;
        let visible = board.is_published()
            || ctx.is_some_and(|c| c.is_admin() || c.member_id == board.member_id);
        if !visible {
            return Err(BoardError::BoardNotFound);
        }
        Ok(BoardResponse::from(&board))
    }

    pub async fn update(
        state: &AppState,
        ctx: &AuthContext,
        board_id: i64,
        request: BoardUpdateRequest,
    ) -> Result<BoardResponse, BoardError> {
        ctx.require(Role::User)?;
        let text = BoardText::new(request.title, request.content).map_err(BoardError::Validation)?;

        let mut store = state.board_store.write().await;
        let mut board = store.get_by_id(board_id).await?;
        if board.member_id != ctx.member_id {
            return Err(AuthError::Forbidden.into());
        }
        board.title = text.title;
        board.content = text.content;
        let saved = store.save(board).await?;
        Ok(BoardResponse::from(&saved))
    }

    pub async fn list_by_category(
        state: &AppState,
        category_id: i64,
        board_type: BoardType,
        page: PageRequest,
    ) -> Result<Page<BoardResponse>, BoardError> {
        let boards = state
            .board_store
            .read()
            .await
            .find_by_category(category_id, board_type, &page)
            .await?;
        Ok(boards.map(|b| BoardResponse::from(&b)))
    }

    pub async fn search(
        state: &AppState,
        keyword: &str,
        board_type: BoardType,
        page: PageRequest,
    ) -> Result<Page<BoardResponse>, BoardError> {
        let boards = state
            .board_store
            .read()
            .await
            .search_by_title_or_content(keyword, board_type, &page)
            .await?;
        Ok(boards.map(|b| BoardResponse::from(&b)))
    }

    pub async fn list_by_member(
        state: &AppState,
        member_id: i64,
        board_type: BoardType,
        page: PageRequest,
    ) -> Result<Page<BoardResponse>, BoardError> {
        let boards = state
            .board_store
            .read()
            .await
            .find_by_member(member_id, board_type, &page)
            .await?;
        Ok(boards.map(|b| BoardResponse::from(&b)))
    }

    /// `status: None` lists every status.
    pub async fn admin_list(
        state: &AppState,
        ctx: &AuthContext,
        status: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<BoardResponse>, BoardError> {
        ctx.require(Role::Admin)?;
        let status = parse_status(status)?;
        let boards = state
            .board_store
            .read()
            .await
            .find_by_status(status, &page)
            .await?;
        Ok(boards.map(|b| BoardResponse::from(&b)))
    }

    pub async fn admin_counts(
        state: &AppState,
        ctx: &AuthContext,
    ) -> Result<BoardStatusCount, BoardError> {
        ctx.require(Role::Admin)?;
        Ok(state.board_store.read().await.count_by_status().await?)
    }

    pub async fn admin_search(
        state: &AppState,
        ctx: &AuthContext,
        category_id: i64,
        board_type: BoardType,
        status: Option<&str>,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<BoardResponse>, BoardError> {
        ctx.require(Role::Admin)?;
        let filter = AdminBoardFilter {
            category_id,
            board_type,
            status: parse_status(status)?,
            keyword: keyword.trim().to_owned(),
        };
        let boards = state
            .board_store
            .read()
            .await
            .search_for_admin(&filter, &page)
            .await?;
        Ok(boards.map(|b| BoardResponse::from(&b)))
    }

    pub async fn change_status(
        state: &AppState,
        ctx: &AuthContext,
        board_id: i64,
        status: &str,
    ) -> Result<BoardResponse, BoardError> {
        ctx.require(Role::Admin)?;
        let status = status
            .parse::<BoardStatus>()
            .map_err(BoardError::InvalidStatus)?;

        let mut store = state.board_store.write().await;
        let mut board = store.get_by_id(board_id).await?;
        let previous = board.board_status;
        board.board_status = status;
        let saved = store.save(board).await?;

        log::info!("board {board_id} status {previous:?} -> {status:?}");
        Ok(BoardResponse::from(&saved))
    }
}

fn parse_status(status: Option<&str>) -> Result<Option<BoardStatus>, BoardError> {
    status
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<BoardStatus>)
        .transpose()
        .map_err(BoardError::InvalidStatus)
}

use thiserror::Error;

use crate::domain::{
    AdminBoardFilter, Board, BoardStatus, BoardStatusCount, BoardType, NewBoard, Page,
    PageRequest,
};

#[derive(Error, Debug, PartialEq)]
pub enum BoardStoreError {
    #[error("board not found")]
    NotFound,
    #[error("unexpected board store error: {0}")]
    Unexpected(String),
}

/// Board posts. Every listing is ordered newest first.
#[async_trait::async_trait]
pub trait BoardStore: Send + Sync {
    async fn insert(&mut self, board: NewBoard) -> Result<Board, BoardStoreError>;
    async fn get_by_id(&self, board_id: i64) -> Result<Board, BoardStoreError>;
    async fn save(&mut self, board: Board) -> Result<Board, BoardStoreError>;

    /// Published boards of one category and type.
    async fn find_by_category(
        &self,
        category_id: i64,
        board_type: BoardType,
        page: &PageRequest,
    ) -> Result<Page<Board>, BoardStoreError>;
    /// Published boards whose title or content contains `keyword`.
    async fn search_by_title_or_content(
        &self,
        keyword: &str,
        board_type: BoardType,
        page: &PageRequest,
    ) -> Result<Page<Board>, BoardStoreError>;
    /// Published boards written by one member.
    async fn find_by_member(
        &self,
        member_id: i64,
        board_type: BoardType,
        page: &PageRequest,
    ) -> Result<Page<Board>, BoardStoreError>;
    /// `None` matches every status.
    async fn find_by_status(
        &self,
        status: Option<BoardStatus>,
        page: &PageRequest,
    ) -> Result<Page<Board>, BoardStoreError>;
    async fn count_by_status(&self) -> Result<BoardStatusCount, BoardStoreError>;
    /// Title-only keyword search within one category.
    async fn search_for_admin(
        &self,
        filter: &AdminBoardFilter,
        page: &PageRequest,
    ) -> Result<Page<Board>, BoardStoreError>;
}

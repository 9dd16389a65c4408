use chrono::Utc;
use std::collections::BTreeMap;

use crate::domain::{
    AdminBoardFilter, Board, BoardStatus, BoardStatusCount, BoardStore, BoardStoreError,
    BoardType, NewBoard, Page, PageRequest,
};

#[derive(Default)]
pub struct HashmapBoardStore {
    boards: BTreeMap<i64, Board>,
    last_id: i64,
}

impl HashmapBoardStore {
    fn newest_first<F>(&self, predicate: F, page: &PageRequest) -> Page<Board>
    where
        F: Fn(&Board) -> bool,
    {
        let mut matched: Vec<Board> = self.boards.values().filter(|b| predicate(b)).cloned().collect();
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.board_id.cmp(&a.board_id))
        });
        Page::from_ordered(matched, page)
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait::async_trait]
impl BoardStore for HashmapBoardStore {
    async fn insert(&mut self, board: NewBoard) -> Result<Board, BoardStoreError> {
        self.last_id += 1;
        let now = Utc::now();
        let record = Board {
            board_id: self.last_id,
            category_id: board.category_id,
            member_id: board.member_id,
            title: board.text.title,
            content: board.text.content,
            board_type: board.board_type,
            board_status: board.board_status,
            created_at: now,
            updated_at: now,
        };
        self.boards.insert(record.board_id, record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, board_id: i64) -> Result<Board, BoardStoreError> {
        self.boards
            .get(&board_id)
            .cloned()
            .ok_or(BoardStoreError::NotFound)
    }

    async fn save(&mut self, board: Board) -> Result<Board, BoardStoreError> {
        let slot = self
            .boards
            .get_mut(&board.board_id)
            .ok_or(BoardStoreError::NotFound)?;
        *slot = Board {
            updated_at: Utc::now(),
            ..board
        };
        Ok(slot.clone())
    }

    async fn find_by_category(
        &self,
        category_id: i64,
        board_type: BoardType,
        page: &PageRequest,
    ) -> Result<Page<Board>, BoardStoreError> {
        Ok(self.newest_first(
            |b| b.category_id == category_id && b.board_type == board_type && b.is_published(),
            page,
        ))
    }

    async fn search_by_title_or_content(
        &self,
        keyword: &str,
        board_type: BoardType,
        page: &PageRequest,
    ) -> Result<Page<Board>, BoardStoreError> {
        Ok(self.newest_first(
            |b| {
                b.board_type == board_type
                    && b.is_published()
                    && (contains(&b.title, keyword) || contains(&b.content, keyword))
            },
            page,
        ))
    }

    async fn find_by_member(
        &self,
        member_id: i64,
        board_type: BoardType,
        page: &PageRequest,
    ) -> Result<Page<Board>, BoardStoreError> {
        Ok(self.newest_first(
            |b| b.member_id == member_id && b.board_type == board_type && b.is_published(),
            page,
        ))
    }

    async fn find_by_status(
        &self,
        status: Option<BoardStatus>,
        page: &PageRequest,
    ) -> Result<Page<Board>, BoardStoreError> {
        Ok(self.newest_first(
            |b| status.map_or(true, |s| b.board_status == s),
            page,
        ))
    }

    async fn count_by_status(&self) -> Result<BoardStatusCount, BoardStoreError> {
        let mut counts = BoardStatusCount::default();
        for board in self.boards.values() {
            counts.total += 1;
            match board.board_status {
                BoardStatus::Published => counts.published += 1,
                BoardStatus::Hidden => counts.hidden += 1,
                BoardStatus::Draft => counts.draft += 1,
            }
        }
        Ok(counts)
    }

    async fn search_for_admin(
        &self,
        filter: &AdminBoardFilter,
        page: &PageRequest,
    ) -> Result<Page<Board>, BoardStoreError> {
        Ok(self.newest_first(
            |b| {
                b.category_id == filter.category_id
                    && b.board_type == filter.board_type
                    && filter.status.map_or(true, |s| b.board_status == s)
                    && contains(&b.title, &filter.keyword)
            },
            page,
        ))
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PageRequest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoardType {
    #[default]
    Community,
    Sighting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoardStatus {
    #[default]
    Published,
    Hidden,
    Draft,
}

impl std::str::FromStr for BoardStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PUBLISHED" => Ok(BoardStatus::Published),
            "HIDDEN" => Ok(BoardStatus::Hidden),
            "DRAFT" => Ok(BoardStatus::Draft),
            _ => Err(format!("unknown board status: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub board_id: i64,
    pub category_id: i64,
    pub member_id: i64,
    pub title: String,
    pub content: String,
    pub board_type: BoardType,
    pub board_status: BoardStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn is_published(&self) -> bool {
        self.board_status == BoardStatus::Published
    }
}

/// Title and body after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardText {
    pub title: String,
    pub content: String,
}

impl BoardText {
    pub const MAX_TITLE_CHARS: usize = 100;

    pub fn new(title: String, content: String) -> Result<Self, String> {
        let title = title.trim().to_owned();
        if title.is_empty() || title.chars().count() > Self::MAX_TITLE_CHARS {
            return Err(format!(
                "title must be between 1 and {} characters",
                Self::MAX_TITLE_CHARS
            ));
        }
        if content.trim().is_empty() {
            return Err("content must not be blank".to_string());
        }
        Ok(Self { title, content })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBoard {
    pub category_id: i64,
    pub member_id: i64,
    pub text: BoardText,
    pub board_type: BoardType,
    pub board_status: BoardStatus,
}

/// Admin search filter; `status: None` matches every status.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminBoardFilter {
    pub category_id: i64,
    pub board_type: BoardType,
    pub status: Option<BoardStatus>,
    pub keyword: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStatusCount {
    pub total: u64,
    pub published: u64,
    pub hidden: u64,
    pub draft: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BoardCreateRequest {
    pub category_id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub board_type: BoardType,
    pub board_status: Option<BoardStatus>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BoardUpdateRequest {
    pub title: String,
    pub content: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct BoardStatusRequest {
    pub status: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct BoardListParams {
    #[serde(rename = "type", default)]
    pub board_type: BoardType,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct BoardSearchParams {
    pub keyword: String,
    #[serde(rename = "type", default)]
    pub board_type: BoardType,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AdminBoardParams {
    pub status: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AdminBoardSearchParams {
    pub category_id: i64,
    #[serde(rename = "type", default)]
    pub board_type: BoardType,
    pub status: Option<String>,
    #[serde(default)]
    pub keyword: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

pub fn page_of(page: Option<u32>, size: Option<u32>) -> Result<PageRequest, String> {
    PageRequest::try_from(super::PageParams { page, size })
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub board_id: i64,
    pub category_id: i64,
    pub member_id: i64,
    pub title: String,
    pub content: String,
    pub board_type: BoardType,
    pub board_status: BoardStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Board> for BoardResponse {
    fn from(board: &Board) -> Self {
        Self {
            board_id: board.board_id,
            category_id: board.category_id,
            member_id: board.member_id,
            title: board.title.clone(),
            content: board.content.clone(),
            board_type: board.board_type,
            board_status: board.board_status,
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}

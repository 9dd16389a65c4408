use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::AuthError;
use crate::domain::{BoardStoreError, CategoryStoreError};

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidStatus(String),

    #[error("category not found")]
    CategoryNotFound,

    #[error("parent category not found")]
    ParentCategoryNotFound,

    #[error("board not found")]
    BoardNotFound,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<CategoryStoreError> for BoardError {
    fn from(e: CategoryStoreError) -> Self {
        match e {
            CategoryStoreError::NotFound => BoardError::CategoryNotFound,
            CategoryStoreError::Unexpected(msg) => {
                log::error!("category store failure: {msg}");
                BoardError::InternalServerError
            }
        }
    }
}

impl From<BoardStoreError> for BoardError {
    fn from(e: BoardStoreError) -> Self {
        match e {
            BoardStoreError::NotFound => BoardError::BoardNotFound,
            BoardStoreError::Unexpected(msg) => {
                log::error!("board store failure: {msg}");
                BoardError::InternalServerError
            }
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            BoardError::Auth(e) => return e.into_response(),
            BoardError::Validation(_) => StatusCode::BAD_REQUEST,
            BoardError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            BoardError::CategoryNotFound => StatusCode::NOT_FOUND,
            BoardError::ParentCategoryNotFound => StatusCode::NOT_FOUND,
            BoardError::BoardNotFound => StatusCode::NOT_FOUND,
            BoardError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

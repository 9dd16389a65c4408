use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::AuthError;
use crate::domain::MemberStoreError;

#[derive(Error, Debug)]
pub enum MemberError {
    #[error("{0}")]
    Validation(String),

    #[error("user id already registered")]
    UserIdTaken,

    #[error("email already registered")]
    EmailTaken,

    #[error("member not found")]
    MemberNotFound,

    #[error("address not found")]
    AddressNotFound,

    #[error("password does not match")]
    PasswordMismatch,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<MemberStoreError> for MemberError {
    fn from(e: MemberStoreError) -> Self {
        match e {
            MemberStoreError::UserIdTaken => MemberError::UserIdTaken,
            MemberStoreError::EmailTaken => MemberError::EmailTaken,
            MemberStoreError::MemberNotFound => MemberError::MemberNotFound,
            MemberStoreError::AddressNotFound => MemberError::AddressNotFound,
            MemberStoreError::Unexpected(msg) => {
                log::error!("member store failure: {msg}");
                MemberError::InternalServerError
            }
        }
    }
}

impl IntoResponse for MemberError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            MemberError::Auth(e) => return e.into_response(),
            MemberError::Validation(_) => StatusCode::BAD_REQUEST,
            MemberError::UserIdTaken => StatusCode::CONFLICT,
            MemberError::EmailTaken => StatusCode::CONFLICT,
            MemberError::MemberNotFound => StatusCode::NOT_FOUND,
            MemberError::AddressNotFound => StatusCode::NOT_FOUND,
            MemberError::PasswordMismatch => StatusCode::BAD_REQUEST,
            MemberError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

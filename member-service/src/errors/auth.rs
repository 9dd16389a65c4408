use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use thiserror::Error;

use crate::domain::SessionStoreError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("member not found")]
    NotFound,

    #[error("bearer token not provided")]
    MissingToken,

    #[error("token expired")]
    TokenExpired,

    #[error("token signature or kind rejected")]
    TokenInvalid,

    #[error("token could not be decoded")]
    TokenMalformed,

    #[error("session store unavailable")]
    SessionStoreUnavailable,

    #[error("access denied")]
    Forbidden,

    #[error("failed to sign token")]
    Signing,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::NotFound
            | AuthError::MissingToken
            | AuthError::TokenExpired
            | AuthError::TokenInvalid
            | AuthError::TokenMalformed => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::SessionStoreUnavailable
            | AuthError::Signing
            | AuthError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing text. Credential and token failures are collapsed so callers
    /// cannot tell which check failed.
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials | AuthError::NotFound => "Invalid user id or password.",
            AuthError::MissingToken
            | AuthError::TokenExpired
            | AuthError::TokenInvalid
            | AuthError::TokenMalformed => "Invalid or expired token.",
            AuthError::Forbidden => "You do not have permission to perform this action.",
            AuthError::SessionStoreUnavailable => {
                "Session store unavailable, please try again later."
            }
            AuthError::Signing | AuthError::InternalServerError => {
                "Something went wrong, please try again later."
            }
        }
    }
}

impl From<SessionStoreError> for AuthError {
    fn from(e: SessionStoreError) -> Self {
        log::error!("session store failure: {e}");
        AuthError::SessionStoreUnavailable
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status == StatusCode::UNAUTHORIZED {
            (
                status,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                self.public_message(),
            )
                .into_response()
        } else {
            (status, self.public_message()).into_response()
        }
    }
}

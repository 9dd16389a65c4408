use axum::http::{header, HeaderMap};

use crate::domain::{AuthContext, TokenKind};
use crate::errors::AuthError;
use crate::services::TokenService;
use crate::utils::BEARER_PREFIX;

/// Per-request check of the bearer access token. Holds no state of its own.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// `Ok(None)` when no `Authorization` header was sent at all.
    pub fn bearer_token(&self) -> Result<Option<&'a str>, AuthError> {
        let Some(value) = self.headers.get(header::AUTHORIZATION) else {
            return Ok(None);
        };
        let token = value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::TokenMalformed)?;
        Ok(Some(token))
    }

    pub fn authenticate(&self) -> Result<AuthContext, AuthError> {
        let token = self.bearer_token()?.ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify(token, TokenKind::Access)?;
        Ok(AuthContext::from(claims))
    }

    /// Anonymous callers get `None`; a header carrying a bad token is still an error.
    pub fn authenticate_optional(&self) -> Result<Option<AuthContext>, AuthError> {
        match self.bearer_token()? {
            None => Ok(None),
            Some(token) => {
                let claims = self.tokens.verify(token, TokenKind::Access)?;
                Ok(Some(AuthContext::from(claims)))
            }
        }
    }
}

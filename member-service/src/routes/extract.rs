use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::app_state::AppState;
use crate::domain::AuthContext;
use crate::errors::AuthError;
use crate::services::AuthGuard;

/// Caller identity from a valid bearer access token. Rejects with 401 otherwise.
pub struct Authenticated(pub AuthContext);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthGuard::new(&state.token_service, &parts.headers)
            .authenticate()
            .map(Authenticated)
    }
}

/// Like [`Authenticated`], but anonymous requests pass through as `None`.
pub struct MaybeAuthenticated(pub Option<AuthContext>);

impl FromRequestParts<AppState> for MaybeAuthenticated {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthGuard::new(&state.token_service, &parts.headers)
            .authenticate_optional()
            .map(MaybeAuthenticated)
    }
}

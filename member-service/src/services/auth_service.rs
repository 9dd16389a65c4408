//! Login, refresh and logout.
//!
//! A login walks `Received -> Verified -> TokensIssued -> SessionPersisted -> Responded`.
//! A failure at any stage ends the transaction without touching later stages: a rejected
//! login never writes a session, and a signing failure never reaches the session store.
use chrono::{Duration, Utc};

use crate::app_state::AppState;
use crate::domain::{AuthContext, LoginResponse, RefreshSession, TokenKind, TokenSubject};
use crate::errors::AuthError;
use crate::services::CredentialVerifier;

pub struct AuthService {}

impl AuthService {
    pub async fn login(
        state: &AppState,
        identifier: &str,
        secret: &str,
    ) -> Result<LoginResponse, AuthError> {
        log::debug!("login received for {identifier}");

        let member = CredentialVerifier::new(&state.member_store, &state.hasher)
            .verify(identifier, secret)
            .await
            .inspect_err(|e| log::info!("login rejected for {identifier}: {e}"))?;

        let subject = member.token_subject();
        let tokens = Self::issue_pair(state, &subject)?;
        Self::persist_session(state, &subject, &tokens.refresh_token).await?;

        log::info!("member {} logged in", member.member_id);
        Ok(tokens)
    }

    /// Exchange a refresh token for a new pair. The presented token is superseded.
    pub async fn refresh(state: &AppState, presented: &str) -> Result<LoginResponse, AuthError> {
        let claims = state.token_service.verify(presented, TokenKind::Refresh)?;

        let session = state
            .session_store
            .read()
            .await
            .get(&claims.username)
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        if session.identity_id != claims.identity_id
            || !session.matches(presented, state.config.refresh_hash_key())
        {
            log::warn!(
                "superseded refresh token presented for member {}",
                claims.identity_id
            );
            return Err(AuthError::TokenInvalid);
        }

        // Role or email may have changed since the token was minted.
        let member = state
            .member_store
            .read()
            .await
            .get_by_id(claims.identity_id)
            .await
            .map_err(|_| AuthError::TokenInvalid)?;

        let subject = member.token_subject();
        let tokens = Self::issue_pair(state, &subject)?;
        Self::persist_session(state, &subject, &tokens.refresh_token).await?;

        log::info!("rotated refresh session for member {}", member.member_id);
        Ok(tokens)
    }

    /// Drops the caller's refresh session. Outstanding access tokens stay valid until expiry.
    pub async fn logout(state: &AppState, ctx: &AuthContext) -> Result<bool, AuthError> {
        let removed = state
            .session_store
            .write()
            .await
            .invalidate(&ctx.user_id)
            .await?;
        log::info!("member {} logged out", ctx.member_id);
        Ok(removed)
    }

    fn issue_pair(state: &AppState, subject: &TokenSubject) -> Result<LoginResponse, AuthError> {
        let access_token = state
            .token_service
            .issue_access(subject, Duration::seconds(state.config.access_ttl_seconds()))?;
        let refresh_token = state
            .token_service
            .issue_refresh(subject, Duration::seconds(state.config.refresh_ttl_seconds()))?;
        Ok(LoginResponse {
            access_token,
            refresh_token,
        })
    }

    async fn persist_session(
        state: &AppState,
        subject: &TokenSubject,
        refresh_token: &str,
    ) -> Result<(), AuthError> {
        let ttl = Duration::seconds(state.config.refresh_ttl_seconds());
        let session = RefreshSession::new(
            subject.identity_id,
            &subject.username,
            refresh_token,
            state.config.refresh_hash_key(),
            Utc::now() + ttl,
        );
        state.session_store.write().await.put(session, ttl).await?;
        Ok(())
    }
}

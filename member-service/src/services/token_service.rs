//! Token issuance and verification.
//!
//! Access and refresh tokens are both HS256 JWTs carrying the same identity claims and a
//! `tokenKind` marker. Verification checks, in order: header decodes and names a known key,
//! signature, claim shape, kind, expiry. Expiry is checked here rather than by
//! `jsonwebtoken` so the claim names stay `issuedAt`/`expiresAt` and the clock can be
//! supplied by the caller.
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as B64, Engine};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, Header, Validation};
use rand::RngCore;
use std::collections::HashSet;

use crate::domain::{JwtKeyStore, TokenClaims, TokenKind, TokenSubject};
use crate::errors::AuthError;
use crate::utils::Config;

/// Stateless signer/verifier; cheap to share behind an `Arc`.
#[derive(Clone)]
pub struct TokenService {
    keys: JwtKeyStore,
}

impl TokenService {
    pub fn new(keys: JwtKeyStore) -> Self {
        Self { keys }
    }

    /// `None` when the configured active key is missing from the key ring.
    pub fn from_config(config: &Config) -> Option<Self> {
        JwtKeyStore::from_config(config.jwt_keys(), config.jwt_active_kid()).map(Self::new)
    }

    pub fn issue_access(&self, subject: &TokenSubject, ttl: Duration) -> Result<String, AuthError> {
        self.issue_at(subject, TokenKind::Access, ttl, Utc::now())
    }

    /// Refresh tokens carry a random nonce so two refresh tokens are never equal.
    pub fn issue_refresh(
        &self,
        subject: &TokenSubject,
        ttl: Duration,
    ) -> Result<String, AuthError> {
        self.issue_at(subject, TokenKind::Refresh, ttl, Utc::now())
    }

    pub fn issue_at(
        &self,
        subject: &TokenSubject,
        kind: TokenKind,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let expires_at = now.checked_add_signed(ttl).ok_or(AuthError::Signing)?;

        let claims = TokenClaims {
            identity_id: subject.identity_id,
            username: subject.username.clone(),
            email: subject.email.clone(),
            role: subject.role,
            token_kind: kind,
            issued_at: now.timestamp(),
            expires_at: expires_at.timestamp(),
            nonce: match kind {
                TokenKind::Access => None,
                TokenKind::Refresh => Some(new_nonce()),
            },
        };

        let (enc_key, kid) = self.keys.encoding_key_and_kid();
        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some(kid.to_string());

        encode(&header, &claims, enc_key).map_err(|e| {
            log::error!("failed to sign {kind:?} token: {e}");
            AuthError::Signing
        })
    }

    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, AuthError> {
        self.verify_at(token, expected, Utc::now())
    }

    /// Verify `token` as a token of kind `expected` at instant `now`.
    ///
    /// Errors:
    /// - `TokenMalformed`: not a JWT, or claims do not decode
    /// - `TokenInvalid`: unknown key id, bad signature, or wrong kind
    /// - `TokenExpired`: `now` is past `expiresAt`
    pub fn verify_at(
        &self,
        token: &str,
        expected: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<TokenClaims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::TokenMalformed)?;
        if header.alg != Algorithm::HS256 {
            return Err(AuthError::TokenInvalid);
        }

        let key = self
            .keys
            .decoding_key_for_kid(header.kid.as_deref())
            .ok_or(AuthError::TokenInvalid)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        let claims = decode::<TokenClaims>(token, key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidAlgorithmName
                | ErrorKind::InvalidKeyFormat => AuthError::TokenInvalid,
                _ => AuthError::TokenMalformed,
            })?;

        if claims.token_kind != expected {
            return Err(AuthError::TokenInvalid);
        }
        if now.timestamp() > claims.expires_at {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }
}

fn new_nonce() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    B64.encode(bytes)
}

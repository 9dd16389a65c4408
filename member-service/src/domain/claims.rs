use serde::{Deserialize, Serialize};

use super::Role;

/// Distinguishes access from refresh tokens so neither can stand in for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Identity facts embedded into every token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub identity_id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Signed claim bundle. Field names are part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub identity_id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub token_kind: TokenKind,
    pub issued_at: i64,  // unix seconds
    pub expires_at: i64, // unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

impl TokenClaims {
    pub fn subject(&self) -> TokenSubject {
        TokenSubject {
            identity_id: self.identity_id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

use super::{Role, TokenClaims};
use crate::errors::AuthError;

/// Verified caller identity, handed explicitly to every service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub member_id: i64,
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl AuthContext {
    pub fn require(&self, required: Role) -> Result<(), AuthError> {
        if self.role.grants(required) {
            return Ok(());
        }
        log::info!(
            "member {} with role {} denied {} operation",
            self.member_id,
            self.role,
            required
        );
        Err(AuthError::Forbidden)
    }

    /// Passes for the member themselves or an administrator.
    pub fn require_owner_or_admin(&self, member_id: i64) -> Result<(), AuthError> {
        if self.member_id == member_id || self.is_admin() {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<TokenClaims> for AuthContext {
    fn from(claims: TokenClaims) -> Self {
        Self {
            member_id: claims.identity_id,
            user_id: claims.username,
            email: claims.email,
            role: claims.role,
        }
    }
}

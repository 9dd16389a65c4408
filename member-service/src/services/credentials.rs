use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};

use crate::app_state::MemberStoreType;
use crate::domain::{Member, MemberStoreError};
use crate::errors::AuthError;
use crate::utils::Config;

#[derive(Debug, thiserror::Error)]
#[error("password hashing failed")]
pub struct HashingError;

/// Argon2id hasher. Work runs on the blocking pool.
#[derive(Clone, Debug)]
pub struct SecretHasher {
    memory_kib: u32,
    iterations: u32,
}

impl SecretHasher {
    pub fn new(memory_kib: u32, iterations: u32) -> Self {
        Self {
            memory_kib,
            iterations,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.argon2_memory_kib(), config.argon2_iterations())
    }

    pub async fn hash(&self, secret: &str) -> Result<String, HashingError> {
        let secret = secret.to_owned();
        let (memory_kib, iterations) = (self.memory_kib, self.iterations);
        tokio::task::spawn_blocking(move || {
            let params =
                Params::new(memory_kib, iterations, 1, None).map_err(|_| HashingError)?;
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(secret.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashingError)
        })
        .await
        .map_err(|_| HashingError)?
    }

    /// Parameters and salt come from the stored PHC string.
    pub async fn verify(&self, secret: &str, stored_hash: &str) -> Result<bool, HashingError> {
        let secret = secret.to_owned();
        let stored_hash = stored_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&stored_hash).map_err(|_| HashingError)?;
            Ok(Argon2::default()
                .verify_password(secret.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|_| HashingError)?
    }
}

/// Checks an identifier and secret against stored member records. No side effects.
///
/// The store lock is only held for the lookup, never while hashing.
pub struct CredentialVerifier<'a> {
    members: &'a MemberStoreType,
    hasher: &'a SecretHasher,
}

impl<'a> CredentialVerifier<'a> {
    pub fn new(members: &'a MemberStoreType, hasher: &'a SecretHasher) -> Self {
        Self { members, hasher }
    }

    pub async fn verify(&self, identifier: &str, secret: &str) -> Result<Member, AuthError> {
        let member = self
            .members
            .read()
            .await
            .get_by_user_id(identifier)
            .await
            .map_err(|e| match e {
                MemberStoreError::MemberNotFound => AuthError::NotFound,
                other => {
                    log::error!("member lookup failed: {other}");
                    AuthError::InternalServerError
                }
            })?;

        let matches = self
            .hasher
            .verify(secret, &member.password_hash)
            .await
            .map_err(|e| {
                log::error!("stored hash for member {} unusable: {e}", member.member_id);
                AuthError::InternalServerError
            })?;

        if matches {
            Ok(member)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

use std::collections::HashSet;
use std::env;

use base64::engine::general_purpose::{STANDARD as B64_STD, URL_SAFE_NO_PAD as B64_URL};
use base64::Engine;
use dotenvy::dotenv;
use serde::Deserialize;
use thiserror::Error;

use super::consts::{defaults, env as keys};

/// Credentials for an administrator created at startup when none exists yet.
#[derive(Clone, Debug)]
pub struct AdminBootstrap {
    pub user_id: String,
    pub password: String,
    pub email: String,
}

#[derive(Clone)]
pub struct Config {
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    refresh_hash_key_32: [u8; 32],
    jwt_keys: Vec<(String, Vec<u8>)>, // (kid, secret)
    active_kid: String,
    redis_host: Option<String>,
    app_address: String,
    argon2_memory_kib: u32,
    argon2_iterations: u32,
    admin: Option<AdminBootstrap>,
}

impl Config {
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }
    pub fn refresh_hash_key(&self) -> &[u8; 32] {
        &self.refresh_hash_key_32
    }
    pub fn jwt_active_kid(&self) -> &str {
        &self.active_kid
    }
    pub fn jwt_keys(&self) -> &[(String, Vec<u8>)] {
        &self.jwt_keys
    }
    pub fn redis_host(&self) -> Option<&str> {
        self.redis_host.as_deref()
    }
    pub fn app_address(&self) -> &str {
        &self.app_address
    }
    pub fn argon2_memory_kib(&self) -> u32 {
        self.argon2_memory_kib
    }
    pub fn argon2_iterations(&self) -> u32 {
        self.argon2_iterations
    }
    pub fn admin_bootstrap(&self) -> Option<&AdminBootstrap> {
        self.admin.as_ref()
    }

    /// Load from the process environment, reading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // no-op in prod if not present
        let _ = dotenv();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let access_ttl_seconds =
            vars.ttl_seconds(keys::ACCESS_TTL_SECONDS, defaults::ACCESS_TTL_SECONDS)?;
        let refresh_ttl_seconds =
            vars.ttl_seconds(keys::REFRESH_TTL_SECONDS, defaults::REFRESH_TTL_SECONDS)?;

        let refresh_hash_key_b64 = vars.required(keys::REFRESH_HASH_KEY_B64)?;
        let refresh_hash_key_vec = decode_b64_any(&refresh_hash_key_b64)
            .map_err(|_| ConfigError::Decode(keys::REFRESH_HASH_KEY_B64))?;
        let refresh_hash_key_32: [u8; 32] = refresh_hash_key_vec.try_into().map_err(|_| {
            ConfigError::WrongLen("REFRESH_HASH_KEY_B64 must decode to 32 bytes")
        })?;

        let active_kid = vars.required(keys::JWT_ACTIVE_KID)?;
        let jwt_keys = parse_hs256_keys_json(&vars.required(keys::JWT_HS256_KEYS_JSON)?)?;

        let kids: HashSet<_> = jwt_keys.iter().map(|(k, _)| k).collect();
        if !kids.contains(&active_kid) {
            return Err(ConfigError::Invalid(
                "JWT_ACTIVE_KID not found in JWT_HS256_KEYS_JSON",
            ));
        }

        let argon2_memory_kib = vars.positive_u32(
            keys::ARGON2_MEMORY_KIB,
            defaults::ARGON2_MEMORY_KIB,
        )?;
        let argon2_iterations =
            vars.positive_u32(keys::ARGON2_ITERATIONS, defaults::ARGON2_ITERATIONS)?;
        // parallelism 1, as in SecretHasher
        argon2::Params::new(argon2_memory_kib, argon2_iterations, 1, None)
            .map_err(|_| ConfigError::Invalid(keys::ARGON2_MEMORY_KIB))?;

        let admin = match (
            vars.optional(keys::ADMIN_USER_ID),
            vars.optional(keys::ADMIN_PASSWORD),
        ) {
            (Some(user_id), Some(password)) => Some(AdminBootstrap {
                email: vars
                    .optional(keys::ADMIN_EMAIL)
                    .unwrap_or_else(|| format!("{user_id}@localhost.local")),
                user_id,
                password,
            }),
            (None, None) => None,
            _ => {
                return Err(ConfigError::Invalid(
                    "ADMIN_USER_ID and ADMIN_PASSWORD must be set together",
                ))
            }
        };

        Ok(Self {
            access_ttl_seconds,
            refresh_ttl_seconds,
            refresh_hash_key_32,
            jwt_keys,
            active_kid,
            redis_host: vars.optional(keys::REDIS_HOST),
            app_address: vars
                .optional(keys::APP_ADDRESS)
                .unwrap_or_else(|| defaults::APP_ADDRESS.to_owned()),
            argon2_memory_kib,
            argon2_iterations,
            admin,
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("decode error in {0}")]
    Decode(&'static str),
    #[error("{0}")]
    WrongLen(&'static str),
}

struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.optional(key).ok_or(ConfigError::Missing(key))
    }

    /// Seconds in `1..=MAX_TTL_SECONDS`.
    fn ttl_seconds(&self, key: &'static str, default: i64) -> Result<i64, ConfigError> {
        match self.optional(key) {
            None => Ok(default),
            Some(v) => match v.trim().parse::<i64>() {
                Ok(n) if (1..=defaults::MAX_TTL_SECONDS).contains(&n) => Ok(n),
                _ => Err(ConfigError::Invalid(key)),
            },
        }
    }

    fn positive_u32(&self, key: &'static str, default: u32) -> Result<u32, ConfigError> {
        match self.optional(key) {
            None => Ok(default),
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ConfigError::Invalid(key)),
            },
        }
    }
}

fn decode_b64_any(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // URL-safe (no padding) first, then standard.
    B64_URL.decode(s).or_else(|_| B64_STD.decode(s))
}

#[derive(Deserialize)]
struct HsKey {
    kid: String,
    secret_b64: String,
}

fn parse_hs256_keys_json(raw: &str) -> Result<Vec<(String, Vec<u8>)>, ConfigError> {
    let parsed: Vec<HsKey> = serde_json::from_str(raw)
        .map_err(|_| ConfigError::Invalid(keys::JWT_HS256_KEYS_JSON))?;

    if parsed.is_empty() {
        return Err(ConfigError::Invalid("empty JWT keys"));
    }

    let mut out = Vec::with_capacity(parsed.len());
    let mut seen = HashSet::new();
    for k in parsed {
        if !seen.insert(k.kid.clone()) {
            return Err(ConfigError::Invalid("duplicate kid in keys JSON"));
        }
        let secret = decode_b64_any(&k.secret_b64)
            .map_err(|_| ConfigError::Decode(keys::JWT_HS256_KEYS_JSON))?;
        if secret.len() < 32 {
            return Err(ConfigError::WrongLen(
                "HS256 secret must be at least 32 bytes",
            ));
        }
        out.push((k.kid, secret));
    }
    Ok(out)
}

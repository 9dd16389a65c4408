pub mod env {
    pub const ACCESS_TTL_SECONDS: &str = "ACCESS_TTL_SECONDS";
    pub const REFRESH_TTL_SECONDS: &str = "REFRESH_TTL_SECONDS";
    pub const REFRESH_HASH_KEY_B64: &str = "REFRESH_HASH_KEY_B64";
    pub const JWT_ACTIVE_KID: &str = "JWT_ACTIVE_KID";
    pub const JWT_HS256_KEYS_JSON: &str = "JWT_HS256_KEYS_JSON";
    pub const REDIS_HOST: &str = "REDIS_HOST";
    pub const APP_ADDRESS: &str = "APP_ADDRESS";
    pub const ARGON2_MEMORY_KIB: &str = "ARGON2_MEMORY_KIB";
    pub const ARGON2_ITERATIONS: &str = "ARGON2_ITERATIONS";
    pub const ADMIN_USER_ID: &str = "ADMIN_USER_ID";
    pub const ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";
    pub const ADMIN_EMAIL: &str = "ADMIN_EMAIL";
}

pub mod defaults {
    pub const ACCESS_TTL_SECONDS: i64 = 30 * 60;
    /// Upper bound for either token TTL: 366 days.
    pub const MAX_TTL_SECONDS: i64 = 366 * 24 * 60 * 60;
    pub const REFRESH_TTL_SECONDS: i64 = 14 * 24 * 60 * 60;
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const ARGON2_MEMORY_KIB: u32 = 19_456;
    pub const ARGON2_ITERATIONS: u32 = 2;
}

pub const BEARER_PREFIX: &str = "Bearer ";
pub const REFRESH_SESSION_KEY_PREFIX: &str = "refresh_session:";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

use jsonwebtoken::{DecodingKey, EncodingKey};
use std::collections::HashMap;

/// HS256 key ring: one active signing key, every configured key accepted for verification.
#[derive(Clone)]
pub struct JwtKeyStore {
    active_kid: String,
    active: EncodingKey,
    keys: HashMap<String, DecodingKey>,
}

impl JwtKeyStore {
    /// Returns `None` when `active_kid` is not among `jwt_keys`.
    pub fn from_config(jwt_keys: &[(String, Vec<u8>)], active_kid: &str) -> Option<Self> {
        let active = jwt_keys
            .iter()
            .find(|(kid, _)| kid == active_kid)
            .map(|(_, secret)| EncodingKey::from_secret(secret))?;
        let keys = jwt_keys
            .iter()
            .map(|(kid, secret)| (kid.clone(), DecodingKey::from_secret(secret)))
            .collect();
        Some(Self {
            active_kid: active_kid.to_string(),
            active,
            keys,
        })
    }

    pub fn encoding_key_and_kid(&self) -> (&EncodingKey, &str) {
        (&self.active, &self.active_kid)
    }

    pub fn decoding_key_for_kid(&self, kid: Option<&str>) -> Option<&DecodingKey> {
        self.keys.get(kid.unwrap_or(&self.active_kid))
    }
}

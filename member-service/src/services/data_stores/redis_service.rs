use redis::{aio::MultiplexedConnection, AsyncCommands, Client, SetExpiry, SetOptions};

#[derive(Debug, thiserror::Error)]
pub enum RedisServiceErr {
    #[error("could not reach redis: {0}")]
    Connection(#[source] redis::RedisError),
    #[error("redis command failed: {0}")]
    Command(#[from] redis::RedisError),
}

/// Plain string values with optional expiry. Callers own key naming and encoding.
pub struct RedisService {
    client: Client,
}

impl RedisService {
    /// `host_url` is `host:port`; no connection is made until the first command.
    pub fn new(host_url: &str) -> Result<Self, RedisServiceErr> {
        let client =
            Client::open(format!("redis://{host_url}/")).map_err(RedisServiceErr::Connection)?;
        Ok(Self { client })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, RedisServiceErr> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(RedisServiceErr::Connection)
    }

    /// Overwrites whatever is stored under `key`. A zero TTL is bumped to one second.
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), RedisServiceErr> {
        let opts = SetOptions::default().with_expiration(SetExpiry::EX(ttl_seconds.max(1)));
        let mut conn = self.connection().await?;
        conn.set_options::<_, _, ()>(key, value, opts).await?;
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, RedisServiceErr> {
        let mut conn = self.connection().await?;
        Ok(conn.get(key).await?)
    }

    /// True when a value was actually removed.
    pub async fn delete_key(&self, key: &str) -> Result<bool, RedisServiceErr> {
        let mut conn = self.connection().await?;
        let removed: u32 = conn.del(key).await?;
        Ok(removed > 0)
    }
}

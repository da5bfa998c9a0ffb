//! Redis cache module
//!
//! A thin wrapper around a Redis client used for short-lived lookups such as
//! the public studio directory. Values are stored as strings; the JSON
//! helpers take care of encoding and decoding typed payloads.

use crate::error::CacheResult;
use redis::{AsyncCommands, Client};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

/// Configuration for the Redis connection
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL (e.g., "redis://localhost:6379")
    pub url: String,
}

impl RedisConfig {
    /// Create a new RedisConfig from environment variables
    ///
    /// # Environment Variables
    /// - `REDIS_URL`: Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> CacheResult<Self> {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

        Ok(RedisConfig { url })
    }
}

/// Redis-backed cache handle, cheap to clone into application state
#[derive(Clone)]
pub struct Cache {
    client: Client,
}

impl Cache {
    /// Initialize a new cache handle
    pub fn new(config: &RedisConfig) -> CacheResult<Self> {
        let client = Client::open(config.url.clone())?;
        info!("Redis client initialized with URL: {}", config.url);
        Ok(Cache { client })
    }

    async fn get_connection(&self) -> CacheResult<redis::aio::MultiplexedConnection> {
        let conn = self.client.get_multiplexed_async_connection().await?;
        Ok(conn)
    }

    /// Set a key-value pair with optional TTL in seconds
    pub async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let mut conn = self.get_connection().await?;

        if let Some(ttl) = ttl_seconds {
            let _: () = conn.set_ex(key, value, ttl).await?;
        } else {
            let _: () = conn.set(key, value).await?;
        }

        Ok(())
    }

    /// Get a value by key
    pub async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.get_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// Delete a key
    pub async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.get_connection().await?;
        let _: u64 = conn.del(key).await?;
        Ok(())
    }

    /// Store a JSON-encoded value with optional TTL in seconds
    pub async fn set_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.set(key, &encoded, ttl_seconds).await
    }

    /// Fetch and decode a JSON-encoded value, None on a cache miss
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        match self.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Check if Redis is reachable
    pub async fn health_check(&self) -> CacheResult<bool> {
        let mut conn = self.get_connection().await?;
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(pong == "PONG")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn local_cache() -> Cache {
        let config = RedisConfig {
            url: "redis://localhost:6379".to_string(),
        };
        Cache::new(&config).expect("Failed to create cache handle")
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running Redis instance"]
    async fn test_redis_connection() {
        let cache = local_cache();
        assert!(cache.health_check().await.unwrap());
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running Redis instance"]
    async fn test_set_get_delete() {
        let cache = local_cache();

        let key = "test_key";
        let value = "test_value";
        cache.set(key, value, Some(5)).await.unwrap();

        let retrieved = cache.get(key).await.unwrap();
        assert_eq!(retrieved, Some(value.to_string()));

        cache.delete(key).await.unwrap();
        let retrieved = cache.get(key).await.unwrap();
        assert_eq!(retrieved, None);
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a running Redis instance"]
    async fn test_json_round_trip() {
        let cache = local_cache();

        let key = "test_json_key";
        let value = vec!["north".to_string(), "south".to_string()];
        cache.set_json(key, &value, Some(5)).await.unwrap();

        let retrieved: Option<Vec<String>> = cache.get_json(key).await.unwrap();
        assert_eq!(retrieved, Some(value));

        cache.delete(key).await.unwrap();
    }
}

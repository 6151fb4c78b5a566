use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::error::StoreError;

/// 键值缓存存储抽象
///
/// 以显式句柄注入到各组件，测试中可替换为内存实现。
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// 读取指定键的原始字符串值，不存在或已过期时返回 None
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// 写入指定键，`ttl` 为空时不设置过期时间
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>)
    -> Result<(), StoreError>;
}

/// Redis 缓存存储
pub struct RedisStore {
    client: Arc<RedisClient>,
}

impl RedisStore {
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let value: Option<String> = conn.get(key).await?;

        Ok(value)
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        match ttl {
            Some(ttl) => {
                let _: () = conn.set_ex(key, value, ttl.as_secs()).await?;
            }
            None => {
                let _: () = conn.set(key, value).await?;
            }
        }

        Ok(())
    }
}

/// 内存缓存存储，用于测试与本地开发
#[derive(Default)]
pub struct MemoryStore {
    // 值与过期时间戳(Unix 秒)
    entries: Mutex<HashMap<String, (String, Option<i64>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = chrono::Utc::now().timestamp();
        let mut entries = self.entries.lock().unwrap();

        let expired = matches!(entries.get(key), Some((_, Some(expires_at))) if *expires_at <= now);
        if expired {
            entries.remove(key);
            return Ok(None);
        }

        Ok(entries.get(key).map(|(value, _)| value.clone()))
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), StoreError> {
        let expires_at = ttl.map(|ttl| chrono::Utc::now().timestamp() + ttl.as_secs() as i64);
        let mut entries = self.entries.lock().unwrap();

        entries.insert(key.to_string(), (value.to_string(), expires_at));

        Ok(())
    }
}

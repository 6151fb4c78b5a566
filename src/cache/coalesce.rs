use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::store::CacheStore;
use crate::error::ProfileError;

/// 在途计算，完成后向全部持有者广播同一份结果
type InFlight = Shared<BoxFuture<'static, Result<String, ProfileError>>>;

/// 带合并的计算缓存
///
/// 同一键的并发计算只执行一次，所有等待者共享同一个在途结果；
/// 成功结果序列化后按给定时长写入底层存储。
pub struct CachedFunction<S> {
    store: Arc<S>,
    in_flight: Mutex<HashMap<String, InFlight>>,
}

impl<S> CachedFunction<S>
where
    S: CacheStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// 返回缓存值，或执行 `producer` 计算并缓存
    ///
    /// 命中未过期缓存时不调用 `producer`。未命中时合并同键并发调用；
    /// 计算失败不写缓存，错误传播给全部等待者，后续调用可重新计算。
    pub async fn get_or_compute<T, F, Fut>(
        &self,
        key: &str,
        producer: F,
        cache_duration: Duration,
    ) -> Result<T, ProfileError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ProfileError>> + Send + 'static,
    {
        if let Some(json) = self.read_fresh(key).await {
            return Ok(serde_json::from_str(&json)?);
        }

        let fut = {
            let mut in_flight = self.in_flight.lock().unwrap();

            match in_flight.get(key) {
                Some(existing) => existing.clone(),
                None => {
                    let store = Arc::clone(&self.store);
                    let cache_key = key.to_string();
                    let producing = producer();

                    let fut: InFlight = async move {
                        let json = serde_json::to_string(&producing.await?)?;

                        if let Err(err) =
                            store.set(&cache_key, &json, Some(cache_duration)).await
                        {
                            tracing::warn!("Failed to cache result for {}: {}", cache_key, err);
                        }

                        Ok(json)
                    }
                    .boxed()
                    .shared();

                    in_flight.insert(key.to_string(), fut.clone());
                    fut
                }
            }
        };

        let result = fut.clone().await;

        // 只移除自己等待的那次计算，避免误删同键的新一轮计算
        {
            let mut in_flight = self.in_flight.lock().unwrap();
            if in_flight.get(key).is_some_and(|entry| entry.ptr_eq(&fut)) {
                in_flight.remove(key);
            }
        }

        Ok(serde_json::from_str(&result?)?)
    }

    /// 读取未过期的缓存原始值，读失败按未命中处理
    async fn read_fresh(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Cache read failed for {}: {}", key, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::store::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::sleep;

    fn cached() -> CachedFunction<MemoryStore> {
        CachedFunction::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_computation() {
        let cached = cached();
        let calls = Arc::new(AtomicUsize::new(0));

        let producer = |calls: Arc<AtomicUsize>| {
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                sleep(std::time::Duration::from_millis(20)).await;
                Ok(7u32)
            }
        };

        let (a, b) = tokio::join!(
            cached.get_or_compute::<u32, _, _>(
                "key",
                producer(Arc::clone(&calls)),
                Duration::from_secs(600),
            ),
            cached.get_or_compute::<u32, _, _>(
                "key",
                producer(Arc::clone(&calls)),
                Duration::from_secs(600),
            ),
        );

        assert_eq!(a.unwrap(), 7);
        assert_eq!(b.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn second_call_is_served_from_cache() {
        let cached = cached();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = Arc::clone(&calls);
            let value: u32 = cached
                .get_or_compute(
                    "key",
                    move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(7u32)
                    },
                    Duration::from_secs(600),
                )
                .await
                .unwrap();
            assert_eq!(value, 7);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_entries_are_recomputed() {
        let cached = cached();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = Arc::clone(&calls);
            cached
                .get_or_compute::<u32, _, _>(
                    "key",
                    move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(7u32)
                    },
                    Duration::from_secs(0),
                )
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached_and_later_calls_retry() {
        let cached = cached();

        let failed: Result<u32, ProfileError> = cached
            .get_or_compute(
                "key",
                || async { Err(ProfileError::Fetch("boom".to_string())) },
                Duration::from_secs(600),
            )
            .await;
        assert!(matches!(failed, Err(ProfileError::Fetch(_))));

        let calls = Arc::new(AtomicUsize::new(0));
        let retried = {
            let calls = Arc::clone(&calls);
            cached
                .get_or_compute::<u32, _, _>(
                    "key",
                    move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(7u32)
                    },
                    Duration::from_secs(600),
                )
                .await
                .unwrap()
        };

        assert_eq!(retried, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

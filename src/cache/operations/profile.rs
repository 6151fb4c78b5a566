use crate::cache::keys::profile_keys;
use crate::cache::models::profile::ProfileList;
use crate::cache::store::CacheStore;
use crate::error::StoreError;

/// 档案列表缓存操作
pub struct ProfileCacheOperations;

impl ProfileCacheOperations {
    /// 将玩家档案列表写入缓存，整体覆盖旧值，不设置过期时间
    pub async fn cache_profile_list<S>(
        store: &S,
        uuid: &str,
        profiles: &ProfileList,
    ) -> Result<(), StoreError>
    where
        S: CacheStore + ?Sized,
    {
        let key = profile_keys::profile_list_key(uuid);
        let json = serde_json::to_string(profiles)?;

        store.set(&key, &json, None).await
    }

    /// 从缓存读取玩家档案列表
    pub async fn get_cached_profile_list<S>(
        store: &S,
        uuid: &str,
    ) -> Result<Option<ProfileList>, StoreError>
    where
        S: CacheStore + ?Sized,
    {
        let key = profile_keys::profile_list_key(uuid);

        match store.get(&key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::models::profile::ProfileSummary;
    use crate::cache::store::MemoryStore;

    #[tokio::test]
    async fn profile_list_round_trips_through_store() {
        let store = MemoryStore::new();
        let uuid = "11111111111111111111111111111111";

        let mut profiles = ProfileList::new();
        profiles.insert(
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string(),
            ProfileSummary {
                cute_name: "Apple".to_string(),
                first_join: Some(1),
                last_save: Some(200),
                collections_unlocked: 3,
                members: vec![
                    uuid.to_string(),
                    "22222222222222222222222222222222".to_string(),
                ],
            },
        );
        profiles.insert(
            "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb".to_string(),
            ProfileSummary {
                cute_name: "Banana".to_string(),
                first_join: None,
                last_save: None,
                collections_unlocked: 0,
                members: vec![uuid.to_string()],
            },
        );

        ProfileCacheOperations::cache_profile_list(&store, uuid, &profiles)
            .await
            .unwrap();

        let reloaded = ProfileCacheOperations::get_cached_profile_list(&store, uuid)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(reloaded, profiles);
    }

    #[tokio::test]
    async fn missing_profile_list_reads_as_none() {
        let store = MemoryStore::new();

        let result = ProfileCacheOperations::get_cached_profile_list(
            &store,
            "11111111111111111111111111111111",
        )
        .await
        .unwrap();

        assert!(result.is_none());
    }
}

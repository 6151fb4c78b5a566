use std::sync::Arc;
use std::time::Duration;

use crate::api::client::DataFetcher;
use crate::api::jobs::ApiJob;
use crate::api::models::profile::{ProfilesResponse, RawProfile};
use crate::cache::coalesce::CachedFunction;
use crate::cache::keys::profile_keys;
use crate::cache::models::profile::{ProfileList, ProfileSummary};
use crate::cache::operations::profile::ProfileCacheOperations;
use crate::cache::store::CacheStore;
use crate::error::ProfileError;
use crate::processor::{self, ProfileData};

/// 单个档案数据的缓存时长(秒)
const PROFILE_CACHE_SECONDS: u64 = 600;

/// 档案ID的固定长度(去掉连字符的UUID)
const PROFILE_ID_LENGTH: usize = 32;

/// SkyBlock 档案服务
///
/// 组合远程抓取、档案列表缓存与结果缓存，
/// 负责解析玩家的目标档案并返回处理后的数据。
pub struct ProfileStore<S, F> {
    store: Arc<S>,
    fetcher: Arc<F>,
    cached: CachedFunction<S>,
}

impl<S, F> ProfileStore<S, F>
where
    S: CacheStore + 'static,
    F: DataFetcher + 'static,
{
    pub fn new(store: Arc<S>, fetcher: Arc<F>) -> Self {
        Self {
            cached: CachedFunction::new(Arc::clone(&store)),
            store,
            fetcher,
        }
    }

    /// 创建或刷新玩家的档案列表
    ///
    /// 列表持久化为后台任务，失败只记录日志，不影响返回值。
    /// 抓取失败时返回 None，调用方应视为列表不可用。
    pub async fn build_profile_list(&self, uuid: &str) -> Option<ProfileList> {
        let job = ApiJob::SkyBlockProfiles {
            uuid: uuid.to_string(),
        };
        let body = match self.fetcher.fetch(&job).await {
            Ok(body) => body,
            Err(err) => {
                tracing::error!("Failed getting skyblock profiles: {}", err);
                return None;
            }
        };

        let response: ProfilesResponse = match serde_json::from_value(body) {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Malformed skyblock profiles payload: {}", err);
                return None;
            }
        };

        let mut new_profiles = ProfileList::new();
        for profile in response.profiles.unwrap_or_default() {
            let summary = summarize(uuid, &profile);
            new_profiles.insert(profile.profile_id, summary);
        }

        self.update_profile_list(uuid, &new_profiles);

        Some(new_profiles)
    }

    /// 解析并返回玩家的目标档案数据
    ///
    /// `id` 为空时取最近保存的档案；长度不足32时按显示名称匹配(忽略大小写)；
    /// 否则按档案ID原样使用。结果经结果缓存返回，同键并发调用共享一次抓取。
    pub async fn build_profile(
        &self,
        uuid: &str,
        id: Option<&str>,
    ) -> Result<ProfileData, ProfileError> {
        let profiles = match ProfileCacheOperations::get_cached_profile_list(
            self.store.as_ref(),
            uuid,
        )
        .await
        {
            Ok(Some(profiles)) => Some(profiles),
            Ok(None) => self.build_profile_list(uuid).await,
            Err(err) => {
                tracing::warn!("Failed reading cached profile list for {}: {}", uuid, err);
                self.build_profile_list(uuid).await
            }
        };
        // 列表不可用时按空列表处理，长ID路径仍可继续
        let profiles = profiles.unwrap_or_default();

        let profile_id = match id {
            None => latest_profile_id(&profiles),
            Some(id) if id.len() < PROFILE_ID_LENGTH => profiles
                .iter()
                .find(|(_, summary)| summary.cute_name.eq_ignore_ascii_case(id))
                .map(|(profile_id, _)| profile_id.clone()),
            Some(id) => Some(id.to_string()),
        };

        let profile_id = match profile_id {
            Some(profile_id) if profile_id.len() == PROFILE_ID_LENGTH => profile_id,
            _ => return Err(ProfileError::NotFound),
        };

        let key = profile_keys::profile_data_key(&profile_id);
        let fetcher = Arc::clone(&self.fetcher);

        self.cached
            .get_or_compute(
                &key,
                move || get_profile_data(fetcher, profile_id),
                Duration::from_secs(PROFILE_CACHE_SECONDS),
            )
            .await
    }

    /// 将档案列表写入缓存，后台执行，不阻塞返回路径
    fn update_profile_list(&self, uuid: &str, profiles: &ProfileList) {
        let store = Arc::clone(&self.store);
        let uuid = uuid.to_string();
        let profiles = profiles.clone();

        tokio::spawn(async move {
            if let Err(err) =
                ProfileCacheOperations::cache_profile_list(store.as_ref(), &uuid, &profiles).await
            {
                tracing::error!("Failed to update profile list: {}", err);
            }
        });
    }
}

/// 抓取并处理单个档案的完整数据
async fn get_profile_data<F>(fetcher: Arc<F>, profile_id: String) -> Result<ProfileData, ProfileError>
where
    F: DataFetcher,
{
    let body = fetcher.fetch(&ApiJob::SkyBlockProfile { profile_id }).await?;

    // profile 字段缺失或为 null 时按空档案处理
    let raw = match body.get("profile") {
        Some(profile) if !profile.is_null() => profile.clone(),
        _ => serde_json::Value::Object(serde_json::Map::new()),
    };

    Ok(processor::process_profile(&raw))
}

/// 从原始档案提取摘要
///
/// 摘要字段来自 `uuid` 对应的成员记录，成员缺席时取默认值。
fn summarize(uuid: &str, profile: &RawProfile) -> ProfileSummary {
    let member = profile.members.get(uuid).cloned().unwrap_or_default();

    ProfileSummary {
        cute_name: profile.cute_name.clone(),
        first_join: member.first_join,
        last_save: member.last_save,
        collections_unlocked: member.collections_unlocked,
        members: profile.members.keys().cloned().collect(),
    }
}

/// 取最近保存的档案ID
///
/// last_save 缺失按最小值处理；相同时取字典序较小的档案ID。
fn latest_profile_id(profiles: &ProfileList) -> Option<String> {
    profiles
        .iter()
        .max_by(|(id_a, a), (id_b, b)| {
            let save_a = a.last_save.unwrap_or(i64::MIN);
            let save_b = b.last_save.unwrap_or(i64::MIN);
            save_a.cmp(&save_b).then_with(|| id_b.cmp(id_a))
        })
        .map(|(profile_id, _)| profile_id.clone())
}

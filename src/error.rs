use thiserror::Error;

/// 缓存存储层错误
///
/// 错误源统一转为字符串，保证错误值可克隆，
/// 以便通过共享的在途计算广播给全部等待者。
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// 存储后端连接或命令失败
    #[error("store backend error: {0}")]
    Backend(String),
    /// 缓存值序列化/反序列化失败
    #[error("store serialization error: {0}")]
    Serialize(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        StoreError::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err.to_string())
    }
}

/// 档案构建流程错误
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    /// 无法解析出目标档案
    #[error("Profile not found!")]
    NotFound,
    /// 远程 API 请求失败
    #[error("remote fetch failed: {0}")]
    Fetch(String),
    /// 远程 API 返回业务错误
    #[error("remote api error: {0}")]
    Remote(String),
    /// 缓存存储错误
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<reqwest::Error> for ProfileError {
    fn from(err: reqwest::Error) -> Self {
        ProfileError::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::Store(StoreError::from(err))
    }
}

// 缓存模块
// 包含缓存存储抽象、键生成、数据结构和操作逻辑

pub mod coalesce;
pub mod keys;
pub mod models;
pub mod operations;
pub mod store;

// 重新导出常用类型和函数，方便其他模块使用
pub use coalesce::CachedFunction;
pub use models::profile::{ProfileList, ProfileSummary};
pub use operations::profile::ProfileCacheOperations;
pub use store::{CacheStore, MemoryStore, RedisStore};

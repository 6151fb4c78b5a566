pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod processor;
pub mod profiles;
pub mod utils;

pub use api::{ApiClient, ApiJob, DataFetcher};
pub use cache::{CacheStore, CachedFunction, MemoryStore, ProfileList, ProfileSummary, RedisStore};
pub use error::{ProfileError, StoreError};
pub use processor::{MemberData, ProfileData};
pub use profiles::ProfileStore;

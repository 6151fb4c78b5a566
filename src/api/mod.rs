// 远程 API 模块
// 包含请求描述、客户端和原始载荷模型

pub mod client;
pub mod jobs;
pub mod models;

// 重新导出常用类型
pub use client::{ApiClient, DataFetcher};
pub use jobs::ApiJob;
pub use models::profile::{ProfilesResponse, RawMember, RawProfile};

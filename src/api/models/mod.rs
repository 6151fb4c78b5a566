/// 远程 API 数据模型
/// 定义原始响应载荷的结构体

// 档案载荷模型
pub mod profile;

// 重新导出常用类型
pub use profile::{ProfilesResponse, RawMember, RawProfile};

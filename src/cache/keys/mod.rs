/// 缓存键模块
/// 提供各种缓存键生成函数

// 档案缓存键模块
pub mod profile_keys;

// 重新导出常用的键生成函数
pub use profile_keys::{profile_data_key, profile_list_key};

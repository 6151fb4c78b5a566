use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 单个 SkyBlock 档案的摘要信息
///
/// 由档案列表重建时派生，非权威数据，整表覆盖写入。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileSummary {
    /// 档案的显示名称
    pub cute_name: String,
    /// 该玩家首次加入时间
    pub first_join: Option<i64>, // Unix timestamp
    /// 该玩家最近一次保存时间
    pub last_save: Option<i64>, // Unix timestamp
    /// 已解锁的收集项数量
    #[serde(default)]
    pub collections_unlocked: u32,
    /// 档案全部成员的玩家ID
    pub members: Vec<String>,
}

/// 玩家全部档案的摘要映射，键为档案ID
pub type ProfileList = HashMap<String, ProfileSummary>;

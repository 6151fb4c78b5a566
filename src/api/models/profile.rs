use std::collections::HashMap;

use serde::Deserialize;

/// 档案列表接口的响应体
#[derive(Debug, Deserialize)]
pub struct ProfilesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub profiles: Option<Vec<RawProfile>>,
}

/// 档案列表中的单个原始档案
#[derive(Debug, Deserialize)]
pub struct RawProfile {
    pub profile_id: String,
    #[serde(default)]
    pub cute_name: String,
    #[serde(default)]
    pub members: HashMap<String, RawMember>,
}

/// 档案内单个成员的原始记录，字段缺失时取默认值
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMember {
    #[serde(default)]
    pub first_join: Option<i64>,
    #[serde(default)]
    pub last_save: Option<i64>,
    #[serde(default)]
    pub collections_unlocked: u32,
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 处理后的 SkyBlock 档案数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub profile_id: String,
    pub cute_name: Option<String>,
    /// 银行余额，档案未开通银行时为 0
    pub banking_balance: f64,
    pub members: HashMap<String, MemberData>,
}

/// 档案内单个成员的处理后数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberData {
    pub first_join: Option<i64>, // Unix timestamp
    pub last_save: Option<i64>,  // Unix timestamp
    pub coin_purse: f64,
    pub fairy_souls_collected: u32,
}

/// 将原始档案载荷归一化为档案数据
///
/// 纯转换，缺失字段一律取默认值，不会失败。
pub fn process_profile(raw: &Value) -> ProfileData {
    let members = raw["members"]
        .as_object()
        .map(|members| {
            members
                .iter()
                .map(|(uuid, member)| (uuid.clone(), process_member(member)))
                .collect()
        })
        .unwrap_or_default();

    ProfileData {
        profile_id: raw["profile_id"].as_str().unwrap_or_default().to_string(),
        cute_name: raw["cute_name"].as_str().map(str::to_string),
        banking_balance: raw["banking"]["balance"].as_f64().unwrap_or(0.0),
        members,
    }
}

fn process_member(member: &Value) -> MemberData {
    MemberData {
        first_join: member["first_join"].as_i64(),
        last_save: member["last_save"].as_i64(),
        coin_purse: member["coin_purse"].as_f64().unwrap_or(0.0),
        fairy_souls_collected: member["fairy_souls_collected"].as_u64().unwrap_or(0) as u32,
    }
}

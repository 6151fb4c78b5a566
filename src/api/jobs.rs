/// 远程 API 请求描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiJob {
    /// 玩家全部 SkyBlock 档案
    SkyBlockProfiles { uuid: String },
    /// 单个 SkyBlock 档案
    SkyBlockProfile { profile_id: String },
}

impl ApiJob {
    /// 生成请求 URL，密钥由客户端另行附加
    pub fn url(&self, base_url: &str) -> String {
        match self {
            ApiJob::SkyBlockProfiles { uuid } => {
                format!("{}/skyblock/profiles?uuid={}", base_url, uuid)
            }
            ApiJob::SkyBlockProfile { profile_id } => {
                format!("{}/skyblock/profile?profile={}", base_url, profile_id)
            }
        }
    }
}

/// 档案列表缓存键前缀
const PROFILE_LIST_PREFIX: &str = "skyblock_profiles:";

/// 单个档案数据缓存键前缀
const PROFILE_DATA_PREFIX: &str = "skyblock_profile:";

/// 生成玩家档案列表缓存键
pub fn profile_list_key(uuid: &str) -> String {
    format!("{}{}", PROFILE_LIST_PREFIX, uuid)
}

/// 生成单个档案数据缓存键
pub fn profile_data_key(profile_id: &str) -> String {
    format!("{}{}", PROFILE_DATA_PREFIX, profile_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_formats_are_stable() {
        assert_eq!(
            profile_list_key("a1b2c3d4a1b2c3d4a1b2c3d4a1b2c3d4"),
            "skyblock_profiles:a1b2c3d4a1b2c3d4a1b2c3d4a1b2c3d4"
        );
        assert_eq!(
            profile_data_key("ffffffffffffffffffffffffffffffff"),
            "skyblock_profile:ffffffffffffffffffffffffffffffff"
        );
    }
}

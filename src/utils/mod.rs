use uuid::Uuid;

/// 判断字符串是否为合法的档案/玩家ID(32位十六进制)
pub fn is_profile_id(value: &str) -> bool {
    value.len() == 32 && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// 将用户输入的UUID归一化为32位无连字符小写形式
pub fn normalize_player_id(value: &str) -> Option<String> {
    let parsed = Uuid::parse_str(value.trim()).ok()?;
    Some(parsed.as_simple().to_string())
}

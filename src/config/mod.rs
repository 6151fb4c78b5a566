use std::env;

/// 服务配置
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub redis_url: String,
    pub api_base_url: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            redis_url: env::var("REDIS_URL")?,
            api_base_url: env::var("API_URL")
                .unwrap_or_else(|_| "https://api.hypixel.net".to_string()),
            api_key: env::var("API_KEY").ok(),
        })
    }
}

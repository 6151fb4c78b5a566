use async_trait::async_trait;
use serde_json::Value;

use crate::api::jobs::ApiJob;
use crate::config::Config;
use crate::error::ProfileError;

/// 远程数据抓取能力
///
/// 测试中可替换为返回预置载荷的实现。
#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// 执行一次请求，返回解析后的 JSON 响应体
    async fn fetch(&self, job: &ApiJob) -> Result<Value, ProfileError>;
}

/// 远程 API 客户端
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl DataFetcher for ApiClient {
    async fn fetch(&self, job: &ApiJob) -> Result<Value, ProfileError> {
        let url = job.url(&self.base_url);
        tracing::debug!("Fetching {}", url);

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("API-Key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        // 远程业务错误通过 success/cause 字段上报
        if !status.is_success() || body["success"] == Value::Bool(false) {
            let cause = body["cause"].as_str().unwrap_or("unknown");
            return Err(ProfileError::Remote(format!("{}: {}", status, cause)));
        }

        Ok(body)
    }
}

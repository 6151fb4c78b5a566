use std::sync::Arc;

use skyblock_profiles::config::Config;
use skyblock_profiles::{ApiClient, ProfileStore, RedisStore, utils};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    // 命令行参数: <玩家UUID> [档案ID或名称]
    let mut args = std::env::args().skip(1);
    let player = args
        .next()
        .expect("Usage: skyblock-profiles <player-uuid> [profile]");
    let selector = args.next();

    let uuid = utils::normalize_player_id(&player).expect("Invalid player uuid");

    // 设置 Redis 客户端
    let redis_client =
        redis::Client::open(config.redis_url.clone()).expect("Failed to create Redis client");
    let store = Arc::new(RedisStore::new(Arc::new(redis_client)));
    let fetcher = Arc::new(ApiClient::new(&config));
    let profiles = ProfileStore::new(store, fetcher);

    match profiles.build_profile(&uuid, selector.as_deref()).await {
        Ok(profile) => {
            let json =
                serde_json::to_string_pretty(&profile).expect("Failed to serialize profile");
            println!("{}", json);
        }
        Err(err) => {
            tracing::error!("Failed building profile: {}", err);
            std::process::exit(1);
        }
    }
}

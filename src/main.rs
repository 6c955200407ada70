use anyhow::Result;
use kijiban::app::run_server;
use kijiban::infra::setup_database;
use kijiban::types::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();

    // ロギング初期化（RUST_LOG未設定なら既定のフィルタを使用）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kijiban=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = setup_database(&config).await?;
    tracing::info!("データベースの初期化が完了しました");

    run_server(&config, pool).await
}

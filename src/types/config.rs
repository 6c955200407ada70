use std::env;
use thiserror::Error;

/// 設定関連のエラー型
/// 環境変数の不足や設定値の検証失敗を定義
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 環境変数が見つからない
    #[error("環境変数が見つかりません: {name}")]
    MissingEnvironmentVariable { name: String },

    /// 設定値が不正
    #[error("設定値が不正です: {reason}")]
    InvalidValue { reason: String },
}

impl ConfigError {
    /// 環境変数不足エラーを作成
    pub fn missing_env_var<N: Into<String>>(name: N) -> Self {
        Self::MissingEnvironmentVariable { name: name.into() }
    }

    /// 不正な設定値エラーを作成
    pub fn invalid_value<R: Into<String>>(reason: R) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

/// 設定エラーのResult型エイリアス
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// アプリケーション設定
/// .envファイルまたは環境変数から読み込む
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL接続文字列
    pub database_url: String,
    /// HTTPサーバーの待ち受けアドレス
    pub bind_addr: String,
    /// CORSで許可するフロントエンドのオリジン
    pub frontend_origin: String,
}

impl AppConfig {
    /// 環境変数から設定を組み立てる
    /// DATABASE_URLのみ必須、それ以外は開発用のデフォルト値を持つ
    pub fn from_env() -> ConfigResult<Self> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::missing_env_var("DATABASE_URL"))?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let frontend_origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:5180".to_string());

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origin,
        })
    }
}

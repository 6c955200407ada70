use crate::types::ConfigError;
use thiserror::Error;

/// インフラストラクチャ層のエラー型
/// データベース接続・マイグレーションなど基盤的なエラーを定義
#[derive(Error, Debug)]
pub enum InfraError {
    /// データベース接続エラー
    #[error("データベース接続エラー: {source}")]
    DatabaseConnection {
        #[source]
        source: sqlx::Error,
    },

    /// データベースクエリエラー
    #[error("データベースクエリエラー: {operation} - {source}")]
    DatabaseQuery {
        operation: String,
        #[source]
        source: sqlx::Error,
    },

    /// 設定エラー
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl InfraError {
    /// データベース接続エラーを作成
    pub fn database_connection(source: sqlx::Error) -> Self {
        Self::DatabaseConnection { source }
    }

    /// データベースクエリエラーを作成
    pub fn database_query<O: Into<String>>(operation: O, source: sqlx::Error) -> Self {
        Self::DatabaseQuery {
            operation: operation.into(),
            source,
        }
    }
}

/// インフラエラーのResult型エイリアス
pub type InfraResult<T> = std::result::Result<T, InfraError>;

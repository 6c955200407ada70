use thiserror::Error;

/// サービス層のエラー型
/// 呼び出し元（HTTP層）がステータスコードへ変換するための分類のみを定義する
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 対象の記事が存在しない
    #[error("記事が見つかりません: id={id}")]
    ArticleNotFound { id: i64 },

    /// データベースなど下位層の失敗
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// 記事未発見エラーを作成
    pub fn article_not_found(id: i64) -> Self {
        Self::ArticleNotFound { id }
    }

    /// 未発見エラーかどうかを判定
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ArticleNotFound { .. })
    }
}

/// サービス層エラーのResult型エイリアス
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

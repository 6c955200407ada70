use super::model::{Article, ArticleDraft};
use super::repository;
use crate::types::{ServiceError, ServiceResult};
use sqlx::PgPool;

/// 全記事を新しい順で取得する
pub async fn get_all_articles(pool: &PgPool) -> ServiceResult<Vec<Article>> {
    Ok(repository::fetch_all_articles(pool).await?)
}

/// idで記事を1件取得する
/// 見つからない場合はNoneを返し、HTTP層が404へ対応付ける
pub async fn get_article_by_id(id: i64, pool: &PgPool) -> ServiceResult<Option<Article>> {
    Ok(repository::find_article_by_id(id, pool).await?)
}

/// 新しい記事を保存する
/// idとcreated_atは入力に関わらずストア側で採番される
pub async fn create_article(draft: &ArticleDraft, pool: &PgPool) -> ServiceResult<Article> {
    Ok(repository::insert_article(draft, pool).await?)
}

/// 既存記事のtitleとdescriptionを更新する
/// 対象が存在しなければArticleNotFoundを返す
pub async fn update_article(
    id: i64,
    draft: &ArticleDraft,
    pool: &PgPool,
) -> ServiceResult<Article> {
    repository::update_article_fields(id, draft, pool)
        .await?
        .ok_or_else(|| ServiceError::article_not_found(id))
}

/// idの記事を削除する
/// 対象が存在しなければArticleNotFoundを返す
pub async fn delete_article(id: i64, pool: &PgPool) -> ServiceResult<()> {
    let deleted = repository::delete_article_by_id(id, pool).await?;
    if deleted {
        Ok(())
    } else {
        Err(ServiceError::article_not_found(id))
    }
}

/// キーワードで記事を検索する
/// 空文字のキーワードは全記事を返す（空文字への部分一致は常に真のため）
pub async fn search_articles(keyword: &str, pool: &PgPool) -> ServiceResult<Vec<Article>> {
    Ok(repository::search_articles_by_keyword(keyword, pool).await?)
}

use super::model::{Article, ArticleDraft};
use anyhow::{Context, Result};
use sqlx::PgPool;

/// 全記事を作成日時の新しい順で取得する
/// 同時刻の場合はidの降順で順序を固定する
pub async fn fetch_all_articles(pool: &PgPool) -> Result<Vec<Article>> {
    let articles = sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, description, created_at
        FROM articles
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .context("記事一覧の取得に失敗")?;

    Ok(articles)
}

/// idで記事を1件取得する（存在しなければNone）
pub async fn find_article_by_id(id: i64, pool: &PgPool) -> Result<Option<Article>> {
    let article = sqlx::query_as::<_, Article>(
        "SELECT id, title, description, created_at FROM articles WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("記事のID検索に失敗")?;

    Ok(article)
}

/// 新しい記事を挿入する
/// idとcreated_atはDB側で採番され、挿入された行をそのまま返す
pub async fn insert_article(draft: &ArticleDraft, pool: &PgPool) -> Result<Article> {
    let article = sqlx::query_as::<_, Article>(
        r#"
        INSERT INTO articles (title, description)
        VALUES ($1, $2)
        RETURNING id, title, description, created_at
        "#,
    )
    .bind(&draft.title)
    .bind(&draft.description)
    .fetch_one(pool)
    .await
    .context("記事の挿入に失敗")?;

    Ok(article)
}

/// 既存記事のtitleとdescriptionだけを書き換える
/// idとcreated_atは変更しない。対象行がなければNoneを返す
pub async fn update_article_fields(
    id: i64,
    draft: &ArticleDraft,
    pool: &PgPool,
) -> Result<Option<Article>> {
    let article = sqlx::query_as::<_, Article>(
        r#"
        UPDATE articles
        SET title = $2, description = $3
        WHERE id = $1
        RETURNING id, title, description, created_at
        "#,
    )
    .bind(id)
    .bind(&draft.title)
    .bind(&draft.description)
    .fetch_optional(pool)
    .await
    .context("記事の更新に失敗")?;

    Ok(article)
}

/// idの記事を削除する。行が削除されたらtrueを返す
pub async fn delete_article_by_id(id: i64, pool: &PgPool) -> Result<bool> {
    let result = sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .context("記事の削除に失敗")?;

    Ok(result.rows_affected() > 0)
}

/// titleまたはdescriptionにキーワードを含む記事を検索する
/// 大文字小文字を区別しない部分一致。空文字はすべての行に一致する
pub async fn search_articles_by_keyword(keyword: &str, pool: &PgPool) -> Result<Vec<Article>> {
    let pattern = format!("%{}%", keyword);
    let articles = sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, description, created_at
        FROM articles
        WHERE title ILIKE $1 OR description ILIKE $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await
    .context("記事のキーワード検索に失敗")?;

    Ok(articles)
}

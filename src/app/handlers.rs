use super::server::AppState;
use crate::domain::article::{self, Article, ArticleDraft};
use crate::types::ServiceError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

// ServiceErrorをHTTPステータスコードへ対応付ける
// 変換を行うのはHTTP層のこの一箇所だけ
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::ArticleNotFound { .. } => StatusCode::NOT_FOUND.into_response(),
            ServiceError::Internal(error) => {
                tracing::error!(error = ?error, "内部エラーが発生しました");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// 検索クエリパラメータ
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: String,
}

/// GET /api/hello
/// 稼働確認用の固定メッセージを返す
pub async fn hello() -> &'static str {
    "Hello from Kijiban!"
}

/// GET /api/articles
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, ServiceError> {
    let articles = article::get_all_articles(&state.pool).await?;
    Ok(Json(articles))
}

/// GET /api/articles/{id}
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ServiceError> {
    match article::get_article_by_id(id, &state.pool).await? {
        Some(found) => Ok(Json(found).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// POST /api/articles
pub async fn create_article(
    State(state): State<AppState>,
    Json(draft): Json<ArticleDraft>,
) -> Result<Json<Article>, ServiceError> {
    let created = article::create_article(&draft, &state.pool).await?;
    Ok(Json(created))
}

/// PUT /api/articles/{id}
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<ArticleDraft>,
) -> Result<Json<Article>, ServiceError> {
    let updated = article::update_article(id, &draft, &state.pool).await?;
    Ok(Json(updated))
}

/// DELETE /api/articles/{id}
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    article::delete_article(id, &state.pool).await?;
    Ok(StatusCode::OK)
}

/// GET /api/articles/search?keyword=
pub async fn search_articles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Article>>, ServiceError> {
    let articles = article::search_articles(&params.keyword, &state.pool).await?;
    Ok(Json(articles))
}

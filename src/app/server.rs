use super::handlers;
use crate::types::{AppConfig, ConfigError};
use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// ハンドラへ注入されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// 全ルートとミドルウェアを組み立てたルーターを構築する
///
/// CORSは設定された1つのオリジンのみを許可する。
/// それ以外のオリジンからのリクエストはCorsLayerが拒否する。
pub fn build_router(config: &AppConfig, pool: PgPool) -> Result<Router, ConfigError> {
    let origin = config.frontend_origin.parse::<HeaderValue>().map_err(|_| {
        ConfigError::invalid_value(format!(
            "FRONTEND_ORIGINを解釈できません: {}",
            config.frontend_origin
        ))
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    let state = AppState { pool };

    let router = Router::new()
        .route("/api/hello", get(handlers::hello))
        .route(
            "/api/articles",
            get(handlers::list_articles).post(handlers::create_article),
        )
        .route("/api/articles/search", get(handlers::search_articles))
        .route(
            "/api/articles/{id}",
            get(handlers::get_article)
                .put(handlers::update_article)
                .delete(handlers::delete_article),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

/// サーバーを起動して接続を受け付ける
pub async fn run_server(config: &AppConfig, pool: PgPool) -> Result<()> {
    let router = build_router(config, pool)?;

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("アドレスのバインドに失敗: {}", config.bind_addr))?;
    tracing::info!(address = %config.bind_addr, "HTTPサーバーを起動します");

    axum::serve(listener, router)
        .await
        .context("HTTPサーバーの実行に失敗")?;

    Ok(())
}

//! kijiban — 記事管理のCRUDバックエンド
//!
//! HTTPリクエストをサービス層・リポジトリ層を経由してPostgreSQLへ
//! 橋渡しする薄いオーケストレーション層です。

pub mod app;
pub mod domain;
pub mod infra;
pub mod types;

//! インフラストラクチャ層
//!
//! データベース接続など、ドメインから切り離した基盤機能を提供します。

pub mod db;

pub use db::{create_pool, initialize_database, setup_database};

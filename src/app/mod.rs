//! HTTP層
//!
//! ルーティング・ハンドラ・CORSなど、HTTPに関する機能を提供します。
//! サービス層の結果をステータスコードへ対応付けるのはこの層だけです。

pub mod handlers;
pub mod server;

pub use server::{build_router, run_server, AppState};

//! Ping Handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// 合成引擎是否可达
    pub engine_ok: bool,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine_ok: state.engine.health_check().await,
    })
}

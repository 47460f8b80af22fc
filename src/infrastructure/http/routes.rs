//! HTTP Routes
//!
//! API Endpoints:
//! - /ping               GET   健康检查
//! - /voice_clone        POST  上传音色样本（multipart）
//! - /generate_script    POST  生成口播文案
//! - /speak              POST  用已登记音色合成语音（二进制 WAV）
//! - /complete_workflow  POST  文案生成 + 合成（JSON+base64 或 WAV 附件）
//! - /download_audio     POST  合成并以附件下载

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/voice_clone", post(handlers::voice_clone))
        .route("/generate_script", post(handlers::generate_script))
        .route("/speak", post(handlers::speak))
        .route("/complete_workflow", post(handlers::complete_workflow))
        .route("/download_audio", post(handlers::download_audio))
}

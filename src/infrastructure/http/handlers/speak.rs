//! Speak HTTP Handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};

use crate::application::Speak;
use crate::domain::synthesis::{AudioArtifact, SynthesisParams};
use crate::infrastructure::http::dto::{attachment_filename, DownloadAudioRequest, SpeakRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 构造二进制音频响应；filename 为 Some 时带附件 disposition 头
pub(super) fn audio_response(
    artifact: AudioArtifact,
    filename: Option<String>,
) -> Result<Response, ApiError> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, AudioArtifact::MIME)
        .header(header::CONTENT_LENGTH, artifact.len());

    if let Some(name) = filename {
        builder = builder.header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", name),
        );
    }

    builder
        .body(Body::from(artifact.into_data()))
        .map_err(|e| ApiError::Internal(format!("Failed to build audio response: {}", e)))
}

/// 用已登记的音色合成语音
pub async fn speak(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeakRequest>,
) -> Result<Response, ApiError> {
    // 缺失/空串与「有值但全空白」是两类错误：
    // 前者在这里拒绝，后者交给应用层按字段报错
    let (voice_id, text) = match (req.voice_id, req.text) {
        (Some(v), Some(t)) if !v.is_empty() && !t.is_empty() => (v, t),
        _ => return Err(ApiError::bad_request("Voice ID and text are required.")),
    };

    tracing::debug!(voice_id = %voice_id, language = %req.language, "Speak requested");

    let artifact = state
        .speak_handler
        .handle(Speak {
            voice_id,
            text,
            params: SynthesisParams::normalize(
                req.exaggeration,
                req.cfg_weight,
                req.temperature,
                req.seed_num,
            ),
        })
        .await?;

    let filename = req.download.then(|| {
        attachment_filename("cloned_voice_audio", None, AudioArtifact::EXTENSION)
    });
    audio_response(artifact, filename)
}

/// 合成并以附件形式下载
pub async fn download_audio(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DownloadAudioRequest>,
) -> Result<Response, ApiError> {
    let (voice_id, text) = match (req.voice_id, req.text) {
        (Some(v), Some(t)) if !v.is_empty() && !t.is_empty() => (v, t),
        _ => return Err(ApiError::bad_request("Voice ID and text are required.")),
    };

    let artifact = state
        .speak_handler
        .handle(Speak {
            voice_id,
            text,
            params: SynthesisParams::normalize(
                req.exaggeration,
                req.cfg_weight,
                req.temperature,
                req.seed_num,
            ),
        })
        .await?;

    let filename = attachment_filename(
        "cloned_voice",
        Some(&req.language),
        AudioArtifact::EXTENSION,
    );
    audio_response(artifact, Some(filename))
}

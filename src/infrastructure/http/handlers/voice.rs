//! Voice HTTP Handlers

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::infrastructure::http::dto::{FileInfo, VoiceCloneResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 上传音色样本
///
/// multipart 的 `audio_file` 字段承载音频字节；
/// 字节原样入库，解码推迟到合成时刻
pub async fn voice_clone(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<VoiceCloneResponse>, ApiError> {
    let mut audio_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() == Some("audio_file") {
            filename = field.file_name().map(|s| s.to_string());
            audio_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read file: {}", e)))?
                    .to_vec(),
            );
        }
    }

    let audio_data =
        audio_data.ok_or_else(|| ApiError::bad_request("No audio file provided."))?;

    let size = audio_data.len();
    let voice_id = state
        .registry
        .store(audio_data, filename.clone())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    tracing::info!(
        voice_id = %voice_id,
        filename = filename.as_deref().unwrap_or("unknown"),
        size = size,
        "Voice sample uploaded"
    );

    Ok(Json(VoiceCloneResponse {
        voice_id,
        message: "Voice sample uploaded successfully. Ready for synthesis.".to_string(),
        file_info: FileInfo {
            filename: filename.unwrap_or_else(|| "unknown".to_string()),
            size,
        },
    }))
}

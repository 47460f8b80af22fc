//! Workflow HTTP Handlers

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::application::CompleteWorkflow;
use crate::domain::synthesis::{AudioArtifact, SynthesisParams};
use crate::infrastructure::http::dto::{
    attachment_filename, CompleteWorkflowRequest, CompleteWorkflowResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

use super::speak::audio_response;

/// 组合工作流：生成文案并立即用指定音色合成
///
/// download=true 返回 WAV 附件；否则返回含 base64 音频的 JSON
pub async fn complete_workflow(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CompleteWorkflowRequest>,
) -> Result<Response, ApiError> {
    let (voice_id, prompt) = match (req.voice_id, req.prompt) {
        (Some(v), Some(p)) if !v.trim().is_empty() => (v, p),
        _ => {
            return Err(ApiError::bad_request(
                "Voice ID and script prompt are required.",
            ))
        }
    };

    let result = state
        .complete_workflow_handler
        .handle(CompleteWorkflow {
            voice_id,
            prompt,
            language: req.language,
            params: SynthesisParams::normalize(
                req.exaggeration,
                req.cfg_weight,
                req.temperature,
                req.seed_num,
            ),
        })
        .await?;

    if req.download {
        let filename = attachment_filename(
            "complete_workflow",
            Some(&result.language),
            AudioArtifact::EXTENSION,
        );
        return audio_response(result.audio, Some(filename));
    }

    let response = CompleteWorkflowResponse {
        word_count: result.script.word_count(),
        character_count: result.script.character_count(),
        audio_base64: STANDARD.encode(result.audio.data()),
        script: result.script.into_text(),
        language: result.language,
        prompt: result.prompt,
        audio_generated: true,
    };

    Ok(Json(response).into_response())
}

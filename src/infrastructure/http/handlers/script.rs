//! Script HTTP Handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::GenerateScript;
use crate::infrastructure::http::dto::{GenerateScriptRequest, GenerateScriptResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 根据主题 prompt 生成口播文案
pub async fn generate_script(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateScriptRequest>,
) -> Result<Json<GenerateScriptResponse>, ApiError> {
    let prompt = req
        .prompt
        .ok_or_else(|| ApiError::bad_request("Script prompt is required."))?;

    let result = state
        .generate_script_handler
        .handle(GenerateScript {
            prompt,
            language: req.language,
        })
        .await?;

    Ok(Json(GenerateScriptResponse {
        word_count: result.script.word_count(),
        character_count: result.script.character_count(),
        script: result.script.into_text(),
        language: result.language,
        prompt: result.prompt,
    }))
}

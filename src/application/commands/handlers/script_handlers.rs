//! Script Command Handlers

use std::sync::Arc;

use crate::application::commands::GenerateScript;
use crate::application::error::ApplicationError;
use crate::application::ports::{CompletionRequest, ScriptModelPort};
use crate::domain::script::{build_messages, clean_model_output, GeneratedScript};

/// 脚本生成采样温度（文档化默认值）
pub const SCRIPT_TEMPERATURE: f32 = 0.7;
/// 脚本响应长度上限
pub const SCRIPT_MAX_TOKENS: u32 = 600;

/// 脚本生成响应
#[derive(Debug, Clone)]
pub struct GenerateScriptResponse {
    pub script: GeneratedScript,
    pub language: String,
    pub prompt: String,
}

/// GenerateScript Handler
pub struct GenerateScriptHandler {
    script_model: Arc<dyn ScriptModelPort>,
}

impl GenerateScriptHandler {
    pub fn new(script_model: Arc<dyn ScriptModelPort>) -> Self {
        Self { script_model }
    }

    /// 校验 → 构造指令 → 调用上游 → 清洗输出
    ///
    /// 空 prompt 在触达上游之前就被拒绝
    pub async fn handle(
        &self,
        command: GenerateScript,
    ) -> Result<GenerateScriptResponse, ApplicationError> {
        let prompt = command.prompt.trim();
        if prompt.is_empty() {
            return Err(ApplicationError::validation(
                "prompt",
                "Script prompt cannot be empty.",
            ));
        }

        let messages = build_messages(prompt, &command.language);
        let raw = self
            .script_model
            .complete(CompletionRequest {
                system: messages.system,
                user: messages.user,
                max_tokens: SCRIPT_MAX_TOKENS,
                temperature: SCRIPT_TEMPERATURE,
            })
            .await?;

        let cleaned = clean_model_output(&raw);
        if cleaned.is_empty() {
            return Err(ApplicationError::ScriptGeneration(
                "model returned empty script".to_string(),
            ));
        }

        let script = GeneratedScript::new(cleaned);

        tracing::info!(
            language = %command.language,
            word_count = script.word_count(),
            character_count = script.character_count(),
            "Script generated"
        );

        Ok(GenerateScriptResponse {
            script,
            language: command.language,
            prompt: prompt.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::llm::FakeScriptModel;

    fn handler_with(model: Arc<FakeScriptModel>) -> GenerateScriptHandler {
        GenerateScriptHandler::new(model)
    }

    #[tokio::test]
    async fn test_empty_prompt_never_reaches_model() {
        let model = Arc::new(FakeScriptModel::new("should not be used"));
        let handler = handler_with(model.clone());

        for prompt in ["", "   ", "\n\t "] {
            let result = handler
                .handle(GenerateScript {
                    prompt: prompt.to_string(),
                    language: "English".to_string(),
                })
                .await;
            assert!(matches!(
                result,
                Err(ApplicationError::Validation { field: "prompt", .. })
            ));
        }

        assert_eq!(model.request_count(), 0);
    }

    #[tokio::test]
    async fn test_output_is_cleaned() {
        let model = Arc::new(FakeScriptModel::new(
            "Script:\n**namaste doston**\n---\naaj hum chai par baat karenge",
        ));
        let handler = handler_with(model.clone());

        let response = handler
            .handle(GenerateScript {
                prompt: "tea talk".to_string(),
                language: "Hindi".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            response.script.text(),
            "namaste doston\naaj hum chai par baat karenge"
        );
        assert_eq!(response.language, "Hindi");
        assert_eq!(response.prompt, "tea talk");
        assert_eq!(model.request_count(), 1);
    }

    #[tokio::test]
    async fn test_non_english_request_asks_for_transliteration() {
        let model = Arc::new(FakeScriptModel::new("kuch shabd"));
        let handler = handler_with(model.clone());

        handler
            .handle(GenerateScript {
                prompt: "greetings".to_string(),
                language: "Hindi".to_string(),
            })
            .await
            .unwrap();

        let requests = model.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].system.contains("transliterated"));
        assert_eq!(requests[0].max_tokens, SCRIPT_MAX_TOKENS);
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_generation_error() {
        let model = Arc::new(FakeScriptModel::failing("connection refused"));
        let handler = handler_with(model);

        let result = handler
            .handle(GenerateScript {
                prompt: "anything".to_string(),
                language: "English".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ScriptGeneration(_))));
    }

    #[tokio::test]
    async fn test_label_only_completion_is_generation_error() {
        let model = Arc::new(FakeScriptModel::new("Script:\n---"));
        let handler = handler_with(model);

        let result = handler
            .handle(GenerateScript {
                prompt: "anything".to_string(),
                language: "English".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ScriptGeneration(_))));
    }
}

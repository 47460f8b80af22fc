//! OpenAI Script Model - chat-completions 客户端
//!
//! 实现 ScriptModelPort trait，调用 OpenAI 兼容的
//! /chat/completions 接口生成文案

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{CompletionRequest, ScriptModelError, ScriptModelPort};

/// OpenAI 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiScriptModelConfig {
    /// API 基础 URL（可指向任何 OpenAI 兼容网关）
    pub base_url: String,
    /// 为空时拒绝调用，不发起网络请求
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for OpenAiScriptModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 60,
        }
    }
}

impl OpenAiScriptModelConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI chat-completions 客户端
pub struct OpenAiScriptModel {
    client: Client,
    config: OpenAiScriptModelConfig,
}

impl OpenAiScriptModel {
    pub fn new(config: OpenAiScriptModelConfig) -> Result<Self, ScriptModelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ScriptModelError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn map_transport_error(e: reqwest::Error) -> ScriptModelError {
        if e.is_timeout() {
            ScriptModelError::Timeout
        } else {
            ScriptModelError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl ScriptModelPort for OpenAiScriptModel {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ScriptModelError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(ScriptModelError::MissingCredentials),
        };

        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.user },
            ],
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        tracing::debug!(
            url = %self.completions_url(),
            model = %self.config.model,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ScriptModelError::Api(format!("HTTP {}: {}", status, detail)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ScriptModelError::Api(format!("Invalid response body: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ScriptModelError::EmptyCompletion);
        }

        Ok(content)
    }
}

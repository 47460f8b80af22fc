//! Script Model Port - 上游语言模型抽象
//!
//! 一次 chat-completion 调用的最小接口；重试属于调用方策略，
//! 本层不做

use async_trait::async_trait;
use thiserror::Error;

/// 上游模型错误
#[derive(Debug, Error)]
pub enum ScriptModelError {
    /// 凭据未配置；在发起任何网络调用之前失败
    #[error("script model credentials are not configured (set REVOICE_SCRIPT__API_KEY or OPENAI_API_KEY)")]
    MissingCredentials,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Upstream API error: {0}")]
    Api(String),

    #[error("Upstream returned empty content")]
    EmptyCompletion,
}

/// 一次补全调用
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    /// 响应长度上限
    pub max_tokens: u32,
    /// 采样温度
    pub temperature: f32,
}

/// Script Model Port
#[async_trait]
pub trait ScriptModelPort: Send + Sync {
    /// 调用上游模型，返回原始文本内容
    async fn complete(&self, request: CompletionRequest) -> Result<String, ScriptModelError>;
}

//! Fake Script Model - 测试用的文案模型替身
//!
//! 固定返回预设文本或预设错误，并记录收到的每个请求

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{CompletionRequest, ScriptModelError, ScriptModelPort};

/// 预设响应的假模型
pub struct FakeScriptModel {
    reply: Result<String, String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeScriptModel {
    /// 每次补全都返回这段文本
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 每次补全都以该消息失败
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// 已记录的全部补全请求（按调用顺序）
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptModelPort for FakeScriptModel {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ScriptModelError> {
        self.requests.lock().unwrap().push(request);

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(ScriptModelError::Api(message.clone())),
        }
    }
}

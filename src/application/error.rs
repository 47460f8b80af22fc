//! 应用层错误定义
//!
//! 统一的命令错误类型；校验错误携带出错字段名

use thiserror::Error;

use crate::application::ports::{AudioError, EngineError, ScriptModelError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 校验错误（缺失/空字段、非法取值）
    #[error("{reason}")]
    Validation { field: &'static str, reason: String },

    /// 资源未找到
    #[error("{resource} with ID '{id}' not found. Please upload voice again.")]
    NotFound { resource: &'static str, id: String },

    /// 脚本生成阶段失败
    #[error("Script generation failed: {0}")]
    ScriptGeneration(String),

    /// 合成阶段失败
    #[error("Audio generation failed: {0}")]
    Synthesis(String),

    /// 参考音频处理失败
    #[error("Error processing input audio: {0}")]
    AudioProcessing(String),

    /// 配置缺失或非法
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// 创建校验错误
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// 创建 NotFound 错误
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// 出错字段名（仅校验错误携带）
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<ScriptModelError> for ApplicationError {
    fn from(err: ScriptModelError) -> Self {
        match err {
            ScriptModelError::MissingCredentials => Self::Configuration(err.to_string()),
            other => Self::ScriptGeneration(other.to_string()),
        }
    }
}

impl From<EngineError> for ApplicationError {
    fn from(err: EngineError) -> Self {
        Self::Synthesis(err.to_string())
    }
}

impl From<AudioError> for ApplicationError {
    fn from(err: AudioError) -> Self {
        Self::AudioProcessing(err.to_string())
    }
}

//! TTS Engine Port - 声音克隆引擎抽象
//!
//! 定义合成引擎的抽象接口，具体实现在 infrastructure/adapters 层

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::synthesis::SynthesisParams;

/// 引擎错误
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Network error: {0}")]
    Network(String),

    /// 超过单次调用的等待上限；与其他引擎失败区分开
    #[error("Request timeout")]
    Timeout,

    #[error("Engine generation failed: {0}")]
    Generation(String),

    #[error("Invalid engine response: {0}")]
    InvalidResponse(String),

    #[error("Engine load failed: {0}")]
    LoadFailed(String),
}

/// 合成任务
///
/// 参考音频以处理好的临时 WAV 文件提供，引擎按路径消费；
/// seed 随请求传递，不依赖进程级随机状态
#[derive(Debug, Clone)]
pub struct SynthesisJob {
    pub text: String,
    pub prompt_path: PathBuf,
    pub params: SynthesisParams,
}

/// 引擎原始输出：单声道 f32 样本
#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

/// TTS Engine Port
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 引擎要求的参考音频采样率
    fn prompt_sample_rate(&self) -> u32;

    /// 一次性加载门：重量级模型只加载一次，并发首次访问时
    /// 后来者阻塞等待而不重复加载
    async fn ensure_loaded(&self) -> Result<(), EngineError> {
        Ok(())
    }

    /// 执行合成；参数不再做任何缩放，原样透传
    async fn generate(&self, job: SynthesisJob) -> Result<EngineOutput, EngineError>;

    /// 检查引擎是否可用
    async fn health_check(&self) -> bool {
        true
    }
}

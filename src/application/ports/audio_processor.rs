//! Audio Processor Port - 参考音频预处理与 WAV 编码

use thiserror::Error;

/// 音频处理错误
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Invalid audio input: {0}")]
    InvalidInput(String),

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// 解码后的单声道 PCM
#[derive(Debug, Clone)]
pub struct MonoPcm {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl MonoPcm {
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        (self.samples.len() as u64 * 1000) / self.sample_rate as u64
    }
}

/// Audio Processor Port
pub trait AudioProcessorPort: Send + Sync {
    /// 解码任意容器 → 多声道取平均混为单声道 → 重采样到 target_rate
    fn prepare_reference(&self, data: &[u8], target_rate: u32) -> Result<MonoPcm, AudioError>;

    /// f32 样本编码为 16-bit PCM 单声道 WAV
    fn encode_wav(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, AudioError>;
}

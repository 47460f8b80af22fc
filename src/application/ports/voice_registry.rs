//! Voice Registry Port - 参考音频样本登记
//!
//! 上传与后续使用之间的临时关联；所有访问都走这个端口，
//! 不允许直接持有底层 map

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Registry 错误
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Voice sample not found: {0}")]
    NotFound(String),

    #[error("Voice sample payload is empty")]
    EmptyPayload,
}

/// 上传的参考音频样本
///
/// 登记后不再修改；同一 voice_id 在进程生命周期内恒定映射到
/// 完全相同的字节
#[derive(Debug, Clone)]
pub struct VoiceSample {
    pub id: String,
    pub data: Vec<u8>,
    pub filename: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Voice Registry Port
pub trait VoiceRegistryPort: Send + Sync {
    /// 存储样本并签发新的 voice_id（128 位随机 token）
    ///
    /// 零长度负载被拒绝；并发 store 互不覆盖
    fn store(&self, data: Vec<u8>, filename: Option<String>) -> Result<String, RegistryError>;

    /// 按 voice_id 查找；未命中返回类型化的 NotFound
    fn fetch(&self, id: &str) -> Result<VoiceSample, RegistryError>;

    /// 当前登记的样本数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 清理存活超过 ttl 的样本，返回清理数量
    fn evict_expired(&self, ttl_secs: u64) -> usize;
}

//! In-Memory Voice Registry Implementation
//!
//! DashMap 支撑的进程内样本登记；键只增不改，
//! 完整写入的条目对并发读取始终一致

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::application::ports::{RegistryError, VoiceRegistryPort, VoiceSample};

/// 内存音色样本登记
pub struct InMemoryVoiceRegistry {
    samples: DashMap<String, VoiceSample>,
}

impl InMemoryVoiceRegistry {
    pub fn new() -> Self {
        Self {
            samples: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryVoiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceRegistryPort for InMemoryVoiceRegistry {
    fn store(&self, data: Vec<u8>, filename: Option<String>) -> Result<String, RegistryError> {
        if data.is_empty() {
            return Err(RegistryError::EmptyPayload);
        }

        // UUIDv4 碰撞概率可忽略；仍然 check-and-retry，绝不覆盖既有键
        loop {
            let id = Uuid::new_v4().to_string();
            match self.samples.entry(id.clone()) {
                dashmap::mapref::entry::Entry::Occupied(_) => continue,
                dashmap::mapref::entry::Entry::Vacant(entry) => {
                    let size = data.len();
                    entry.insert(VoiceSample {
                        id: id.clone(),
                        data,
                        filename,
                        uploaded_at: Utc::now(),
                    });
                    tracing::info!(voice_id = %id, size = size, "Voice sample stored");
                    return Ok(id);
                }
            }
        }
    }

    fn fetch(&self, id: &str) -> Result<VoiceSample, RegistryError> {
        self.samples
            .get(id)
            .map(|sample| sample.clone())
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    fn len(&self) -> usize {
        self.samples.len()
    }

    fn evict_expired(&self, ttl_secs: u64) -> usize {
        let now = Utc::now();
        let ttl = chrono::Duration::seconds(ttl_secs as i64);

        // 并发 store 会在 retain 扫描期间改变 len，
        // 只能在谓词里数被删除的条目
        let mut evicted = 0usize;
        self.samples.retain(|_, sample| {
            let keep = now - sample.uploaded_at <= ttl;
            if !keep {
                evicted += 1;
            }
            keep
        });

        if evicted > 0 {
            tracing::info!(evicted = evicted, "Expired voice samples evicted");
        }
        evicted
    }
}

/// 后台 TTL 清理循环
///
/// ttl_secs = 0 表示禁用清理（样本存活到进程退出）
pub async fn run_ttl_sweeper(
    registry: Arc<dyn VoiceRegistryPort>,
    ttl_secs: u64,
    interval_secs: u64,
) {
    if ttl_secs == 0 {
        return;
    }

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    loop {
        interval.tick().await;
        registry.evict_expired(ttl_secs);
    }
}

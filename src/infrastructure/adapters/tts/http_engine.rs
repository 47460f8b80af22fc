//! HTTP TTS Engine - 调用声音克隆引擎 sidecar
//!
//! 实现 TtsEnginePort trait，通过 HTTP 调用同机部署的引擎服务
//!
//! 引擎 API:
//! POST {base_url}/api/tts/load      一次性模型加载（幂等）
//! POST {base_url}/api/tts/generate  Request: JSON（文本、prompt 路径、参数）
//!                                   Response: 原始 little-endian f32 PCM，
//!                                   采样率在 X-Sample-Rate header
//! GET  {base_url}/health            健康检查

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::application::ports::{EngineError, EngineOutput, SynthesisJob, TtsEnginePort};

/// 引擎合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct EngineHttpRequest<'a> {
    /// 要合成的文本
    text: &'a str,
    /// 处理好的参考音频 WAV 路径（引擎按路径读取）
    prompt_path: String,
    exaggeration: f32,
    cfg_weight: f32,
    temperature: f32,
    /// 0 = 不播种
    seed: u64,
}

/// HTTP 引擎客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsEngineConfig {
    /// 引擎服务基础 URL
    pub base_url: String,
    /// 单次调用等待上限（秒）
    pub timeout_secs: u64,
    /// 引擎要求的参考音频采样率
    pub prompt_sample_rate: u32,
}

impl Default for HttpTtsEngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 120,
            prompt_sample_rate: 24000,
        }
    }
}

impl HttpTtsEngineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 引擎客户端
pub struct HttpTtsEngine {
    client: Client,
    config: HttpTtsEngineConfig,
    /// 一次性加载门：首个调用者触发加载，后来者等待同一结果
    loaded: OnceCell<()>,
}

impl HttpTtsEngine {
    pub fn new(config: HttpTtsEngineConfig) -> Result<Self, EngineError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EngineError::Network(e.to_string()))?;

        Ok(Self {
            client,
            config,
            loaded: OnceCell::new(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/tts/generate", self.config.base_url)
    }

    fn load_url(&self) -> String {
        format!("{}/api/tts/load", self.config.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }

    fn map_transport_error(e: reqwest::Error) -> EngineError {
        if e.is_timeout() {
            EngineError::Timeout
        } else if e.is_connect() {
            EngineError::Network(format!("Cannot connect to TTS engine: {}", e))
        } else {
            EngineError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsEngine {
    fn prompt_sample_rate(&self) -> u32 {
        self.config.prompt_sample_rate
    }

    async fn ensure_loaded(&self) -> Result<(), EngineError> {
        self.loaded
            .get_or_try_init(|| async {
                tracing::info!(url = %self.load_url(), "Loading TTS engine model");

                let response = self
                    .client
                    .post(self.load_url())
                    .send()
                    .await
                    .map_err(Self::map_transport_error)?;

                let status = response.status();
                if !status.is_success() {
                    let detail = response.text().await.unwrap_or_default();
                    return Err(EngineError::LoadFailed(format!(
                        "HTTP {}: {}",
                        status, detail
                    )));
                }

                tracing::info!("TTS engine model loaded");
                Ok(())
            })
            .await
            .map(|_| ())
    }

    async fn generate(&self, job: SynthesisJob) -> Result<EngineOutput, EngineError> {
        let request = EngineHttpRequest {
            text: &job.text,
            prompt_path: job.prompt_path.display().to_string(),
            exaggeration: job.params.exaggeration,
            cfg_weight: job.params.cfg_weight,
            temperature: job.params.temperature,
            seed: job.params.seed,
        };

        tracing::debug!(
            url = %self.generate_url(),
            text_len = job.text.len(),
            seed = job.params.seed,
            "Sending TTS generate request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(EngineError::Generation(format!(
                "HTTP {}: {}",
                status, detail
            )));
        }

        let sample_rate = response
            .headers()
            .get("X-Sample-Rate")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.config.prompt_sample_rate);

        let body = response
            .bytes()
            .await
            .map_err(|e| EngineError::InvalidResponse(format!("Failed to read audio: {}", e)))?;

        if body.is_empty() {
            return Err(EngineError::InvalidResponse(
                "engine returned empty audio".to_string(),
            ));
        }
        if body.len() % 4 != 0 {
            return Err(EngineError::InvalidResponse(format!(
                "PCM body length {} is not a multiple of 4",
                body.len()
            )));
        }

        let samples: Vec<f32> = body
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();

        tracing::info!(
            samples = samples.len(),
            sample_rate = sample_rate,
            "TTS generation completed"
        );

        Ok(EngineOutput {
            samples,
            sample_rate,
        })
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpTtsEngineConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.prompt_sample_rate, 24000);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTtsEngineConfig::new("http://engine:9000").with_timeout(60);
        assert_eq!(config.base_url, "http://engine:9000");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_urls() {
        let engine = HttpTtsEngine::new(HttpTtsEngineConfig::default()).unwrap();
        assert_eq!(engine.generate_url(), "http://localhost:8000/api/tts/generate");
        assert_eq!(engine.load_url(), "http://localhost:8000/api/tts/load");
        assert_eq!(engine.health_url(), "http://localhost:8000/health");
    }
}

//! Synthesis Command Handlers
//!
//! 合成流水线：解析音色 → 预处理参考音频 → 临时 prompt 文件 →
//! 调用引擎 → 编码为规范 WAV 容器

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::commands::Speak;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioProcessorPort, RegistryError, SynthesisJob, TtsEnginePort, VoiceRegistryPort,
};
use crate::domain::synthesis::{AudioArtifact, SynthesisParams};

/// 播种门：非零 seed 的「播种 + 生成」序列全局串行化，
/// 避免两个并发请求在引擎的随机状态上互相踩踏
pub type SeedGate = Arc<Mutex<()>>;

/// Speak Handler
pub struct SpeakHandler {
    registry: Arc<dyn VoiceRegistryPort>,
    processor: Arc<dyn AudioProcessorPort>,
    engine: Arc<dyn TtsEnginePort>,
    seed_gate: SeedGate,
}

impl SpeakHandler {
    pub fn new(
        registry: Arc<dyn VoiceRegistryPort>,
        processor: Arc<dyn AudioProcessorPort>,
        engine: Arc<dyn TtsEnginePort>,
        seed_gate: SeedGate,
    ) -> Self {
        Self {
            registry,
            processor,
            engine,
            seed_gate,
        }
    }

    pub async fn handle(&self, command: Speak) -> Result<AudioArtifact, ApplicationError> {
        if command.voice_id.trim().is_empty() {
            return Err(ApplicationError::validation(
                "voice_id",
                "Voice ID is required.",
            ));
        }
        let text = command.text.trim();
        if text.is_empty() {
            return Err(ApplicationError::validation("text", "Text cannot be empty."));
        }

        // 悬空 voice_id 是一等错误，绝不触达引擎
        let sample = self.registry.fetch(&command.voice_id).map_err(|e| match e {
            RegistryError::NotFound(id) => ApplicationError::not_found("Voice sample", id),
            other => ApplicationError::Synthesis(other.to_string()),
        })?;

        self.synthesize(text, &sample.data, command.params).await
    }

    /// 核心合成流程；调用方已解析音色并裁剪文本
    pub(crate) async fn synthesize(
        &self,
        text: &str,
        reference: &[u8],
        params: SynthesisParams,
    ) -> Result<AudioArtifact, ApplicationError> {
        // 防御性复查，即使调用方已校验
        if reference.is_empty() {
            return Err(ApplicationError::validation(
                "audio_file",
                "Reference audio cannot be empty.",
            ));
        }
        if text.is_empty() {
            return Err(ApplicationError::validation("text", "Text cannot be empty."));
        }

        self.engine.ensure_loaded().await?;

        // 解码 → 单声道 → 重采样到引擎要求的采样率
        let target_rate = self.engine.prompt_sample_rate();
        let prompt = self.processor.prepare_reference(reference, target_rate)?;
        let prompt_wav = self.processor.encode_wav(&prompt.samples, prompt.sample_rate)?;

        // NamedTempFile 随 drop 删除，覆盖成功、引擎失败、处理失败所有退出路径
        let prompt_file = tempfile::Builder::new()
            .prefix("revoice_prompt_")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| {
                ApplicationError::AudioProcessing(format!("failed to create prompt file: {}", e))
            })?;
        tokio::fs::write(prompt_file.path(), &prompt_wav)
            .await
            .map_err(|e| {
                ApplicationError::AudioProcessing(format!("failed to write prompt file: {}", e))
            })?;

        let job = SynthesisJob {
            text: text.to_string(),
            prompt_path: prompt_file.path().to_path_buf(),
            params,
        };

        let output = if params.is_seeded() {
            let _gate = self.seed_gate.lock().await;
            tracing::debug!(seed = params.seed, "Seeded generation (serialized)");
            self.engine.generate(job).await
        } else {
            self.engine.generate(job).await
        }
        .map_err(|e| {
            tracing::error!(error = %e, "TTS engine generation failed");
            ApplicationError::from(e)
        })?;

        // 引擎原始样本 → 规范容器，采样率保持引擎原生值
        let wav = self
            .processor
            .encode_wav(&output.samples, output.sample_rate)?;

        tracing::info!(
            bytes = wav.len(),
            sample_rate = output.sample_rate,
            exaggeration = params.exaggeration,
            cfg_weight = params.cfg_weight,
            "Audio synthesized"
        );

        Ok(AudioArtifact::new(wav, output.sample_rate))
    }
}

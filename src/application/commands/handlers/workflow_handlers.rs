//! Workflow Command Handlers
//!
//! 组合工作流：生成脚本 → 用同一请求的参数合成语音。
//! 脚本阶段失败立即短路，绝不进入合成阶段

use std::sync::Arc;

use crate::application::commands::{CompleteWorkflow, GenerateScript};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioProcessorPort, RegistryError, ScriptModelPort, TtsEnginePort, VoiceRegistryPort,
};
use crate::domain::script::GeneratedScript;
use crate::domain::synthesis::AudioArtifact;

use super::script_handlers::GenerateScriptHandler;
use super::synthesis_handlers::{SeedGate, SpeakHandler};

/// 组合工作流响应：恰好一个脚本与由它产出的恰好一个音频
#[derive(Debug, Clone)]
pub struct CompleteWorkflowResponse {
    pub script: GeneratedScript,
    pub language: String,
    pub prompt: String,
    pub audio: AudioArtifact,
}

/// CompleteWorkflow Handler
pub struct CompleteWorkflowHandler {
    registry: Arc<dyn VoiceRegistryPort>,
    script_handler: GenerateScriptHandler,
    speak_handler: SpeakHandler,
}

impl CompleteWorkflowHandler {
    pub fn new(
        registry: Arc<dyn VoiceRegistryPort>,
        processor: Arc<dyn AudioProcessorPort>,
        engine: Arc<dyn TtsEnginePort>,
        script_model: Arc<dyn ScriptModelPort>,
        seed_gate: SeedGate,
    ) -> Self {
        Self {
            registry: registry.clone(),
            script_handler: GenerateScriptHandler::new(script_model),
            speak_handler: SpeakHandler::new(registry, processor, engine, seed_gate),
        }
    }

    pub async fn handle(
        &self,
        command: CompleteWorkflow,
    ) -> Result<CompleteWorkflowResponse, ApplicationError> {
        if command.voice_id.trim().is_empty() {
            return Err(ApplicationError::validation(
                "voice_id",
                "Voice ID is required.",
            ));
        }

        // 校验在任何外部调用之前：先解析音色，再生成脚本
        let sample = self.registry.fetch(&command.voice_id).map_err(|e| match e {
            RegistryError::NotFound(id) => ApplicationError::not_found("Voice sample", id),
            other => ApplicationError::Synthesis(other.to_string()),
        })?;

        let script_response = self
            .script_handler
            .handle(GenerateScript {
                prompt: command.prompt,
                language: command.language,
            })
            .await?;

        let audio = self
            .speak_handler
            .synthesize(script_response.script.text(), &sample.data, command.params)
            .await?;

        tracing::info!(
            voice_id = %command.voice_id,
            language = %script_response.language,
            word_count = script_response.script.word_count(),
            audio_bytes = audio.len(),
            "Complete workflow finished"
        );

        Ok(CompleteWorkflowResponse {
            script: script_response.script,
            language: script_response.language,
            prompt: script_response.prompt,
            audio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::synthesis::SynthesisParams;
    use crate::infrastructure::adapters::audio::SymphoniaProcessor;
    use crate::infrastructure::adapters::llm::FakeScriptModel;
    use crate::infrastructure::adapters::tts::FakeTtsEngine;
    use crate::infrastructure::memory::InMemoryVoiceRegistry;
    use tokio::sync::Mutex;

    struct Fixture {
        registry: Arc<InMemoryVoiceRegistry>,
        engine: Arc<FakeTtsEngine>,
        model: Arc<FakeScriptModel>,
        handler: CompleteWorkflowHandler,
    }

    fn fixture(model: FakeScriptModel) -> Fixture {
        let registry = Arc::new(InMemoryVoiceRegistry::new());
        let engine = Arc::new(FakeTtsEngine::with_defaults());
        let model = Arc::new(model);
        let handler = CompleteWorkflowHandler::new(
            registry.clone(),
            Arc::new(SymphoniaProcessor::new()),
            engine.clone(),
            model.clone(),
            Arc::new(Mutex::new(())),
        );
        Fixture {
            registry,
            engine,
            model,
            handler,
        }
    }

    fn test_wav() -> Vec<u8> {
        SymphoniaProcessor::new()
            .encode_wav(&vec![0.1_f32; 16000], 16000)
            .unwrap()
    }

    fn command(voice_id: String) -> CompleteWorkflow {
        CompleteWorkflow {
            voice_id,
            prompt: "a short greeting".to_string(),
            language: "Hindi".to_string(),
            params: SynthesisParams::default(),
        }
    }

    #[tokio::test]
    async fn test_workflow_chains_script_into_synthesis() {
        let f = fixture(FakeScriptModel::new("namaste doston, kaise ho"));
        let voice_id = f.registry.store(test_wav(), None).unwrap();

        let response = f.handler.handle(command(voice_id)).await.unwrap();

        assert_eq!(response.script.text(), "namaste doston, kaise ho");
        assert_eq!(response.script.word_count(), 4);
        assert!(!response.audio.is_empty());

        // 合成拿到的文本必须就是清洗后的脚本
        let jobs = f.engine.invocations();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].text, "namaste doston, kaise ho");
    }

    #[tokio::test]
    async fn test_script_failure_short_circuits_synthesis() {
        let f = fixture(FakeScriptModel::failing("model unavailable"));
        let voice_id = f.registry.store(test_wav(), None).unwrap();

        let result = f.handler.handle(command(voice_id)).await;

        assert!(matches!(result, Err(ApplicationError::ScriptGeneration(_))));
        assert_eq!(f.engine.invocation_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_voice_fails_before_script_generation() {
        let f = fixture(FakeScriptModel::new("unused"));

        let result = f.handler.handle(command("missing".to_string())).await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
        assert_eq!(f.model.request_count(), 0);
        assert_eq!(f.engine.invocation_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected_locally() {
        let f = fixture(FakeScriptModel::new("unused"));
        let voice_id = f.registry.store(test_wav(), None).unwrap();

        let mut cmd = command(voice_id);
        cmd.prompt = "  ".to_string();
        let result = f.handler.handle(cmd).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Validation { field: "prompt", .. })
        ));
        assert_eq!(f.model.request_count(), 0);
    }
}

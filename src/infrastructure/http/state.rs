//! Application State
//!
//! 聚合全部出站端口与命令处理器；
//! 播种门在此创建，三个合成入口共享同一把锁

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::ports::{
    AudioProcessorPort, ScriptModelPort, TtsEnginePort, VoiceRegistryPort,
};
use crate::application::{
    CompleteWorkflowHandler, GenerateScriptHandler, SeedGate, SpeakHandler,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub registry: Arc<dyn VoiceRegistryPort>,
    pub engine: Arc<dyn TtsEnginePort>,
    pub script_model: Arc<dyn ScriptModelPort>,

    // ========== Command Handlers ==========
    pub generate_script_handler: GenerateScriptHandler,
    pub speak_handler: SpeakHandler,
    pub complete_workflow_handler: CompleteWorkflowHandler,
}

impl AppState {
    pub fn new(
        registry: Arc<dyn VoiceRegistryPort>,
        processor: Arc<dyn AudioProcessorPort>,
        engine: Arc<dyn TtsEnginePort>,
        script_model: Arc<dyn ScriptModelPort>,
    ) -> Self {
        let seed_gate: SeedGate = Arc::new(Mutex::new(()));

        Self {
            registry: registry.clone(),
            engine: engine.clone(),
            script_model: script_model.clone(),

            generate_script_handler: GenerateScriptHandler::new(script_model.clone()),
            speak_handler: SpeakHandler::new(
                registry.clone(),
                processor.clone(),
                engine.clone(),
                seed_gate.clone(),
            ),
            complete_workflow_handler: CompleteWorkflowHandler::new(
                registry,
                processor,
                engine,
                script_model,
                seed_gate,
            ),
        }
    }
}

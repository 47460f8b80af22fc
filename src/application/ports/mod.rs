//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_processor;
mod script_model;
mod tts_engine;
mod voice_registry;

pub use audio_processor::{AudioError, AudioProcessorPort, MonoPcm};
pub use script_model::{CompletionRequest, ScriptModelError, ScriptModelPort};
pub use tts_engine::{EngineError, EngineOutput, SynthesisJob, TtsEnginePort};
pub use voice_registry::{RegistryError, VoiceRegistryPort, VoiceSample};

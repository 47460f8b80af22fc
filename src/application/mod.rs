//! Application Layer
//!
//! - Ports: 出站端口（VoiceRegistry, TtsEngine, ScriptModel, AudioProcessor）
//! - Commands: 命令与命令处理器（工作流编排）
//! - Error: 统一应用层错误

pub mod commands;
pub mod error;
pub mod ports;

pub use commands::handlers::{
    CompleteWorkflowHandler, CompleteWorkflowResponse, GenerateScriptHandler,
    GenerateScriptResponse, SeedGate, SpeakHandler,
};
pub use commands::{CompleteWorkflow, GenerateScript, Speak};
pub use error::ApplicationError;

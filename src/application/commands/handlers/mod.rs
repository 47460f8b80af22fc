//! Command Handlers

mod script_handlers;
mod synthesis_handlers;
mod workflow_handlers;

pub use script_handlers::{
    GenerateScriptHandler, GenerateScriptResponse, SCRIPT_MAX_TOKENS, SCRIPT_TEMPERATURE,
};
pub use synthesis_handlers::{SeedGate, SpeakHandler};
pub use workflow_handlers::{CompleteWorkflowHandler, CompleteWorkflowResponse};

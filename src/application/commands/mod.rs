//! Application Commands

pub mod handlers;

mod script_commands;
mod synthesis_commands;

pub use script_commands::GenerateScript;
pub use synthesis_commands::{CompleteWorkflow, Speak};

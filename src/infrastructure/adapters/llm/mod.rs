//! Script Model Adapters

mod fake_model;
mod openai_model;

pub use fake_model::FakeScriptModel;
pub use openai_model::{OpenAiScriptModel, OpenAiScriptModelConfig};

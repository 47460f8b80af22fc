//! TTS Engine Adapters

mod fake_engine;
mod http_engine;

pub use fake_engine::FakeTtsEngine;
pub use http_engine::{HttpTtsEngine, HttpTtsEngineConfig};

//! In-Memory Implementations

mod voice_registry;

pub use voice_registry::{run_ttl_sweeper, InMemoryVoiceRegistry};

//! Infrastructure Adapters - 出站端口的具体实现

pub mod audio;
pub mod llm;
pub mod tts;

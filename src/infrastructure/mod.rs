//! Infrastructure Layer
//!
//! - adapters: 出站端口实现（音频处理、TTS 引擎、文案模型）
//! - memory: 进程内状态（音色样本登记）
//! - http: HTTP 服务器、路由与处理器

pub mod adapters;
pub mod http;
pub mod memory;

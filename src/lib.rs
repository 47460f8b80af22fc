//! Revoice - 声音克隆 TTS 编排服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Synthesis Context: 合成参数规范化、音频产物
//! - Script Context: 文案指令构造与输出清洗
//!
//! 应用层 (application/):
//! - Ports: 端口定义（VoiceRegistry, TtsEngine, ScriptModel, AudioProcessor）
//! - Commands: 命令处理器（文案生成、语音合成、组合工作流）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 音色样本登记内存实现
//! - Adapters: TTS 引擎客户端、文案模型客户端、音频处理

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

//! Domain Layer - 纯领域逻辑
//!
//! - Synthesis Context: 合成参数归一化与音频产物
//! - Script Context: 脚本指令构造、模型输出清洗

pub mod script;
pub mod synthesis;

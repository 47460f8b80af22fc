//! Script Commands

/// 生成口播脚本命令
#[derive(Debug, Clone)]
pub struct GenerateScript {
    pub prompt: String,
    /// 目标语言显示名；默认 "English"
    pub language: String,
}

//! Script Context - Value Objects

/// 生成的口播脚本
///
/// 字数与字符数均从文本派生，不可独立设置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript(String);

impl GeneratedScript {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }

    /// 按空白分词的词数
    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    /// 字符数（Unicode 标量计数）
    pub fn character_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for GeneratedScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

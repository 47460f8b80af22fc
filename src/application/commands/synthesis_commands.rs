//! Synthesis Commands

use crate::domain::synthesis::SynthesisParams;

/// 用已上传音色合成语音命令
#[derive(Debug, Clone)]
pub struct Speak {
    pub voice_id: String,
    pub text: String,
    pub params: SynthesisParams,
}

/// 组合工作流命令：生成脚本 → 合成语音
#[derive(Debug, Clone)]
pub struct CompleteWorkflow {
    pub voice_id: String,
    pub prompt: String,
    pub language: String,
    pub params: SynthesisParams,
}

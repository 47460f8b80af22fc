//! HTTP DTOs
//!
//! 请求/响应数据结构与附件文件名构造

use chrono::Utc;
use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "English".to_string()
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateScriptRequest {
    pub prompt: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub voice_id: Option<String>,
    pub text: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    pub exaggeration: Option<f32>,
    pub cfg_weight: Option<f32>,
    pub temperature: Option<f32>,
    /// 0 或缺省 = 不播种
    pub seed_num: Option<u64>,
    /// true 时响应带附件 disposition 头
    #[serde(default)]
    pub download: bool,
}

#[derive(Debug, Deserialize)]
pub struct DownloadAudioRequest {
    pub voice_id: Option<String>,
    pub text: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    pub exaggeration: Option<f32>,
    pub cfg_weight: Option<f32>,
    pub temperature: Option<f32>,
    pub seed_num: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteWorkflowRequest {
    pub voice_id: Option<String>,
    pub prompt: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    pub exaggeration: Option<f32>,
    pub cfg_weight: Option<f32>,
    pub temperature: Option<f32>,
    pub seed_num: Option<u64>,
    /// true 时返回 WAV 附件，否则返回含 base64 音频的 JSON
    #[serde(default)]
    pub download: bool,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FileInfo {
    pub filename: String,
    pub size: usize,
}

#[derive(Debug, Serialize)]
pub struct VoiceCloneResponse {
    pub voice_id: String,
    pub message: String,
    pub file_info: FileInfo,
}

#[derive(Debug, Serialize)]
pub struct GenerateScriptResponse {
    pub script: String,
    pub language: String,
    pub prompt: String,
    pub word_count: usize,
    pub character_count: usize,
}

#[derive(Debug, Serialize)]
pub struct CompleteWorkflowResponse {
    pub script: String,
    pub language: String,
    pub prompt: String,
    pub audio_generated: bool,
    pub word_count: usize,
    pub character_count: usize,
    pub audio_base64: String,
}

// ============================================================================
// Attachment filenames
// ============================================================================

/// 语言名转为文件名安全形式：小写，空白折叠为下划线
fn sanitize_language(language: &str) -> String {
    language
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// 构造形如 `{prefix}_{language}_{YYYYmmdd_HHMMSS}.{ext}` 的附件文件名；
/// language 为 None 时省略语言段
pub fn attachment_filename(prefix: &str, language: Option<&str>, extension: &str) -> String {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    match language {
        Some(lang) => format!(
            "{}_{}_{}.{}",
            prefix,
            sanitize_language(lang),
            timestamp,
            extension
        ),
        None => format!("{}_{}.{}", prefix, timestamp, extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_language() {
        assert_eq!(sanitize_language("Hindi"), "hindi");
        assert_eq!(sanitize_language("  Brazilian Portuguese "), "brazilian_portuguese");
        assert_eq!(sanitize_language("English"), "english");
    }

    #[test]
    fn test_attachment_filename_with_language() {
        let name = attachment_filename("cloned_voice", Some("Hindi"), "wav");
        assert!(name.starts_with("cloned_voice_hindi_"));
        assert!(name.ends_with(".wav"));
        // prefix + lang + YYYYmmdd_HHMMSS + ext
        assert_eq!(name.len(), "cloned_voice_hindi_".len() + 15 + 4);
    }

    #[test]
    fn test_attachment_filename_without_language() {
        let name = attachment_filename("cloned_voice_audio", None, "wav");
        assert!(name.starts_with("cloned_voice_audio_"));
        assert!(name.ends_with(".wav"));
    }

    #[test]
    fn test_request_defaults() {
        let req: CompleteWorkflowRequest =
            serde_json::from_str(r#"{"voice_id":"v","prompt":"p"}"#).unwrap();
        assert_eq!(req.language, "English");
        assert!(!req.download);
        assert!(req.seed_num.is_none());
    }
}

//! Script Prompts - 上游语言模型指令构造
//!
//! 英语目标直接生成；其他语言生成音译稿：用英文字母书写目标语言的
//! 发音，使只认英文字母的 TTS 引擎也能读出接近原语言的语音

/// 一次脚本生成调用的指令对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptMessages {
    pub system: String,
    pub user: String,
}

/// 基准语言（引擎唯一能读的字母表）
pub const BASE_LANGUAGE: &str = "English";

/// 按目标语言构造指令
pub fn build_messages(prompt: &str, language: &str) -> ScriptMessages {
    if is_base_language(language) {
        ScriptMessages {
            system: concat!(
                "You are a professional script writer. Generate a clear, engaging script ",
                "for podcast or video content based on the user's prompt. ",
                "Make it natural-sounding and suitable for text-to-speech synthesis. ",
                "Keep sentences moderate in length and avoid complex punctuation that ",
                "might confuse TTS systems. ",
                "Focus on creating content that flows well when spoken aloud. ",
                "Return ONLY the final script without any labels, headers, or explanations."
            )
            .to_string(),
            user: format!("Generate a script based on this prompt: '{}'.", prompt),
        }
    } else {
        ScriptMessages {
            system: format!(
                "You are a professional script writer. Generate a script for podcast or \
                 video content that represents {lang} speech but written in English/Roman \
                 letters (transliterated). \
                 This means writing {lang} words using the English alphabet so they can be \
                 pronounced correctly by an English TTS. \
                 For example: Hindi 'नमस्कार' becomes 'namaste', 'दोस्तों' becomes 'doston'. \
                 Make it natural-sounding and suitable for text-to-speech synthesis. \
                 Keep sentences moderate in length and use simple punctuation. \
                 The goal is that when an English TTS reads this, it sounds like natural \
                 {lang} speech. \
                 Return ONLY the transliterated script without any labels, headers, or \
                 explanations.",
                lang = language
            ),
            user: format!(
                "Generate a script in {lang} but write it using English/Roman letters \
                 (transliterated) based on this prompt: '{prompt}'. Make sure the \
                 transliteration sounds natural when spoken by an English TTS.",
                lang = language,
                prompt = prompt
            ),
        }
    }
}

fn is_base_language(language: &str) -> bool {
    language.trim().eq_ignore_ascii_case(BASE_LANGUAGE)
}

//! Script Cleanup - 模型输出的格式清洗
//!
//! 逐行处理：去掉 markdown 强调符号、丢弃标签行与空行后重新拼接。
//! 必须容忍模型漏写或重复标签

/// 需要整行丢弃的标签前缀（匹配前先转小写）
const LABEL_PREFIXES: &[&str] = &["script:", "transliteration:", "---"];

/// 清洗模型返回的脚本文本
pub fn clean_model_output(raw: &str) -> String {
    let stripped = raw.replace("**", "").replace('*', "").replace('#', "");

    let cleaned: Vec<&str> = stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_label_line(line))
        .collect();

    cleaned.join("\n").trim().to_string()
}

fn is_label_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    LABEL_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markdown_emphasis() {
        let raw = "**namaste doston**, aaj ka *topic* hai #chai";
        assert_eq!(clean_model_output(raw), "namaste doston, aaj ka topic hai chai");
    }

    #[test]
    fn test_removes_labeled_lines_case_insensitive() {
        let raw = "Script:\nnamaste doston\nTRANSLITERATION:\naaj hum baat karenge\n---\nphir milenge";
        let cleaned = clean_model_output(raw);
        for line in cleaned.lines() {
            let lowered = line.to_lowercase();
            assert!(!lowered.starts_with("script:"), "label survived: {}", line);
            assert!(!lowered.starts_with("transliteration:"), "label survived: {}", line);
            assert!(!lowered.starts_with("---"), "rule survived: {}", line);
        }
        assert_eq!(cleaned, "namaste doston\naaj hum baat karenge\nphir milenge");
    }

    #[test]
    fn test_tolerates_duplicated_labels() {
        let raw = "script:\nscript:\nhello world\nscript:";
        assert_eq!(clean_model_output(raw), "hello world");
    }

    #[test]
    fn test_drops_blank_lines_and_trims() {
        let raw = "\n\n  first line  \n\n\n  second line \n\n";
        assert_eq!(clean_model_output(raw), "first line\nsecond line");
    }

    #[test]
    fn test_label_only_input_yields_empty() {
        let raw = "Script:\n---\nTransliteration:";
        assert_eq!(clean_model_output(raw), "");
    }
}

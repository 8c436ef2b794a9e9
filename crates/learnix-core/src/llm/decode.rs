//! Reply clean-up for raw model output.

/// Tokenizer markers that may leak into decoded text.
pub const SPECIAL_TOKENS: &[&str] = &["<s>", "</s>", "<pad>", "<unk>", "<mask>", "<|endoftext|>"];

/// Remove special tokens from a raw reply.
///
/// Everything else, whitespace included, is kept as the model produced it.
pub fn strip_special_tokens(raw: &str) -> String {
    let mut text = raw.to_string();
    for token in SPECIAL_TOKENS {
        if text.contains(token) {
            text = text.replace(token, "");
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_sentence_markers() {
        assert_eq!(
            strip_special_tokens("<s> Plan your week in advance.</s>"),
            " Plan your week in advance."
        );
    }

    #[test]
    fn test_whitespace_preserved() {
        assert_eq!(
            strip_special_tokens("  <pad><pad> hello <|endoftext|>\n"),
            "   hello \n"
        );
        assert_eq!(strip_special_tokens("User: x "), "User: x ");
    }

    #[test]
    fn test_clean_text_unchanged() {
        assert_eq!(strip_special_tokens("Sure, happy to help."), "Sure, happy to help.");
    }

    #[test]
    fn test_only_tokens_becomes_empty() {
        assert_eq!(strip_special_tokens("<s></s>"), "");
    }
}

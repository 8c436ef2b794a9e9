//! Input bounding for model prompts.
//!
//! The conversational model accepts a limited number of input tokens. The
//! prompt is cut to its most recent portion before it reaches a backend, so
//! the newest turns always survive truncation.

/// Rough characters-per-token ratio used for budget estimates.
pub const CHARS_PER_TOKEN: usize = 4;

/// Estimate the token count of `text` (ceil of chars / 4).
pub fn estimate_tokens(text: &str) -> u32 {
    let chars = text.chars().count();
    chars.div_ceil(CHARS_PER_TOKEN) as u32
}

/// Return the longest suffix of `prompt` that fits in `max_tokens`.
///
/// The cut always lands on a char boundary. A `max_tokens` of zero yields
/// an empty string.
pub fn truncate_to_recent(prompt: &str, max_tokens: u32) -> &str {
    let max_chars = (max_tokens as usize).saturating_mul(CHARS_PER_TOKEN);
    let total = prompt.chars().count();
    if total <= max_chars {
        return prompt;
    }

    let skip = total - max_chars;
    match prompt.char_indices().nth(skip) {
        Some((offset, _)) => &prompt[offset..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tokens() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
    }

    #[test]
    fn test_short_prompt_untouched() {
        assert_eq!(truncate_to_recent("User: hi", 512), "User: hi");
    }

    #[test]
    fn test_keeps_most_recent_text() {
        let prompt = "User: first Bot: second User: third";
        let cut = truncate_to_recent(prompt, 3);
        assert_eq!(cut.chars().count(), 12);
        assert!(prompt.ends_with(cut));
        assert_eq!(cut, " User: third");
    }

    #[test]
    fn test_zero_budget_is_empty() {
        assert_eq!(truncate_to_recent("User: hi", 0), "");
    }

    #[test]
    fn test_multibyte_boundary() {
        let prompt = "ééééééééé";
        let cut = truncate_to_recent(prompt, 1);
        assert_eq!(cut, "éééé");
    }
}

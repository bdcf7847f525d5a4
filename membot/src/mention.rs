//! Shared pure functions for trigger-word detection.
//!
//! Used by the AI handler to decide when a group message is addressed to the
//! bot without an explicit @mention (the bot also reacts to its name, in any
//! case and any configured language).

/// Returns true if `text` contains any of `words` as a whole word,
/// case-insensitively. Word boundaries are non-alphanumeric characters, which
/// works for non-ASCII trigger words too.
pub fn is_trigger_mentioned(text: &str, words: &[String]) -> bool {
    let lowered = text.to_lowercase();
    words.iter().any(|word| {
        let word = word.to_lowercase();
        if word.is_empty() {
            return false;
        }
        lowered.match_indices(&word).any(|(start, matched)| {
            let before_ok = lowered[..start]
                .chars()
                .next_back()
                .map(|c| !c.is_alphanumeric())
                .unwrap_or(true);
            let after_ok = lowered[start + matched.len()..]
                .chars()
                .next()
                .map(|c| !c.is_alphanumeric())
                .unwrap_or(true);
            before_ok && after_ok
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detects_word_case_insensitive() {
        let w = words(&["membot"]);
        assert!(is_trigger_mentioned("Hey MemBot, what do you think?", &w));
        assert!(is_trigger_mentioned("MEMBOT!", &w));
    }

    #[test]
    fn test_detects_non_ascii_word() {
        let w = words(&["мембот"]);
        assert!(is_trigger_mentioned("Привет мембот, как дела?", &w));
    }

    #[test]
    fn test_rejects_substring_match() {
        let w = words(&["membot"]);
        assert!(!is_trigger_mentioned("remembotany is not a word", &w));
        assert!(!is_trigger_mentioned("membots", &w));
    }

    #[test]
    fn test_rejects_unrelated_text() {
        let w = words(&["membot"]);
        assert!(!is_trigger_mentioned("Hello everyone, how are you?", &w));
    }

    #[test]
    fn test_word_at_text_edges() {
        let w = words(&["membot"]);
        assert!(is_trigger_mentioned("membot", &w));
        assert!(is_trigger_mentioned("ping membot", &w));
    }
}

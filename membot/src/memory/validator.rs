//! Memory length validation.
//!
//! Single source of truth for the memory limit: both the command path and the
//! agent tool path go through [`validate`], so the two entry points cannot
//! drift apart.

use crate::core::MemoryError;

/// Maximum memory length in Unicode characters.
pub const MEMORY_MAX_CHARS: usize = 1024;

/// Checks the length invariant on a proposed memory text.
///
/// `None` means "clear" and is always accepted. Length is counted in Unicode
/// characters, not bytes. Pure function, no I/O.
pub fn validate(text: Option<&str>) -> Result<(), MemoryError> {
    if let Some(text) = text {
        let length = text.chars().count();
        if length > MEMORY_MAX_CHARS {
            return Err(MemoryError::TooLong { length });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_none() {
        assert!(validate(None).is_ok());
    }

    #[test]
    fn test_accepts_empty_and_short() {
        assert!(validate(Some("")).is_ok());
        assert!(validate(Some("This chat is about Go concurrency")).is_ok());
    }

    #[test]
    fn test_accepts_exactly_max() {
        let text = "a".repeat(MEMORY_MAX_CHARS);
        assert!(validate(Some(&text)).is_ok());
    }

    #[test]
    fn test_rejects_one_over_max_with_length() {
        let text = "a".repeat(MEMORY_MAX_CHARS + 1);
        match validate(Some(&text)) {
            Err(MemoryError::TooLong { length }) => assert_eq!(length, MEMORY_MAX_CHARS + 1),
            other => panic!("expected TooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 1024 multi-byte characters are within the limit even though the
        // byte length is far larger.
        let text = "ы".repeat(MEMORY_MAX_CHARS);
        assert!(validate(Some(&text)).is_ok());

        let text = "ы".repeat(MEMORY_MAX_CHARS + 1);
        match validate(Some(&text)) {
            Err(MemoryError::TooLong { length }) => assert_eq!(length, MEMORY_MAX_CHARS + 1),
            other => panic!("expected TooLong, got {:?}", other),
        }
    }
}

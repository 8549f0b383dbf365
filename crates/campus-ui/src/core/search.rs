//! Search box stub. Submissions are only logged.

/// Selector for the search text input.
pub const INPUT_SELECTOR: &str = ".search-input";
/// Selector for the submit control.
pub const SUBMIT_SELECTOR: &str = ".search-btn-submit";
/// Console prefix for logged submissions.
pub const LOG_PREFIX: &str = "Searching for:";

/// Trimmed keyword, or `None` when nothing but whitespace was typed.
#[must_use]
pub fn keyword(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|value| !value.is_empty())
}

/// Whether a `KeyboardEvent.key` value submits the search.
#[must_use]
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_is_trimmed() {
        assert_eq!(keyword("  tuyển sinh  "), Some("tuyển sinh"));
        assert_eq!(keyword("lịch học"), Some("lịch học"));
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(keyword(""), None);
        assert_eq!(keyword(" \t\n "), None);
    }

    #[test]
    fn only_enter_submits() {
        assert!(is_submit_key("Enter"));
        assert!(!is_submit_key("enter"));
        assert!(!is_submit_key("NumpadEnter"));
        assert!(!is_submit_key(" "));
    }
}

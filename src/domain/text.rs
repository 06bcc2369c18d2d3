// src/domain/text.rs

/// Tile descriptions are cut at this many characters.
pub const DESCRIPTION_LIMIT: usize = 100;
/// Website labels in the overlay are cut at this many characters.
pub const WEBSITE_LABEL_LIMIT: usize = 30;
/// Collapsed "additional information" length in the overlay.
pub const ADDITIONAL_INFO_LIMIT: usize = 200;

const ELLIPSIS: &str = "...";

/// Returns `text` unchanged when it fits in `max_chars`, otherwise its first
/// `max_chars` characters followed by `...`.
///
/// Counts characters, not bytes and not words, so a cut can land mid-word.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Whether `truncate(text, max_chars)` would shorten the text.
pub fn exceeds(text: &str, max_chars: usize) -> bool {
    text.chars().nth(max_chars).is_some()
}

pub fn truncate_url(url: &str, max_chars: usize) -> String {
    truncate(url, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello", 30), "hello");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let url = "https://www.example.com/products/very-long-path";
        let out = truncate_url(url, 30);
        assert_eq!(out, "https://www.example.com/produc...");
        assert_eq!(out.chars().count(), 33);
    }

    #[test]
    fn cuts_on_characters_not_bytes() {
        let text = "★".repeat(120);
        let out = truncate(&text, DESCRIPTION_LIMIT);
        assert_eq!(out.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(out.starts_with("★★★"));
        assert!(out.ends_with("..."));
    }

    #[test]
    fn description_boundary() {
        let exact = "a".repeat(DESCRIPTION_LIMIT);
        assert_eq!(truncate(&exact, DESCRIPTION_LIMIT), exact);
        assert!(!exceeds(&exact, DESCRIPTION_LIMIT));

        let over = "a".repeat(DESCRIPTION_LIMIT + 1);
        assert_eq!(
            truncate(&over, DESCRIPTION_LIMIT),
            format!("{}...", "a".repeat(DESCRIPTION_LIMIT))
        );
        assert!(exceeds(&over, DESCRIPTION_LIMIT));
    }
}

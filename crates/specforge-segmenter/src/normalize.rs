//! Text normalization for extracted documents
//!
//! Datasheet text arrives from the PDF-to-text layer with hyphenation at
//! line breaks and uneven whitespace. These functions repair that before
//! any anchored search runs, and clean individual fragments after capture.

use regex::Regex;
use std::sync::LazyLock;

static HYPHEN_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\s*\n\s*").unwrap());
static TRAILING_BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());
static FOOTNOTE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").unwrap());
static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a whole document before segmentation.
///
/// Rejoins words hyphenated across line breaks, strips trailing spaces
/// from lines, and collapses runs of blank lines down to one.
///
/// # Examples
///
/// ```
/// use specforge_segmenter::normalize_document_text;
///
/// let raw = "Intel Core proces-\nsor with vPro";
/// assert_eq!(normalize_document_text(raw), "Intel Core processor with vPro");
/// ```
pub fn normalize_document_text(text: &str) -> String {
    let text = HYPHEN_BREAK.replace_all(text, "");
    let text = TRAILING_BLANKS.replace_all(&text, "\n");
    BLANK_RUNS.replace_all(&text, "\n\n").into_owned()
}

/// Clean a captured fragment for storage.
///
/// Removes footnote markers like `[3]`, collapses inner whitespace to
/// single spaces, and trims. Empty input stays empty.
pub fn clean_fragment(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = FOOTNOTE_MARKER.replace_all(text, "");
    WHITESPACE_RUNS.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenation_repair() {
        let raw = "inte-\n  grated graphics";
        assert_eq!(normalize_document_text(raw), "integrated graphics");
    }

    #[test]
    fn test_blank_line_collapse() {
        let raw = "Processor   \n\n\n\nMemory";
        assert_eq!(normalize_document_text(raw), "Processor\n\nMemory");
    }

    #[test]
    fn test_clean_fragment_footnotes_and_whitespace() {
        assert_eq!(
            clean_fragment("  100%   sRGB[3]  color\tgamut "),
            "100% sRGB color gamut"
        );
        assert_eq!(clean_fragment(""), "");
    }
}

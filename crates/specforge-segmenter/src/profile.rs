//! Segmentation profile trait and window helpers
//!
//! A profile knows the layout of one datasheet family. Segmentation is
//! anchored window search: locate a section heading, slice forward to the
//! next heading (or end of text), then run sub-patterns inside the slice.
//! A missing section yields zero triples rather than an error.

use regex::Regex;
use specforge_domain::RawSpecification;

/// Layout knowledge for one datasheet family.
///
/// Implementations must be pure: the same input text always yields the
/// same triples in the same order.
pub trait ExtractorProfile {
    /// Human-readable profile name for logging
    fn name(&self) -> &'static str;

    /// Segment normalized document text into raw specification triples.
    fn extract(&self, text: &str) -> Vec<RawSpecification>;
}

/// Slice from the start of the first `anchor` match up to (not including)
/// the first `end` match after it. Runs to end of text when `end` never
/// matches. `None` when the anchor is absent.
pub(crate) fn section<'a>(text: &'a str, anchor: &Regex, end: &Regex) -> Option<&'a str> {
    let found = anchor.find(text)?;
    let rest = &text[found.start()..];
    let anchor_len = found.end() - found.start();
    let stop = end
        .find(&rest[anchor_len..])
        .map(|m| anchor_len + m.start())
        .unwrap_or(rest.len());
    Some(&rest[..stop])
}

/// Like [`section`], but the slice starts after the anchor match. Used
/// where the heading itself would pollute line-splitting sub-patterns.
pub(crate) fn section_body<'a>(text: &'a str, anchor: &Regex, end: &Regex) -> Option<&'a str> {
    let found = anchor.find(text)?;
    let rest = &text[found.end()..];
    let stop = end.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    Some(&rest[..stop])
}

/// Fixed-size byte window starting at `start`, clamped back to a char
/// boundary so multi-byte marks like ® never split.
pub(crate) fn byte_window(text: &str, start: usize, len: usize) -> &str {
    let mut stop = (start + len).min(text.len());
    while !text.is_char_boundary(stop) {
        stop -= 1;
    }
    &text[start..stop]
}

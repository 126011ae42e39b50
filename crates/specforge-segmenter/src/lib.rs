//! Specforge Text Segmenter
//!
//! Turns normalized datasheet text into raw specification triples
//! (category, name, value). Segmentation is profile-driven: each
//! supported datasheet family implements [`ExtractorProfile`] with its
//! own anchored window search. Segmentation never touches the network
//! or a database and is fully deterministic.
//!
//! # Examples
//!
//! ```
//! use specforge_segmenter::{ExtractorProfile, ThinkPadProfile};
//!
//! let text = "Battery\n57Wh Rechargeable Li-ion Battery\nPower Adapter";
//! let specs = ThinkPadProfile.extract(text);
//! assert_eq!(specs[0].specification_name, "Battery Option");
//! ```

#![warn(missing_docs)]

mod normalize;
mod probook;
mod profile;
mod thinkpad;

pub use normalize::{clean_fragment, normalize_document_text};
pub use probook::ProBookProfile;
pub use profile::ExtractorProfile;
pub use thinkpad::ThinkPadProfile;

/// Look up a profile by datasheet family name.
///
/// Returns `None` for unknown names; callers decide whether that is an
/// error or a skip.
pub fn profile_for(name: &str) -> Option<Box<dyn ExtractorProfile + Send + Sync>> {
    match name.to_ascii_lowercase().as_str() {
        "thinkpad" => Some(Box::new(ThinkPadProfile)),
        "probook" | "hp" => Some(Box::new(ProBookProfile)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_for_known_names() {
        assert!(profile_for("thinkpad").is_some());
        assert!(profile_for("ProBook").is_some());
        assert!(profile_for("hp").is_some());
        assert!(profile_for("chromebook").is_none());
    }
}

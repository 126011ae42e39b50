//! Specification categories
//!
//! A category names the coarse domain a specification belongs to. The set
//! of known categories is fixed (one per extraction template), but inputs
//! are open strings, so unknown names are preserved rather than rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The coarse domain a specification belongs to.
///
/// The eight known variants correspond one-to-one with the extraction
/// templates in the schema registry. Anything else parses to
/// `Other(original)` so the raw label survives round-trips through storage.
///
/// # Examples
///
/// ```
/// use specforge_domain::Category;
///
/// assert_eq!(Category::parse("Processor"), Category::Processor);
/// assert_eq!(Category::parse("battery"), Category::Battery);
/// assert_eq!(Category::parse("CPU type"), Category::Other("CPU type".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// CPU specifications (cores, threads, frequencies, cache)
    Processor,
    /// Panel specifications (size, resolution, refresh rate)
    Display,
    /// RAM specifications (capacity, type, slots)
    Memory,
    /// Drive specifications (capacity, form factor, interface)
    Storage,
    /// GPU specifications (model, VRAM)
    Graphics,
    /// Dimensions and weight
    Physical,
    /// Battery capacity, chemistry and life tests
    Battery,
    /// Wireless, ports and networking
    Connectivity,
    /// Any category name outside the known set
    Other(String),
}

impl Category {
    /// All known categories, in registry order.
    pub const KNOWN: [Category; 8] = [
        Category::Processor,
        Category::Display,
        Category::Memory,
        Category::Storage,
        Category::Graphics,
        Category::Physical,
        Category::Battery,
        Category::Connectivity,
    ];

    /// Parse a category name, case-insensitively.
    ///
    /// Unknown names are preserved verbatim in `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "processor" => Category::Processor,
            "display" => Category::Display,
            "memory" => Category::Memory,
            "storage" => Category::Storage,
            "graphics" => Category::Graphics,
            "physical" => Category::Physical,
            "battery" => Category::Battery,
            "connectivity" => Category::Connectivity,
            _ => Category::Other(s.to_string()),
        }
    }

    /// Canonical name for this category.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Processor => "Processor",
            Category::Display => "Display",
            Category::Memory => "Memory",
            Category::Storage => "Storage",
            Category::Graphics => "Graphics",
            Category::Physical => "Physical",
            Category::Battery => "Battery",
            Category::Connectivity => "Connectivity",
            Category::Other(name) => name,
        }
    }

    /// Whether this is one of the eight registry-backed categories.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::parse(&s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        for category in Category::KNOWN {
            assert_eq!(Category::parse(category.as_str()), category);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("PROCESSOR"), Category::Processor);
        assert_eq!(Category::parse("  display "), Category::Display);
    }

    #[test]
    fn test_unknown_category_preserved() {
        let category = Category::parse("CPU type");
        assert_eq!(category, Category::Other("CPU type".to_string()));
        assert_eq!(category.as_str(), "CPU type");
        assert!(!category.is_known());
    }

    #[test]
    fn test_string_round_trip() {
        let original = Category::Battery;
        let as_string: String = original.clone().into();
        assert_eq!(Category::from(as_string), original);
    }
}

//! Specification and laptop records

use crate::{Category, StructuredValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a laptop row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LaptopId(pub i64);

/// Identifier of a specification row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpecId(pub i64);

impl fmt::Display for LaptopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An identifiable product owning specifications.
///
/// Identity (brand + model + variant) is immutable after creation. The
/// normalization pipeline never creates or deletes laptops; it only reads
/// `id` for attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Laptop {
    /// Row identifier
    pub id: LaptopId,
    /// Manufacturer, e.g. "Lenovo"
    pub brand: String,
    /// Model line, e.g. "ThinkPad E14 Gen 5"
    pub model: String,
    /// Variant within the line, e.g. "Intel"
    pub variant: Option<String>,
}

impl Laptop {
    /// Human-readable full model name.
    pub fn full_model_name(&self) -> String {
        match &self.variant {
            Some(variant) => format!("{} {} ({})", self.brand, self.model, variant),
            None => format!("{} {}", self.brand, self.model),
        }
    }
}

/// One stored (name, value) fact about a laptop.
///
/// `specification_value` is the raw text exactly as extracted from the
/// source document. It is authoritative and never overwritten; only
/// `structured_value` is mutated by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    /// Row identifier
    pub id: SpecId,
    /// Owning laptop
    pub laptop_id: LaptopId,
    /// Coarse domain of this fact
    pub category: Category,
    /// Derived name, e.g. "Intel Core i7-1355U - Frequencies"
    pub specification_name: String,
    /// Raw text from the source document
    pub specification_value: String,
    /// Optional unit label recorded at ingestion time
    pub unit: Option<String>,
    /// Normalized payload, absent until the pipeline processes the row
    pub structured_value: Option<StructuredValue>,
}

/// A raw triple produced by the text segmenter, before attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSpecification {
    /// Coarse domain of this fact
    pub category: Category,
    /// Derived name of the form "<entity> - <field>"
    pub specification_name: String,
    /// Raw text window content
    pub specification_value: String,
}

impl RawSpecification {
    /// Convenience constructor used heavily by segmenter profiles.
    pub fn new(
        category: Category,
        specification_name: impl Into<String>,
        specification_value: impl Into<String>,
    ) -> Self {
        Self {
            category,
            specification_name: specification_name.into(),
            specification_value: specification_value.into(),
        }
    }
}

/// Insert shape for a specification row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpecification {
    /// Coarse domain of this fact
    pub category: Category,
    /// Derived name
    pub specification_name: String,
    /// Raw text value
    pub specification_value: String,
    /// Optional unit label
    pub unit: Option<String>,
}

impl From<RawSpecification> for NewSpecification {
    fn from(raw: RawSpecification) -> Self {
        Self {
            category: raw.category,
            specification_name: raw.specification_name,
            specification_value: raw.specification_value,
            unit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_model_name_with_variant() {
        let laptop = Laptop {
            id: LaptopId(1),
            brand: "Lenovo".to_string(),
            model: "ThinkPad E14 Gen 5".to_string(),
            variant: Some("Intel".to_string()),
        };
        assert_eq!(laptop.full_model_name(), "Lenovo ThinkPad E14 Gen 5 (Intel)");
    }

    #[test]
    fn test_full_model_name_without_variant() {
        let laptop = Laptop {
            id: LaptopId(2),
            brand: "HP".to_string(),
            model: "ProBook 450 G10".to_string(),
            variant: None,
        };
        assert_eq!(laptop.full_model_name(), "HP ProBook 450 G10");
    }

    #[test]
    fn test_raw_to_new_specification() {
        let raw = RawSpecification::new(Category::Battery, "Battery Option", "47Wh Li-ion");
        let new_spec = NewSpecification::from(raw.clone());
        assert_eq!(new_spec.category, raw.category);
        assert_eq!(new_spec.specification_name, "Battery Option");
        assert_eq!(new_spec.unit, None);
    }
}

//! Category schema registry
//!
//! Maps a specification's category onto the prompt template and required
//! output fields for that category. Lookup is exact on the eight known
//! categories, with a case-insensitive substring fallback against the
//! specification name and the raw category string for anything else.

use crate::prompt;
use specforge_domain::Category;
use std::sync::LazyLock;

/// Extraction template for one category.
#[derive(Debug, Clone)]
pub struct Template {
    /// Category this template produces records for
    pub category: Category,
    /// Fields the model is asked to emit
    pub fields: &'static [&'static str],
    /// User-prompt instructions with `{spec_name}`/`{raw_value}` slots
    pub instructions: &'static str,
}

static TEMPLATES: LazyLock<Vec<Template>> = LazyLock::new(|| {
    vec![
        Template {
            category: Category::Processor,
            fields: &[
                "model",
                "brand",
                "cores",
                "threads",
                "base_frequency_ghz",
                "max_frequency_ghz",
                "cache_mb",
                "integrated_graphics",
            ],
            instructions: prompt::PROCESSOR,
        },
        Template {
            category: Category::Display,
            fields: &[
                "diagonal_size_inches",
                "resolution",
                "panel_type",
                "brightness_nits",
                "color_gamut_percent",
                "color_space",
                "is_touchscreen",
                "aspect_ratio",
                "refresh_rate_hz",
            ],
            instructions: prompt::DISPLAY,
        },
        Template {
            category: Category::Memory,
            fields: &[
                "max_capacity_gb",
                "memory_type",
                "slots_total",
                "slots_available",
                "is_dual_channel",
                "soldered_amount_gb",
            ],
            instructions: prompt::MEMORY,
        },
        Template {
            category: Category::Storage,
            fields: &["capacity_gb", "form_factor", "interface", "type", "security"],
            instructions: prompt::STORAGE,
        },
        Template {
            category: Category::Graphics,
            fields: &["model", "type", "memory_gb", "brand"],
            instructions: prompt::GRAPHICS,
        },
        Template {
            category: Category::Physical,
            fields: &[
                "weight_kg",
                "weight_lbs",
                "dimensions_mm",
                "dimensions_inches",
            ],
            instructions: prompt::PHYSICAL,
        },
        Template {
            category: Category::Battery,
            fields: &[
                "capacity_wh",
                "chemistry",
                "cells",
                "rapid_charge",
                "battery_life_hours",
                "test_results",
            ],
            instructions: prompt::BATTERY,
        },
        Template {
            category: Category::Connectivity,
            fields: &[
                "wifi_standard",
                "bluetooth_version",
                "ethernet",
                "ports",
                "wireless_wan",
            ],
            instructions: prompt::CONNECTIVITY,
        },
    ]
});

/// Registry of extraction templates for the known categories.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaRegistry;

impl SchemaRegistry {
    /// Create a registry.
    pub fn new() -> Self {
        SchemaRegistry
    }

    /// Resolve a template for a record.
    ///
    /// Exact match on known categories first. Otherwise scans the template
    /// names for a case-insensitive substring hit against the specification
    /// name or the category string, so records filed under labels like
    /// "Display Panel" still resolve. `None` means the record cannot be
    /// structured.
    pub fn lookup(
        &self,
        category: &Category,
        specification_name: &str,
    ) -> Option<&'static Template> {
        if let Some(template) = TEMPLATES.iter().find(|t| t.category == *category) {
            return Some(template);
        }

        let name_lower = specification_name.to_lowercase();
        let category_lower = category.as_str().to_lowercase();
        TEMPLATES.iter().find(|t| {
            let key = t.category.as_str().to_lowercase();
            name_lower.contains(&key) || category_lower.contains(&key)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_for_known_categories() {
        let registry = SchemaRegistry::new();
        for category in Category::KNOWN {
            let template = registry.lookup(&category, "anything");
            assert!(template.is_some(), "no template for {}", category);
            assert_eq!(template.unwrap().category, category);
        }
    }

    #[test]
    fn test_fallback_via_category_substring() {
        let registry = SchemaRegistry::new();
        let category = Category::Other("Display Panel".to_string());
        let template = registry.lookup(&category, "Panel Option 1").unwrap();
        assert_eq!(template.category, Category::Display);
    }

    #[test]
    fn test_fallback_via_specification_name() {
        let registry = SchemaRegistry::new();
        let category = Category::Other("Misc".to_string());
        let template = registry.lookup(&category, "Rear Battery Pack").unwrap();
        assert_eq!(template.category, Category::Battery);
    }

    #[test]
    fn test_fallback_is_case_insensitive() {
        let registry = SchemaRegistry::new();
        let category = Category::Other("misc".to_string());
        let template = registry.lookup(&category, "MEMORY upgrade kit").unwrap();
        assert_eq!(template.category, Category::Memory);
    }

    #[test]
    fn test_no_match_yields_none() {
        let registry = SchemaRegistry::new();
        let category = Category::Other("Warranty".to_string());
        assert!(registry.lookup(&category, "Service Plan").is_none());
    }

    #[test]
    fn test_templates_cover_required_fields() {
        let registry = SchemaRegistry::new();
        let template = registry
            .lookup(&Category::Battery, "Battery Option")
            .unwrap();
        assert!(template.fields.contains(&"test_results"));
        assert!(template.instructions.contains("{raw_value}"));
    }
}

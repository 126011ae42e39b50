//! Typed structured-value payloads
//!
//! The normalization pipeline turns free-text specification values into one
//! of these records. Instead of an untyped JSON mapping, the payload is a
//! tagged union keyed by category: each variant is a fixed record whose
//! fields mirror that category's extraction template, with an extra-fields
//! bag so unknown keys from the model are tolerated rather than dropped.
//!
//! Serialization stays flat (the inner object only); the category column in
//! storage is the tag, which keeps structured fields queryable as plain
//! key/value pairs per category downstream.

use crate::Category;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A payload that may describe one instance or several.
///
/// A single text fragment sometimes covers multiple displays or storage
/// options; those serialize as an array of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single instance
    One(T),
    /// Multiple instances described by one fragment
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Iterate over the contained records.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item).iter(),
            OneOrMany::Many(items) => items.iter(),
        }
    }

    /// Mutably iterate over the contained records.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        match self {
            OneOrMany::One(item) => std::slice::from_mut(item).iter_mut(),
            OneOrMany::Many(items) => items.iter_mut(),
        }
    }
}

/// Storage capacity: a single size or an ordered configurable range.
///
/// Ranges like "512 GB up to 1 TB" become `[512.0, 1000.0]` — terabytes are
/// always expressed in decimal gigabytes (1 TB = 1000 GB).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StorageCapacity {
    /// One fixed capacity in GB
    Single(f64),
    /// Ordered [low, high] range in GB
    Range(Vec<f64>),
}

/// One battery benchmark result, nested inside its battery record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Benchmark name, e.g. "MobileMark 2018"
    pub test_name: String,
    /// Measured runtime in hours
    pub hours: f64,
}

/// Width/depth/height triple in one unit system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionsSpec {
    /// Width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Depth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Processor extraction record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessorSpec {
    /// Full processor name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// "Intel" or "AMD"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Total core count (P-cores + E-cores for hybrid parts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores: Option<u32>,
    /// Total thread count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<u32>,
    /// Lowest base frequency mentioned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_frequency_ghz: Option<f64>,
    /// Highest turbo/boost frequency mentioned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_frequency_ghz: Option<f64>,
    /// Total cache in MB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_mb: Option<f64>,
    /// Integrated GPU model, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrated_graphics: Option<String>,
    /// Unknown keys from the model, preserved verbatim
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Display extraction record (one panel).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplaySpec {
    /// Diagonal size in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagonal_size_inches: Option<f64>,
    /// Resolution like "1920x1080"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Panel technology (IPS, OLED, TN, VA, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_type: Option<String>,
    /// Brightness in nits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness_nits: Option<f64>,
    /// Color gamut coverage as a bare number ("45% NTSC" -> 45)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_gamut_percent: Option<f64>,
    /// Color space the gamut refers to (NTSC, sRGB, DCI-P3, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_space: Option<String>,
    /// Touch support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_touchscreen: Option<bool>,
    /// Aspect ratio like "16:10"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    /// Refresh rate; defaults to 60 when the source is silent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_rate_hz: Option<u32>,
    /// Unknown keys from the model, preserved verbatim
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Memory extraction record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemorySpec {
    /// Maximum capacity in GB (soldered + socketed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity_gb: Option<f64>,
    /// Memory type like "DDR5-5600"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    /// Physical slot count (socketed portion only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots_total: Option<u32>,
    /// Upgradeable slot count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots_available: Option<u32>,
    /// Dual-channel operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dual_channel: Option<bool>,
    /// RAM soldered to the motherboard, in GB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soldered_amount_gb: Option<f64>,
    /// Unknown keys from the model, preserved verbatim
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Storage extraction record (one drive option).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StorageSpec {
    /// Capacity in decimal GB, single value or [low, high] range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_gb: Option<StorageCapacity>,
    /// Form factor like "M.2 2280"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<String>,
    /// Interface like "PCIe Gen4x4 NVMe"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    /// "SSD" or "HDD"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    /// Drive security like "Opal 2.0"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    /// Unknown keys from the model, preserved verbatim
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Graphics extraction record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphicsSpec {
    /// Full graphics name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// "Integrated" or "Discrete"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,
    /// VRAM in GB for discrete GPUs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_gb: Option<f64>,
    /// "Intel", "AMD" or "NVIDIA"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Unknown keys from the model, preserved verbatim
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Physical extraction record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhysicalSpec {
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Weight in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_lbs: Option<f64>,
    /// Dimensions in millimeters (centimeter sources are converted, x10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions_mm: Option<DimensionsSpec>,
    /// Dimensions in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions_inches: Option<DimensionsSpec>,
    /// Unknown keys from the model, preserved verbatim
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Battery extraction record.
///
/// Benchmark results are nested here as `test_results`, never as sibling
/// top-level records; the consolidation pass enforces this for fragments
/// that were ingested separately.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatterySpec {
    /// Capacity in watt-hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_wh: Option<f64>,
    /// Chemistry like "Li-ion"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemistry: Option<String>,
    /// Cell count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<u32>,
    /// Rapid-charge support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rapid_charge: Option<bool>,
    /// Typical usage hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_life_hours: Option<f64>,
    /// Named benchmark results
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_results: Vec<TestResult>,
    /// Unknown keys from the model, preserved verbatim
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl BatterySpec {
    /// Whether a benchmark with this name is already recorded.
    pub fn has_test(&self, test_name: &str) -> bool {
        self.test_results.iter().any(|t| t.test_name == test_name)
    }
}

/// Connectivity extraction record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectivitySpec {
    /// Wi-Fi standard like "Wi-Fi 6E"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_standard: Option<String>,
    /// Bluetooth version like "5.3"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluetooth_version: Option<String>,
    /// Wired ethernet present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethernet: Option<bool>,
    /// Port descriptions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    /// Cellular (LTE/5G) capability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wireless_wan: Option<bool>,
    /// Unknown keys from the model, preserved verbatim
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Normalized representation of a specification's raw text.
///
/// Tagged union keyed by category. The JSON form is the inner record alone
/// (or an array of records); the category is carried by the owning
/// `Specification`, so `decode` needs it back to pick the variant.
///
/// # Examples
///
/// ```
/// use specforge_domain::{Category, StructuredValue};
///
/// let json = serde_json::json!({"capacity_wh": 47.0, "chemistry": "Li-ion"});
/// let value = StructuredValue::decode(&Category::Battery, json).unwrap();
/// assert!(matches!(value, StructuredValue::Battery(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredValue {
    /// Processor record
    Processor(ProcessorSpec),
    /// One or more display panels
    Display(OneOrMany<DisplaySpec>),
    /// Memory record
    Memory(MemorySpec),
    /// One or more storage options
    Storage(OneOrMany<StorageSpec>),
    /// Graphics record
    Graphics(GraphicsSpec),
    /// Physical record
    Physical(PhysicalSpec),
    /// Battery record
    Battery(BatterySpec),
    /// Connectivity record
    Connectivity(ConnectivitySpec),
}

impl StructuredValue {
    /// Category tag for this payload.
    pub fn category(&self) -> Category {
        match self {
            StructuredValue::Processor(_) => Category::Processor,
            StructuredValue::Display(_) => Category::Display,
            StructuredValue::Memory(_) => Category::Memory,
            StructuredValue::Storage(_) => Category::Storage,
            StructuredValue::Graphics(_) => Category::Graphics,
            StructuredValue::Physical(_) => Category::Physical,
            StructuredValue::Battery(_) => Category::Battery,
            StructuredValue::Connectivity(_) => Category::Connectivity,
        }
    }

    /// Decode a flat JSON payload into the variant the category names.
    ///
    /// Returns an error for `Other` categories or when the payload does not
    /// match the category's record shape.
    pub fn decode(category: &Category, value: Value) -> Result<Self, serde_json::Error> {
        match category {
            Category::Processor => serde_json::from_value(value).map(StructuredValue::Processor),
            Category::Display => serde_json::from_value(value).map(StructuredValue::Display),
            Category::Memory => serde_json::from_value(value).map(StructuredValue::Memory),
            Category::Storage => serde_json::from_value(value).map(StructuredValue::Storage),
            Category::Graphics => serde_json::from_value(value).map(StructuredValue::Graphics),
            Category::Physical => serde_json::from_value(value).map(StructuredValue::Physical),
            Category::Battery => serde_json::from_value(value).map(StructuredValue::Battery),
            Category::Connectivity => {
                serde_json::from_value(value).map(StructuredValue::Connectivity)
            }
            Category::Other(name) => Err(serde::de::Error::custom(format!(
                "no structured form for category '{}'",
                name
            ))),
        }
    }

    /// Encode the payload to its flat JSON form.
    pub fn encode(&self) -> Result<Value, serde_json::Error> {
        match self {
            StructuredValue::Processor(v) => serde_json::to_value(v),
            StructuredValue::Display(v) => serde_json::to_value(v),
            StructuredValue::Memory(v) => serde_json::to_value(v),
            StructuredValue::Storage(v) => serde_json::to_value(v),
            StructuredValue::Graphics(v) => serde_json::to_value(v),
            StructuredValue::Physical(v) => serde_json::to_value(v),
            StructuredValue::Battery(v) => serde_json::to_value(v),
            StructuredValue::Connectivity(v) => serde_json::to_value(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_battery() {
        let value = StructuredValue::decode(
            &Category::Battery,
            json!({"capacity_wh": 47.0, "chemistry": "Li-ion", "cells": 3}),
        )
        .unwrap();

        match value {
            StructuredValue::Battery(battery) => {
                assert_eq!(battery.capacity_wh, Some(47.0));
                assert_eq!(battery.chemistry.as_deref(), Some("Li-ion"));
                assert_eq!(battery.cells, Some(3));
                assert!(battery.test_results.is_empty());
            }
            other => panic!("expected Battery, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_display_array() {
        let value = StructuredValue::decode(
            &Category::Display,
            json!([
                {"resolution": "1920x1080", "refresh_rate_hz": 60},
                {"resolution": "2560x1600", "refresh_rate_hz": 120}
            ]),
        )
        .unwrap();

        match value {
            StructuredValue::Display(OneOrMany::Many(panels)) => {
                assert_eq!(panels.len(), 2);
                assert_eq!(panels[1].refresh_rate_hz, Some(120));
            }
            other => panic!("expected multiple displays, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_storage_range() {
        let value = StructuredValue::decode(
            &Category::Storage,
            json!({"capacity_gb": [512, 1000], "type": "SSD"}),
        )
        .unwrap();

        match value {
            StructuredValue::Storage(OneOrMany::One(storage)) => {
                assert_eq!(
                    storage.capacity_gb,
                    Some(StorageCapacity::Range(vec![512.0, 1000.0]))
                );
                assert_eq!(storage.storage_type.as_deref(), Some("SSD"));
            }
            other => panic!("expected single storage option, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_keys_preserved_in_extra() {
        let value = StructuredValue::decode(
            &Category::Processor,
            json!({"model": "Core i7-1355U", "lithography_nm": 10}),
        )
        .unwrap();

        match value {
            StructuredValue::Processor(processor) => {
                assert_eq!(processor.model.as_deref(), Some("Core i7-1355U"));
                assert_eq!(processor.extra.get("lithography_nm"), Some(&json!(10)));
            }
            other => panic!("expected Processor, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_other_category_fails() {
        let result = StructuredValue::decode(
            &Category::Other("CPU type".to_string()),
            json!({"model": "x"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_round_trip() {
        let original = StructuredValue::Battery(BatterySpec {
            capacity_wh: Some(57.0),
            chemistry: Some("Li-Po".to_string()),
            test_results: vec![TestResult {
                test_name: "JEITA 3.0".to_string(),
                hours: 9.5,
            }],
            ..Default::default()
        });

        let encoded = original.encode().unwrap();
        let decoded = StructuredValue::decode(&Category::Battery, encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_has_test() {
        let battery = BatterySpec {
            test_results: vec![TestResult {
                test_name: "MobileMark 2018".to_string(),
                hours: 11.2,
            }],
            ..Default::default()
        };
        assert!(battery.has_test("MobileMark 2018"));
        assert!(!battery.has_test("JEITA 3.0"));
    }
}

//! HP ProBook datasheet profile
//!
//! HP QuickSpecs-style sheets carry everything in one "Technical
//! specifications" block terminated by "Footnotes". Fields are
//! label-prefixed runs of lines, so most sections slice between labels
//! and split the body on newlines or semicolons.

use crate::normalize::clean_fragment;
use crate::profile::ExtractorProfile;
use regex::Regex;
use specforge_domain::{Category, RawSpecification};
use std::sync::LazyLock;
use tracing::warn;

static TECH_SPECS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)Technical specifications(.*?)(?:Footnotes|$)").unwrap());
static PROCESSOR_FAMILY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)Processor family\s+(.*?)Available Processors").unwrap());
static AVAILABLE_PROCESSORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)Available Processors(.*?)(?:Maximum memory|Memory slots)").unwrap()
});
static PROCESSOR_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Intel® Core™[^(]+)\s+\(([^)]+)\)").unwrap());
static MAXIMUM_MEMORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)Maximum memory\s+(.+?)Memory slots").unwrap());
static MEMORY_SLOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)Memory slots\s+(.+?)Internal storage").unwrap());
static INTERNAL_STORAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)Internal storage\s+(.*?)(?:Display size|Display)").unwrap()
});
static DISPLAY_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)Display size \(diagonal, metric\)\s+(.+?)Display").unwrap()
});
static DISPLAY_OPTIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)Display\s+(.*?)(?:Available Graphics|Audio)").unwrap());
static AVAILABLE_GRAPHICS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)Available Graphics\s+(.*?)(?:Audio|Ports)").unwrap());
static PORTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)Ports and connectors\s+(.*?)(?:Input devices|Communications)").unwrap()
});
static COMMUNICATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)Communications\s+(.*?)(?:Camera|Software)").unwrap());
static DIMENSIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)Dimensions\s+(.*?)Weight").unwrap());
static WEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)Weight\s+(.*?)(?:Ecolabels|Energy star)").unwrap());

/// Profile for HP ProBook datasheets.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProBookProfile;

impl ExtractorProfile for ProBookProfile {
    fn name(&self) -> &'static str {
        "probook"
    }

    fn extract(&self, text: &str) -> Vec<RawSpecification> {
        let Some(caps) = TECH_SPECS.captures(text) else {
            warn!("no technical specifications section found");
            return Vec::new();
        };
        let body = caps.get(1).map(|m| m.as_str()).unwrap_or("");

        let mut specs = Vec::new();
        self.processor_specs(body, &mut specs);
        self.memory_specs(body, &mut specs);
        self.storage_specs(body, &mut specs);
        self.display_specs(body, &mut specs);
        self.graphics_specs(body, &mut specs);
        self.connectivity_specs(body, &mut specs);
        self.physical_specs(body, &mut specs);
        specs
    }
}

impl ProBookProfile {
    fn processor_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        if let Some(caps) = PROCESSOR_FAMILY.captures(text) {
            for family in caps[1].lines() {
                let family = family.trim();
                if !family.is_empty() {
                    specs.push(RawSpecification::new(
                        Category::Processor,
                        "Processor Family",
                        clean_fragment(family),
                    ));
                }
            }
        }

        if let Some(caps) = AVAILABLE_PROCESSORS.captures(text) {
            let body = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            for entry in PROCESSOR_ENTRY.captures_iter(body) {
                specs.push(RawSpecification::new(
                    Category::Processor,
                    clean_fragment(&entry[1]),
                    clean_fragment(&entry[2]),
                ));
            }
        }
    }

    fn memory_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        if let Some(caps) = MAXIMUM_MEMORY.captures(text) {
            specs.push(RawSpecification::new(
                Category::Memory,
                "Maximum Memory",
                clean_fragment(&caps[1]),
            ));
        }
        if let Some(caps) = MEMORY_SLOTS.captures(text) {
            specs.push(RawSpecification::new(
                Category::Memory,
                "Memory Slots",
                clean_fragment(&caps[1]),
            ));
        }
    }

    fn storage_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        let Some(caps) = INTERNAL_STORAGE.captures(text) else {
            return;
        };
        for line in caps[1].lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.contains("SSD") || line.contains("GB") || line.contains("TB") {
                specs.push(RawSpecification::new(
                    Category::Storage,
                    "Storage Option",
                    clean_fragment(line),
                ));
            }
        }
    }

    fn display_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        if let Some(caps) = DISPLAY_SIZE.captures(text) {
            specs.push(RawSpecification::new(
                Category::Display,
                "Display Size",
                clean_fragment(&caps[1]),
            ));
        }

        // Guard against a "size " prefix directly before the label.
        for caps in DISPLAY_OPTIONS.captures_iter(text) {
            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            if text[..start].ends_with("size ") {
                continue;
            }
            let mut index = 0;
            for option in caps[1].split(';') {
                let option = option.trim();
                if !option.is_empty() {
                    index += 1;
                    specs.push(RawSpecification::new(
                        Category::Display,
                        format!("Display Option {}", index),
                        clean_fragment(option),
                    ));
                }
            }
        }
    }

    fn graphics_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        let Some(caps) = AVAILABLE_GRAPHICS.captures(text) else {
            return;
        };
        for line in caps[1].lines() {
            let line = line.trim();
            if !line.is_empty() && (line.contains("Graphics") || line.contains("GPU")) {
                specs.push(RawSpecification::new(
                    Category::Graphics,
                    "Graphics Option",
                    clean_fragment(line),
                ));
            }
        }
    }

    fn connectivity_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        if let Some(caps) = PORTS.captures(text) {
            specs.push(RawSpecification::new(
                Category::Connectivity,
                "Ports and Connectors",
                clean_fragment(&caps[1]),
            ));
        }
        if let Some(caps) = COMMUNICATIONS.captures(text) {
            specs.push(RawSpecification::new(
                Category::Connectivity,
                "Communications",
                clean_fragment(&caps[1]),
            ));
        }
    }

    fn physical_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        if let Some(caps) = DIMENSIONS.captures(text) {
            specs.push(RawSpecification::new(
                Category::Physical,
                "Dimensions",
                clean_fragment(&caps[1]),
            ));
        }
        if let Some(caps) = WEIGHT.captures(text) {
            specs.push(RawSpecification::new(
                Category::Physical,
                "Weight",
                clean_fragment(&caps[1]),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
HP ProBook 440 G11
Technical specifications
Processor family
Intel® Core™ Ultra 7 processor
Intel® Core™ Ultra 5 processor
Available Processors
Intel® Core™ Ultra 7 155H (up to 4.8 GHz with Intel® Turbo Boost Technology, 24 MB L3 cache, 16 cores, 22 threads)
Intel® Core™ Ultra 5 125H (up to 4.5 GHz with Intel® Turbo Boost Technology, 18 MB L3 cache, 14 cores, 18 threads)
Maximum memory
32 GB DDR5-5600 MHz RAM
Memory slots
2 SODIMM
Internal storage
256 GB up to 512 GB PCIe NVMe SSD
512 GB up to 1 TB PCIe NVMe TLC SSD
Display size (diagonal, metric)
35.6 cm (14\")
Display
35.6 cm (14\") diagonal, WUXGA (1920 x 1200), IPS, anti-glare, 300 nits, 45% NTSC; 35.6 cm (14\") diagonal, WUXGA (1920 x 1200), touch, IPS, 300 nits
Available Graphics
Integrated: Intel® Arc™ Graphics
Audio
Dual stereo speakers
Ports and connectors
2 USB Type-C®; 2 USB Type-A; 1 HDMI 2.1; 1 headphone/microphone combo
Input devices
Backlit keyboard
Communications
Intel® Wi-Fi 6E AX211 + Bluetooth® 5.3
Camera
720p HD camera
Dimensions
31.39 x 22.5 x 1.99 cm
Weight
Starting at 1.38 kg
Ecolabels
EPEAT® Gold
Footnotes
[1] Not all features are available.
";

    #[test]
    fn test_processor_families_and_entries() {
        let specs = ProBookProfile.extract(SHEET);
        let families: Vec<_> = specs
            .iter()
            .filter(|s| s.specification_name == "Processor Family")
            .collect();
        assert_eq!(families.len(), 2);

        let entries: Vec<_> = specs
            .iter()
            .filter(|s| s.specification_name.starts_with("Intel® Core™ Ultra"))
            .collect();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].specification_value.contains("16 cores"));
    }

    #[test]
    fn test_storage_lines_become_options() {
        let specs = ProBookProfile.extract(SHEET);
        let storage: Vec<_> = specs
            .iter()
            .filter(|s| s.category == Category::Storage)
            .collect();
        assert_eq!(storage.len(), 2);
        assert_eq!(
            storage[0].specification_value,
            "256 GB up to 512 GB PCIe NVMe SSD"
        );
    }

    #[test]
    fn test_display_options_split_on_semicolons() {
        let specs = ProBookProfile.extract(SHEET);
        let options: Vec<_> = specs
            .iter()
            .filter(|s| s.specification_name.starts_with("Display Option"))
            .collect();
        assert_eq!(options.len(), 2);
        assert!(options[0].specification_value.contains("45% NTSC"));
        assert!(options[1].specification_value.contains("touch"));

        let size: Vec<_> = specs
            .iter()
            .filter(|s| s.specification_name == "Display Size")
            .collect();
        assert_eq!(size.len(), 1);
    }

    #[test]
    fn test_connectivity_and_physical() {
        let specs = ProBookProfile.extract(SHEET);

        let ports = specs
            .iter()
            .find(|s| s.specification_name == "Ports and Connectors")
            .unwrap();
        assert!(ports.specification_value.contains("HDMI 2.1"));

        let comms = specs
            .iter()
            .find(|s| s.specification_name == "Communications")
            .unwrap();
        assert!(comms.specification_value.contains("Wi-Fi 6E"));

        let weight = specs
            .iter()
            .find(|s| {
                s.category == Category::Physical && s.specification_name == "Weight"
            })
            .unwrap();
        assert_eq!(weight.specification_value, "Starting at 1.38 kg");
    }

    #[test]
    fn test_footnote_markers_stripped() {
        let specs = ProBookProfile.extract(SHEET);
        assert!(specs
            .iter()
            .all(|s| !s.specification_value.contains('[')));
    }

    #[test]
    fn test_missing_tech_specs_section() {
        let specs = ProBookProfile.extract("Marketing copy with no spec table.");
        assert!(specs.is_empty());
    }
}

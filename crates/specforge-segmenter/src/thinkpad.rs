//! ThinkPad datasheet profile
//!
//! Lenovo PSREF-style sheets run the categories in a fixed order
//! (Processor, Memory, Storage, Display, ports, physical, Battery), each
//! introduced by a heading. Processor rows cluster attributes near the
//! processor name, so that section uses a fixed-size window around each
//! name match instead of line splitting.

use crate::normalize::clean_fragment;
use crate::profile::{byte_window, section, ExtractorProfile};
use regex::Regex;
use specforge_domain::{Category, RawSpecification};
use std::sync::LazyLock;

/// Attribute search distance from a processor name match, in bytes.
const PROCESSOR_WINDOW: usize = 400;

static PROCESSOR_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bProcessor\b").unwrap());
static PROCESSOR_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:Operating System|Memory)\b").unwrap());
static PROCESSOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:Intel(?:®|\(R\))?\s+Core[^\n,;()]+|AMD\s+Ryzen[^\n,;()]+|Core\s+i[^\n,;()]+|Intel\s+Core\s+Ultra[^\n,;()]+)",
    )
    .unwrap()
});
static CORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:\([^)]*\))?\s*(?:cores?|P-core|E-core)").unwrap());
static THREADS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*threads?").unwrap());
static CACHE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+\s?MB(?:\s*L\d)?)").unwrap());
static FREQUENCIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)((?:\d+\.?\d*\s*GHz[^G]*){1,4})").unwrap());
static INTEGRATED_GRAPHICS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Intel[^\n,;]+Graphics|AMD[^\n,;]+Radeon[^\n,;]+|NVIDIA[^\n,;]+)").unwrap()
});

static MEMORY_ANCHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Memory").unwrap());
static MEMORY_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Storage").unwrap());
static MAX_MEMORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Up to (\d+GB)[^)]*\(([^)]+)\)").unwrap());
static MEMORY_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Memory Type\s+(DDR4-\d+)").unwrap());

static STORAGE_ANCHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Storage").unwrap());
static STORAGE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Removable Storage").unwrap());
static STORAGE_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)M\.2 (\d+) SSD.*?(\d+GB|\d+TB).*?(Opal 2\.0|-)").unwrap());

static DISPLAY_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Display\*\*").unwrap());
static DISPLAY_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Touchscreen").unwrap());
static DISPLAY_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"14"\s+(\S+)\s+(\S+)\s+(\S+)\s+(\d+nits)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\d+Hz)\s+([^\n]+)"#,
    )
    .unwrap()
});

static PORTS_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Standard Ports").unwrap());
static PORTS_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Notes:|Docking").unwrap());
static WLAN_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)WLAN \+ Bluetooth").unwrap());
static WLAN_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)WWAN").unwrap());

static DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Dimensions \(WxDxH\).*?(\d+\.?\d* x \d+\.?\d* x \d+\.?\d* mm)").unwrap()
});
static WEIGHT_ANCHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Weight").unwrap());
static WEIGHT_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Case Color").unwrap());
static WEIGHT_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Starting at ([\d.]+) kg \(([\d.]+) lbs\)").unwrap());

static BATTERY_ANCHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Battery").unwrap());
static BATTERY_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Power Adapter").unwrap());
static BATTERY_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+Wh) Rechargeable Li-ion Battery").unwrap());
static BATTERY_LIFE_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Battery Life").unwrap());
static BATTERY_LIFE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Notes:").unwrap());
static BATTERY_LIFE_RESULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(MobileMark® \d+|JEITA \d+\.\d+|Local video playbook): up to ([\d.]+) hr")
        .unwrap()
});

/// Profile for Lenovo ThinkPad specification sheets.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThinkPadProfile;

impl ExtractorProfile for ThinkPadProfile {
    fn name(&self) -> &'static str {
        "thinkpad"
    }

    fn extract(&self, text: &str) -> Vec<RawSpecification> {
        let mut specs = Vec::new();
        self.processor_specs(text, &mut specs);
        self.memory_specs(text, &mut specs);
        self.storage_specs(text, &mut specs);
        self.display_specs(text, &mut specs);
        self.connectivity_specs(text, &mut specs);
        self.physical_specs(text, &mut specs);
        self.battery_specs(text, &mut specs);
        specs
    }
}

impl ThinkPadProfile {
    fn processor_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        let Some(window) = section(text, &PROCESSOR_ANCHOR, &PROCESSOR_END) else {
            return;
        };

        for found in PROCESSOR_NAME.find_iter(window) {
            let processor_name = clean_fragment(found.as_str());
            let near = byte_window(window, found.start(), PROCESSOR_WINDOW);

            if let Some(caps) = CORES.captures(near) {
                specs.push(RawSpecification::new(
                    Category::Processor,
                    format!("{} - Cores", processor_name),
                    &caps[1],
                ));
            }
            if let Some(caps) = THREADS.captures(near) {
                specs.push(RawSpecification::new(
                    Category::Processor,
                    format!("{} - Threads", processor_name),
                    &caps[1],
                ));
            }
            if let Some(caps) = CACHE.captures(near) {
                specs.push(RawSpecification::new(
                    Category::Processor,
                    format!("{} - Cache", processor_name),
                    &caps[1],
                ));
            }
            if let Some(caps) = FREQUENCIES.captures(near) {
                specs.push(RawSpecification::new(
                    Category::Processor,
                    format!("{} - Frequencies", processor_name),
                    clean_fragment(&caps[1]),
                ));
            }
            if let Some(caps) = INTEGRATED_GRAPHICS.captures(near) {
                specs.push(RawSpecification::new(
                    Category::Graphics,
                    format!("{} - Integrated Graphics", processor_name),
                    clean_fragment(&caps[1]),
                ));
            }
        }
    }

    fn memory_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        let Some(window) = section(text, &MEMORY_ANCHOR, &MEMORY_END) else {
            return;
        };

        if let Some(caps) = MAX_MEMORY.captures(window) {
            specs.push(RawSpecification::new(
                Category::Memory,
                "Maximum Memory",
                &caps[1],
            ));
            specs.push(RawSpecification::new(
                Category::Memory,
                "Memory Configuration",
                clean_fragment(&caps[2]),
            ));
        }
        if let Some(caps) = MEMORY_TYPE.captures(window) {
            specs.push(RawSpecification::new(
                Category::Memory,
                "Memory Type",
                &caps[1],
            ));
        }
    }

    fn storage_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        let Some(window) = section(text, &STORAGE_ANCHOR, &STORAGE_END) else {
            return;
        };

        for caps in STORAGE_OPTION.captures_iter(window) {
            let form_factor = &caps[1];
            let capacity = &caps[2];
            let security = &caps[3];
            let value = if security == "-" {
                capacity.to_string()
            } else {
                format!("{} with {}", capacity, security)
            };
            specs.push(RawSpecification::new(
                Category::Storage,
                format!("M.2 {} Storage Option", form_factor),
                value,
            ));
        }
    }

    fn display_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        let Some(window) = section(text, &DISPLAY_ANCHOR, &DISPLAY_END) else {
            return;
        };

        for caps in DISPLAY_ROW.captures_iter(window) {
            let resolution = &caps[1];
            let touch = &caps[2];
            let panel_type = &caps[3];
            let brightness = &caps[4];
            let color_gamut = &caps[8];
            let display_name = format!("{} {}", resolution, touch);

            specs.push(RawSpecification::new(
                Category::Display,
                format!("{} - Resolution", display_name),
                resolution,
            ));
            specs.push(RawSpecification::new(
                Category::Display,
                format!("{} - Touch Support", display_name),
                touch,
            ));
            specs.push(RawSpecification::new(
                Category::Display,
                format!("{} - Panel Type", display_name),
                panel_type,
            ));
            specs.push(RawSpecification::new(
                Category::Display,
                format!("{} - Brightness", display_name),
                brightness,
            ));
            specs.push(RawSpecification::new(
                Category::Display,
                format!("{} - Color Gamut", display_name),
                clean_fragment(color_gamut),
            ));
        }
    }

    fn connectivity_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        if let Some(window) = crate::profile::section_body(text, &PORTS_ANCHOR, &PORTS_END) {
            for line in window.lines() {
                if !line.contains('•') {
                    continue;
                }
                let port = line.replace('•', "");
                let port = port.trim();
                if !port.is_empty() {
                    specs.push(RawSpecification::new(Category::Connectivity, "Port", port));
                }
            }
        }

        if let Some(window) = section(text, &WLAN_ANCHOR, &WLAN_END) {
            for line in window.lines() {
                if !line.contains('•') {
                    continue;
                }
                let option = line.replace('•', "");
                let option = option.trim();
                if !option.is_empty() && option.contains("Wi-Fi") {
                    specs.push(RawSpecification::new(
                        Category::Connectivity,
                        "Wireless Option",
                        clean_fragment(option),
                    ));
                }
            }
        }
    }

    fn physical_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        if let Some(caps) = DIMENSIONS.captures(text) {
            specs.push(RawSpecification::new(
                Category::Physical,
                "Dimensions",
                &caps[1],
            ));
        }

        if let Some(window) = section(text, &WEIGHT_ANCHOR, &WEIGHT_END) {
            for caps in WEIGHT_OPTION.captures_iter(window) {
                specs.push(RawSpecification::new(
                    Category::Physical,
                    "Weight",
                    format!("{} kg ({} lbs)", &caps[1], &caps[2]),
                ));
            }
        }
    }

    fn battery_specs(&self, text: &str, specs: &mut Vec<RawSpecification>) {
        let Some(window) = section(text, &BATTERY_ANCHOR, &BATTERY_END) else {
            return;
        };

        for caps in BATTERY_OPTION.captures_iter(window) {
            specs.push(RawSpecification::new(
                Category::Battery,
                "Battery Option",
                format!("{} Li-ion with Rapid Charge", &caps[1]),
            ));
        }

        if let Some(life) = section(window, &BATTERY_LIFE_ANCHOR, &BATTERY_LIFE_END) {
            for caps in BATTERY_LIFE_RESULT.captures_iter(life) {
                specs.push(RawSpecification::new(
                    Category::Battery,
                    format!("Battery Life - {}", &caps[1]),
                    format!("{} hours", &caps[2]),
                ));
            }
        }
    }
}

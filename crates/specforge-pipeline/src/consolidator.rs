//! Battery consolidation, processor fixes, and quality validation
//!
//! Cleanup passes that run after structuring. Consolidation merges
//! battery life test rows into battery option records; the processor fix
//! recomputes frequency fields from raw text; validation reports how
//! complete the structured data is.

use crate::error::PipelineError;
use crate::types::{ConsolidationReport, QualityIssue, QualityReport};
use regex::Regex;
use specforge_domain::traits::SpecStore;
use specforge_domain::{
    Category, LaptopId, ProcessorSpec, SpecId, StructuredValue, TestResult,
};
use specforge_extractor::extract_processor_model;
use std::fmt::Display;
use std::sync::LazyLock;
use tracing::{error, info, warn};

static HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)([\d.]+)\s*hours?").unwrap());
static GHZ_ALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)([\d.]+)\s*GHz").unwrap());

/// Name prefix marking a row as a battery life test result.
const LIFE_TEST_PREFIX: &str = "Battery Life -";

/// Merge battery life test rows into battery option records.
///
/// For each laptop with Battery specs: every life test's name and hours
/// are appended to every option's `test_results`, deduplicated by test
/// name, never overwriting an entry that is already present. Life-test
/// rows are then deleted — but only when the laptop has at least one
/// option row to carry the data; otherwise the tests stay in place and a
/// warning is logged. One transaction per laptop; a failing laptop is
/// skipped and the rest proceed.
pub fn consolidate<S>(store: &mut S) -> Result<ConsolidationReport, PipelineError>
where
    S: SpecStore,
    S::Error: Display,
{
    info!("Starting battery specification consolidation");

    let laptop_ids = store
        .laptops_with_category(&Category::Battery)
        .map_err(|e| PipelineError::Store(e.to_string()))?;

    let mut report = ConsolidationReport {
        laptops: laptop_ids.len(),
        ..Default::default()
    };

    for laptop_id in laptop_ids {
        match consolidate_laptop(store, laptop_id) {
            Ok(LaptopOutcome::Merged { tests, options }) => {
                report.tests_merged += tests;
                info!(
                    "Consolidated {} battery life tests into {} battery options for laptop {}",
                    tests, options, laptop_id
                );
            }
            Ok(LaptopOutcome::NoOptions { tests }) => {
                report.laptops_without_options += 1;
                warn!(
                    "Laptop {} has {} battery life tests but no battery option; leaving tests in place",
                    laptop_id, tests
                );
            }
            Ok(LaptopOutcome::Nothing) => {}
            Err(e) => {
                report.failed_laptops += 1;
                error!("Error consolidating battery specs for laptop {}: {}", laptop_id, e);
            }
        }
    }

    info!("Battery consolidation complete");
    Ok(report)
}

enum LaptopOutcome {
    Merged { tests: usize, options: usize },
    NoOptions { tests: usize },
    Nothing,
}

fn consolidate_laptop<S>(store: &mut S, laptop_id: LaptopId) -> Result<LaptopOutcome, PipelineError>
where
    S: SpecStore,
    S::Error: Display,
{
    let specs = store
        .specs_for_laptop(laptop_id, &Category::Battery)
        .map_err(|e| PipelineError::Store(e.to_string()))?;

    let mut life_tests = Vec::new();
    let mut options = Vec::new();
    for spec in specs {
        if spec.specification_name.contains(LIFE_TEST_PREFIX) {
            life_tests.push(spec);
        } else if spec.specification_name.contains("Battery Option") {
            options.push(spec);
        }
    }

    if life_tests.is_empty() {
        return Ok(LaptopOutcome::Nothing);
    }
    if options.is_empty() {
        return Ok(LaptopOutcome::NoOptions {
            tests: life_tests.len(),
        });
    }

    let mut updates = Vec::new();
    for option in &options {
        let Some(StructuredValue::Battery(battery)) = &option.structured_value else {
            continue;
        };
        let mut battery = battery.clone();
        let mut changed = false;

        for life_test in &life_tests {
            let test_name = life_test
                .specification_name
                .replace("Battery Life - ", "")
                .trim()
                .to_string();
            let Some(caps) = HOURS.captures(&life_test.specification_value) else {
                continue;
            };
            let Ok(hours) = caps[1].parse::<f64>() else {
                continue;
            };

            if !battery.has_test(&test_name) {
                battery.test_results.push(TestResult { test_name, hours });
                changed = true;
            }
        }

        if changed {
            updates.push((option.id, StructuredValue::Battery(battery)));
        }
    }

    let deletions: Vec<SpecId> = life_tests.iter().map(|t| t.id).collect();
    store
        .apply_consolidation(&updates, &deletions)
        .map_err(|e| PipelineError::Store(e.to_string()))?;

    Ok(LaptopOutcome::Merged {
        tests: deletions.len(),
        options: options.len(),
    })
}

/// Recompute frequency fields for processor frequency rows.
///
/// Targets Processor specs whose name marks them as frequency rows. Base
/// frequency becomes the lowest GHz value in the raw text and max the
/// highest, both only when missing; model and brand are re-derived the
/// same way the repair pass does. Rows without any GHz value are left
/// alone. Safe to rerun; filled fields are never overwritten. All updates
/// commit as one transaction. Returns the number of rows updated.
pub fn fix_processor_frequencies<S>(store: &mut S) -> Result<usize, PipelineError>
where
    S: SpecStore,
    S::Error: Display,
{
    info!("Fixing processor frequency issues");

    let specs = store
        .specs_in_category(&Category::Processor, Some("Frequencies"))
        .map_err(|e| PipelineError::Store(e.to_string()))?;

    let mut updates = Vec::new();
    for spec in specs {
        let mut processor = match &spec.structured_value {
            Some(StructuredValue::Processor(p)) => p.clone(),
            None => ProcessorSpec::default(),
            Some(_) => continue,
        };

        let frequencies: Vec<f64> = GHZ_ALL
            .captures_iter(&spec.specification_value)
            .filter_map(|caps| caps[1].parse().ok())
            .collect();
        if frequencies.is_empty() {
            continue;
        }

        let mut changed = false;
        if processor.base_frequency_ghz.is_none() {
            processor.base_frequency_ghz = frequencies.iter().copied().reduce(f64::min);
            changed = true;
        }
        if processor.max_frequency_ghz.is_none() {
            processor.max_frequency_ghz = frequencies.iter().copied().reduce(f64::max);
            changed = true;
        }

        if processor.model.is_none() {
            if let Some(model) = extract_processor_model(&spec.specification_name) {
                processor.model = Some(model);
                changed = true;
            }
        }

        if processor.brand.is_none() {
            let text = format!("{} {}", spec.specification_name, spec.specification_value)
                .to_lowercase();
            if text.contains("intel") || text.contains("core") {
                processor.brand = Some("Intel".to_string());
                changed = true;
            } else if text.contains("amd") || text.contains("ryzen") {
                processor.brand = Some("AMD".to_string());
                changed = true;
            }
        }

        if changed {
            updates.push((spec.id, StructuredValue::Processor(processor)));
        }
    }

    let count = updates.len();
    store
        .commit_structured(&updates)
        .map_err(|e| PipelineError::Commit(e.to_string()))?;

    info!("Processor frequency fixes complete: {} rows updated", count);
    Ok(count)
}

/// Read-only data quality check.
///
/// Counts structured Processor records missing brand or model and
/// structured Display records with a panel missing its resolution.
pub fn validate<S>(store: &S) -> Result<QualityReport, PipelineError>
where
    S: SpecStore,
    S::Error: Display,
{
    info!("Running validation checks");

    let mut report = QualityReport {
        total_structured: store
            .count_structured()
            .map_err(|e| PipelineError::Store(e.to_string()))?,
        ..Default::default()
    };

    let processors = store
        .specs_in_category(&Category::Processor, None)
        .map_err(|e| PipelineError::Store(e.to_string()))?;
    for spec in processors {
        let Some(StructuredValue::Processor(processor)) = &spec.structured_value else {
            continue;
        };
        report.processor_total += 1;

        let mut missing = Vec::new();
        if processor.brand.is_none() {
            missing.push("brand".to_string());
        }
        if processor.model.is_none() {
            missing.push("model".to_string());
        }
        if !missing.is_empty() {
            report.processor_issues.push(QualityIssue {
                id: spec.id,
                name: spec.specification_name.clone(),
                missing,
            });
        }
    }

    let displays = store
        .specs_in_category(&Category::Display, None)
        .map_err(|e| PipelineError::Store(e.to_string()))?;
    for spec in displays {
        let Some(StructuredValue::Display(panels)) = &spec.structured_value else {
            continue;
        };
        report.display_total += 1;

        if panels.iter().any(|panel| panel.resolution.is_none()) {
            report.display_issues.push(QualityIssue {
                id: spec.id,
                name: spec.specification_name.clone(),
                missing: vec!["resolution".to_string()],
            });
        }
    }

    Ok(report)
}

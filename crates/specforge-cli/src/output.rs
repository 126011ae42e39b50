//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use specforge_domain::Specification;
use specforge_pipeline::{ConsolidationReport, QualityReport, RunMetrics};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest raw value shown in a preview row.
const PREVIEW_VALUE_WIDTH: usize = 40;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a preview of stored specifications with their laptop names.
    pub fn preview(&self, rows: &[(Specification, String)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_rows: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|(spec, laptop)| {
                        serde_json::json!({
                            "id": spec.id.0,
                            "laptop": laptop,
                            "category": spec.category.to_string(),
                            "name": spec.specification_name,
                            "value": spec.specification_value,
                            "structured": spec.structured_value.is_some(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_rows)?)
            }
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No specifications stored.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Laptop", "Category", "Name", "Value", "Structured"]);

                for (spec, laptop) in rows {
                    builder.push_record([
                        &spec.id.0.to_string(),
                        laptop,
                        &spec.category.to_string(),
                        &spec.specification_name,
                        &truncate(&spec.specification_value, PREVIEW_VALUE_WIDTH),
                        &if spec.structured_value.is_some() {
                            "yes".to_string()
                        } else {
                            "no".to_string()
                        },
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the category distribution with sample specification names.
    pub fn categories(&self, rows: &[(String, usize, Vec<String>)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_rows: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|(category, count, samples)| {
                        serde_json::json!({
                            "category": category,
                            "count": count,
                            "sample_names": samples,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_rows)?)
            }
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No specifications stored.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Category", "Rows", "Sample names"]);
                for (category, count, samples) in rows {
                    builder.push_record([category, &count.to_string(), &samples.join(", ")]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the counters from a structuring run.
    pub fn run_metrics(&self, metrics: &RunMetrics) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(metrics)?),
            OutputFormat::Table => {
                let mut lines = vec![
                    self.success(&format!(
                        "Structured {} of {} eligible specifications",
                        metrics.structured, metrics.eligible
                    )),
                    format!("  Skipped: {}", metrics.skipped),
                ];
                if metrics.failed_records > 0 {
                    lines.push(self.colorize(
                        &format!("  Failed records: {}", metrics.failed_records),
                        "yellow",
                    ));
                }
                if metrics.failed_batches > 0 {
                    lines.push(self.colorize(
                        &format!("  Failed batches: {}", metrics.failed_batches),
                        "red",
                    ));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a battery consolidation report.
    pub fn consolidation(&self, report: &ConsolidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => {
                let mut lines = vec![self.success(&format!(
                    "Merged {} battery life tests across {} laptops",
                    report.tests_merged, report.laptops
                ))];
                if report.laptops_without_options > 0 {
                    lines.push(self.warning(&format!(
                        "{} laptops had life tests but no battery option; their tests were kept",
                        report.laptops_without_options
                    )));
                }
                if report.failed_laptops > 0 {
                    lines.push(self.error(&format!(
                        "{} laptops failed and were skipped",
                        report.failed_laptops
                    )));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a data quality report with its score.
    pub fn quality(&self, report: &QualityReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "total_structured": report.total_structured,
                    "processor_total": report.processor_total,
                    "processor_issues": report.processor_issues,
                    "display_total": report.display_total,
                    "display_issues": report.display_issues,
                    "quality_score": report.quality_score(),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut lines = vec![
                    format!("Structured records: {}", report.total_structured),
                    format!(
                        "Processors: {} checked, {} with missing fields",
                        report.processor_total,
                        report.processor_issues.len()
                    ),
                    format!(
                        "Displays: {} checked, {} with missing resolution",
                        report.display_total,
                        report.display_issues.len()
                    ),
                ];
                for issue in report
                    .processor_issues
                    .iter()
                    .chain(report.display_issues.iter())
                {
                    lines.push(format!(
                        "  id {} '{}' missing {}",
                        issue.id.0,
                        issue.name,
                        issue.missing.join(", ")
                    ));
                }
                let score = report.quality_score();
                let line = format!("Quality score: {:.1}%", score);
                lines.push(if score >= 90.0 {
                    self.colorize(&line, "green")
                } else {
                    self.colorize(&line, "yellow")
                });
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= width {
        return flat;
    }
    let mut out: String = flat.chars().take(width).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("47Wh Li-ion", 40), "47Wh Li-ion");
    }

    #[test]
    fn test_truncate_long_string() {
        let long = "a".repeat(60);
        let out = truncate(&long, 40);
        assert_eq!(out.chars().count(), 41);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_truncate_flattens_newlines() {
        assert_eq!(truncate("1.7 GHz base\nup to 4.8 GHz", 40), "1.7 GHz base up to 4.8 GHz");
    }

    #[test]
    fn test_no_color_passthrough() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }
}

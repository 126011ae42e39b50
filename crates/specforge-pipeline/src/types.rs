//! Result types reported by pipeline passes

use serde::Serialize;
use specforge_domain::SpecId;

/// Counters from one batch structuring run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunMetrics {
    /// Records that were eligible at the start of the run
    pub eligible: usize,
    /// Records structured and committed
    pub structured: usize,
    /// Records skipped as degenerate or unresolvable
    pub skipped: usize,
    /// Records whose extraction failed; they remain unstructured
    pub failed_records: usize,
    /// Batches aborted before commit
    pub failed_batches: usize,
}

/// Counters from one battery consolidation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsolidationReport {
    /// Laptops examined
    pub laptops: usize,
    /// Life-test rows merged and deleted
    pub tests_merged: usize,
    /// Laptops left untouched because no option row existed
    pub laptops_without_options: usize,
    /// Laptops skipped after an error
    pub failed_laptops: usize,
}

/// One incomplete structured record found during validation.
#[derive(Debug, Clone, Serialize)]
pub struct QualityIssue {
    /// Record id
    pub id: SpecId,
    /// Specification name
    pub name: String,
    /// Names of the missing fields
    pub missing: Vec<String>,
}

/// Read-only data quality report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QualityReport {
    /// Structured records in the store
    pub total_structured: usize,
    /// Structured processor records examined
    pub processor_total: usize,
    /// Processor records missing brand or model
    pub processor_issues: Vec<QualityIssue>,
    /// Structured display records examined
    pub display_total: usize,
    /// Display records with a panel missing its resolution
    pub display_issues: Vec<QualityIssue>,
}

impl QualityReport {
    /// Share of structured records free of known issues, as a percentage.
    pub fn quality_score(&self) -> f64 {
        if self.total_structured == 0 {
            return 0.0;
        }
        let issues = self.processor_issues.len() + self.display_issues.len();
        (self.total_structured.saturating_sub(issues)) as f64 / self.total_structured as f64
            * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_score_empty_store() {
        let report = QualityReport::default();
        assert_eq!(report.quality_score(), 0.0);
    }

    #[test]
    fn test_quality_score_percentage() {
        let mut report = QualityReport {
            total_structured: 10,
            ..Default::default()
        };
        report.processor_issues.push(QualityIssue {
            id: SpecId(1),
            name: "Core i7 - Frequencies".to_string(),
            missing: vec!["brand".to_string()],
        });
        report.display_issues.push(QualityIssue {
            id: SpecId(2),
            name: "Display Option 1".to_string(),
            missing: vec!["resolution".to_string()],
        });
        assert!((report.quality_score() - 80.0).abs() < f64::EPSILON);
    }
}

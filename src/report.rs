//! Console and JSON rendering of a chart check run.

use serde::Serialize;
use std::fmt;

use crate::error::Finding;
use crate::types::ChartReport;

const OK_GLYPH: &str = "✓";
const ERROR_GLYPH: &str = "✗";
const WARNING_GLYPH: &str = "⚠";
const RULE_WIDTH: usize = 50;

/// Run totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub charts: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn from_reports(reports: &[ChartReport]) -> Self {
        reports.iter().fold(
            Summary {
                charts: reports.len(),
                ..Summary::default()
            },
            |acc, r| Summary {
                errors: acc.errors + r.result.errors.len(),
                warnings: acc.warnings + r.result.warnings.len(),
                ..acc
            },
        )
    }

    /// Process exit status: 1 on any error, or on any warning when `strict`.
    pub fn exit_code(&self, strict: bool) -> u8 {
        if self.errors > 0 || (strict && self.warnings > 0) {
            1
        } else {
            0
        }
    }
}

// ─── Text ───────────────────────────────────────────────────────────────────

/// Human-readable report, rendered through [`fmt::Display`].
pub struct TextReport<'a> {
    file: &'a str,
    reports: &'a [ChartReport],
}

impl<'a> TextReport<'a> {
    pub fn new(file: &'a str, reports: &'a [ChartReport]) -> Self {
        TextReport { file, reports }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checking charts in: {}", self.file)?;
        writeln!(f)?;

        if self.reports.is_empty() {
            return writeln!(f, "No charts found in presentation.");
        }

        writeln!(f, "Found {} chart(s)", self.reports.len())?;
        writeln!(f)?;

        for report in self.reports {
            if report.result.is_clean() {
                writeln!(
                    f,
                    "{} Chart {} ({}, type: {}): OK",
                    OK_GLYPH,
                    report.index + 1,
                    report.record.line_label(),
                    report.record.chart_type
                )?;
                continue;
            }
            for e in &report.result.errors {
                writeln!(f, "{} {}", ERROR_GLYPH, e)?;
            }
            for w in &report.result.warnings {
                writeln!(f, "{} {}", WARNING_GLYPH, w)?;
            }
        }

        let summary = Summary::from_reports(self.reports);
        writeln!(f)?;
        writeln!(f, "{}", "─".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "Total: {} charts, {} errors, {} warnings",
            summary.charts, summary.errors, summary.warnings
        )
    }
}

/// Render the text report to a string.
pub fn render_text(file: &str, reports: &[ChartReport]) -> String {
    TextReport::new(file, reports).to_string()
}

// ─── JSON ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    charts: Vec<JsonChart<'a>>,
    summary: Summary,
}

#[derive(Serialize)]
struct JsonChart<'a> {
    chart: usize,
    #[serde(rename = "type")]
    chart_type: &'a str,
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_source: Option<&'a str>,
    errors: &'a [Finding],
    warnings: &'a [Finding],
}

/// Render a machine-readable report as pretty-printed JSON.
pub fn render_json(file: &str, reports: &[ChartReport]) -> Result<String, serde_json::Error> {
    let doc = JsonReport {
        file,
        charts: reports
            .iter()
            .map(|r| JsonChart {
                chart: r.index + 1,
                chart_type: &r.record.chart_type,
                line: r.record.line,
                external_source: r.record.external_source.as_deref(),
                errors: &r.result.errors,
                warnings: &r.result.warnings,
            })
            .collect(),
        summary: Summary::from_reports(reports),
    };
    serde_json::to_string_pretty(&doc)
}

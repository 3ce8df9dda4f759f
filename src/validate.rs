//! Chart validation against rules V-001 through V-008 and W-001 through W-004.
//!
//! Returns **all** errors and warnings for a chart, not just the first. The
//! only short-circuit is V-002: a chart with neither an inline payload nor an
//! external source gets no further checks. Validation is a pure function of
//! the record and its index.

use serde_json::Value;
use serde_json::error::Category;

use crate::enums::ChartType;
use crate::error::*;
use crate::types::*;

const JSON_SYNTAX_HINT: &str = "Hint: Check for missing commas, quotes, or brackets";

/// Validate one chart. `index` is its 0-based position in document order and
/// only affects message text.
pub fn validate(chart: &ChartRecord, index: usize) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let ctx = RuleContext::new(chart, index);

    v001_chart_type(&ctx, &mut errors);

    let payload = chart.payload();
    if payload.is_none() && !chart.has_external_source() {
        v002_configuration_present(&ctx, &mut errors);
        return ValidationResult { errors, warnings };
    }

    w001_external_source(&ctx, &mut warnings);

    if let Some(payload) = payload {
        tracing::trace!(chart = index + 1, kind = payload.kind_name(), "validating payload");
        match payload {
            Payload::Csv(text) => validate_csv(&ctx, text, &mut errors, &mut warnings),
            Payload::Json(text) => validate_json(&ctx, text, &mut errors, &mut warnings),
        }
    }

    tracing::debug!(
        chart = index + 1,
        errors = errors.len(),
        warnings = warnings.len(),
        "validated chart"
    );
    ValidationResult { errors, warnings }
}

/// Validate every chart in order.
pub fn validate_all(charts: &[ChartRecord]) -> Vec<ChartReport> {
    charts
        .iter()
        .enumerate()
        .map(|(index, record)| ChartReport {
            index,
            record: record.clone(),
            result: validate(record, index),
        })
        .collect()
}

// ─── Helper: per-chart context ──────────────────────────────────────────────

struct RuleContext<'a> {
    chart: &'a ChartRecord,
    prefix: String,
}

impl<'a> RuleContext<'a> {
    fn new(chart: &'a ChartRecord, index: usize) -> Self {
        RuleContext {
            chart,
            prefix: format!(
                "Chart {} ({}, type: {})",
                index + 1,
                chart.line_label(),
                chart.chart_type
            ),
        }
    }

    fn error(&self, code: &str, message: impl std::fmt::Display) -> Finding {
        Finding::error(code, format!("{}: {}", self.prefix, message))
    }

    fn warning(&self, code: &str, message: impl std::fmt::Display) -> Finding {
        Finding::warning(code, format!("{}: {}", self.prefix, message))
    }
}

/// A field counts as present when it exists and is not `null`.
fn field<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    value.get(key).filter(|v| !v.is_null())
}

// ─── V-001 ──────────────────────────────────────────────────────────────────

fn v001_chart_type(ctx: &RuleContext<'_>, errors: &mut Vec<Finding>) {
    if ctx.chart.kind().is_none() {
        errors.push(ctx.error(
            "V-001",
            format!(
                "Invalid chart type '{}'. Valid types: {}",
                ctx.chart.chart_type,
                ChartType::valid_list()
            ),
        ));
    }
}

// ─── V-002 ──────────────────────────────────────────────────────────────────

fn v002_configuration_present(ctx: &RuleContext<'_>, errors: &mut Vec<Finding>) {
    errors.push(ctx.error(
        "V-002",
        "No chart configuration found. Add JSON in HTML comment or use data-chart-src attribute.",
    ));
}

// ─── W-001 ──────────────────────────────────────────────────────────────────

fn w001_external_source(ctx: &RuleContext<'_>, warnings: &mut Vec<Finding>) {
    // Existence is never probed; the path is relative to the served deck.
    if let Some(src) = &ctx.chart.external_source {
        warnings.push(ctx.warning(
            "W-001",
            format!("Uses external data source '{}' - ensure file exists", src),
        ));
    }
}

// ─── CSV payloads: V-003, W-002 ─────────────────────────────────────────────

fn validate_csv(
    ctx: &RuleContext<'_>,
    text: &str,
    errors: &mut Vec<Finding>,
    warnings: &mut Vec<Finding>,
) {
    let rows: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();

    if rows.len() < 2 {
        errors.push(ctx.error(
            "V-003",
            "CSV data should have at least a header row and one data row",
        ));
        return;
    }

    // Naive split: quoted commas are not special.
    let header_cols = rows[0].split(',').count();
    for (i, row) in rows.iter().enumerate().skip(1) {
        let cols = row.split(',').count();
        if cols != header_cols {
            warnings.push(ctx.warning(
                "W-002",
                format!(
                    "CSV row {} has {} columns, header has {}",
                    i + 1,
                    cols,
                    header_cols
                ),
            ));
        }
    }
}

// ─── JSON payloads: V-004..V-008, W-003, W-004 ──────────────────────────────

fn validate_json(
    ctx: &RuleContext<'_>,
    text: &str,
    errors: &mut Vec<Finding>,
    warnings: &mut Vec<Finding>,
) {
    let config: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => {
            v004_json_syntax(ctx, &e, errors);
            return;
        }
    };

    v005_data_present(ctx, &config, errors);

    if let Some(data) = field(&config, "data") {
        w003_labels_present(ctx, data, warnings);
        v006_v008_datasets(ctx, data, errors);
    }

    w004_maintain_aspect_ratio(ctx, &config, warnings);
}

fn v004_json_syntax(ctx: &RuleContext<'_>, err: &serde_json::Error, errors: &mut Vec<Finding>) {
    errors.push(ctx.error("V-004", format!("Invalid JSON syntax - {}", err)));

    // Unexpected-token failures; truncated input (EOF) gets no hint.
    if err.classify() == Category::Syntax {
        errors.push(ctx.error("V-004", JSON_SYNTAX_HINT));
    }
}

fn v005_data_present(ctx: &RuleContext<'_>, config: &Value, errors: &mut Vec<Finding>) {
    if field(config, "data").is_none() && !ctx.chart.has_external_source() {
        errors.push(ctx.error(
            "V-005",
            "Missing required 'data' property in chart configuration",
        ));
    }
}

fn w003_labels_present(ctx: &RuleContext<'_>, data: &Value, warnings: &mut Vec<Finding>) {
    let labels_optional = ctx.chart.kind().is_some_and(ChartType::labels_optional);
    if field(data, "labels").is_none() && !labels_optional {
        warnings.push(ctx.warning(
            "W-003",
            "Missing 'data.labels' - chart may not display correctly",
        ));
    }
}

fn v006_v008_datasets(ctx: &RuleContext<'_>, data: &Value, errors: &mut Vec<Finding>) {
    let Some(datasets) = field(data, "datasets").and_then(Value::as_array) else {
        errors.push(ctx.error("V-006", "Missing or invalid 'data.datasets' array"));
        return;
    };

    if datasets.is_empty() {
        errors.push(ctx.error("V-007", "'data.datasets' array is empty"));
        return;
    }

    if ctx.chart.has_external_source() {
        return;
    }
    for (i, dataset) in datasets.iter().enumerate() {
        if field(dataset, "data").is_none() {
            errors.push(ctx.error(
                "V-008",
                format!("Dataset {} is missing 'data' property", i + 1),
            ));
        }
    }
}

fn w004_maintain_aspect_ratio(ctx: &RuleContext<'_>, config: &Value, warnings: &mut Vec<Finding>) {
    let disabled = field(config, "options")
        .and_then(|options| options.get("maintainAspectRatio"))
        .and_then(Value::as_bool)
        == Some(false);
    if !disabled {
        warnings.push(ctx.warning(
            "W-004",
            "Missing 'options.maintainAspectRatio: false' - chart may overflow",
        ));
    }
}

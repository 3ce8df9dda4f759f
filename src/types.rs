use serde::{Deserialize, Serialize};

use crate::enums::ChartType;
use crate::error::ValidationResult;

// ─── ChartRecord ────────────────────────────────────────────────────────────

/// One chart element discovered in a document, in document order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRecord {
    /// Raw `data-chart` value; not yet checked against [`ChartType`].
    #[serde(rename = "type")]
    pub chart_type: String,
    /// Trimmed text of the first comment inside the element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_text: Option<String>,
    /// Value of `data-chart-src`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_source: Option<String>,
    /// 1-based source line, `None` when it could not be located.
    pub line: Option<usize>,
    pub preview: String,
}

impl ChartRecord {
    /// The declared type, if it is one of the valid chart types.
    pub fn kind(&self) -> Option<ChartType> {
        self.chart_type.parse().ok()
    }

    /// The classified payload. An empty comment counts as no payload.
    pub fn payload(&self) -> Option<Payload<'_>> {
        self.config_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(Payload::classify)
    }

    pub fn has_external_source(&self) -> bool {
        self.external_source.is_some()
    }

    /// `"line N"` or `"unknown line"`, as used in finding prefixes.
    pub fn line_label(&self) -> String {
        match self.line {
            Some(n) => format!("line {}", n),
            None => "unknown line".to_string(),
        }
    }
}

// ─── Payload ────────────────────────────────────────────────────────────────

/// Chart configuration text, classified by its first non-blank character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload<'a> {
    /// Text starting with `{`: a Chart.js configuration object.
    Json(&'a str),
    /// Anything else: comma-separated rows with a header line.
    Csv(&'a str),
}

impl<'a> Payload<'a> {
    pub fn classify(text: &'a str) -> Self {
        let trimmed = text.trim();
        if trimmed.starts_with('{') {
            Payload::Json(trimmed)
        } else {
            Payload::Csv(trimmed)
        }
    }

    pub fn text(&self) -> &'a str {
        match self {
            Payload::Json(t) | Payload::Csv(t) => t,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Payload::Json(_) => "json",
            Payload::Csv(_) => "csv",
        }
    }
}

// ─── ChartReport ────────────────────────────────────────────────────────────

/// A chart paired with its position and validation outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartReport {
    /// 0-based position in document order.
    pub index: usize,
    pub record: ChartRecord,
    pub result: ValidationResult,
}

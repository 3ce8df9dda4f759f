//! Closed enumerations used by the validator.
//!
//! Chart types are matched exactly and case-sensitively, the way the chart
//! plugin reads the `data-chart` attribute.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chart types the chart plugin knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
    Bubble,
    Scatter,
}

impl ChartType {
    /// All valid types, in the order they are listed in diagnostics.
    pub const ALL: [ChartType; 8] = [
        ChartType::Line,
        ChartType::Bar,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::Radar,
        ChartType::PolarArea,
        ChartType::Bubble,
        ChartType::Scatter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::Radar => "radar",
            ChartType::PolarArea => "polarArea",
            ChartType::Bubble => "bubble",
            ChartType::Scatter => "scatter",
        }
    }

    /// Point-based charts place data by coordinates and need no `data.labels`.
    pub fn labels_optional(self) -> bool {
        matches!(self, ChartType::Scatter | ChartType::Bubble)
    }

    /// Comma-separated list of every valid type name.
    pub fn valid_list() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a type tag is not one of [`ChartType::ALL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownChartType(pub String);

impl fmt::Display for UnknownChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown chart type: '{}'", self.0)
    }
}

impl std::error::Error for UnknownChartType {}

impl FromStr for ChartType {
    type Err = UnknownChartType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownChartType(s.to_string()))
    }
}

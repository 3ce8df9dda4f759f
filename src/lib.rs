//! Validator for [Chart.js](https://www.chartjs.org) charts embedded in
//! [reveal.js](https://revealjs.com) slide decks.
//!
//! The reveal.js chart plugin reads chart definitions from `<canvas>`
//! elements: the `data-chart` attribute names the chart type and an HTML
//! comment inside the canvas holds either a JSON configuration object or CSV
//! data. Mistakes there only show up as a blank slide at presentation time.
//! This crate finds them ahead of time:
//!
//! ```text
//! extract(html) → Vec<ChartRecord> → validate(record, index) → ValidationResult
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! let html = r#"
//! <section>
//!   <canvas data-chart="pie">
//!   <!--
//!   {
//!     "data": { "labels": ["a", "b"], "datasets": [{ "data": [1, 2] }] },
//!     "options": { "maintainAspectRatio": false }
//!   }
//!   -->
//!   </canvas>
//! </section>
//! "#;
//!
//! let reports = chartcheck::check(html);
//! assert_eq!(reports.len(), 1);
//! assert!(reports[0].result.is_clean());
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | yes     | Builds the `chartcheck` binary (`clap`, `anyhow`, `tracing-subscriber`). |

pub mod enums;
pub mod error;
pub mod extract;
pub mod locate;
pub mod report;
pub mod types;
pub mod validate;

pub use enums::ChartType;
pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use extract::extract;
pub use validate::{validate, validate_all};

use std::path::Path;

/// Convenience entry point composing extract → validate for every chart.
pub fn check(html: &str) -> Vec<ChartReport> {
    validate_all(&extract(html))
}

/// Read a document from disk as UTF-8 text.
///
/// # Errors
///
/// Returns [`CheckError::NotFound`] when `path` does not exist and
/// [`CheckError::Read`] when it cannot be read as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String, CheckError> {
    if !path.exists() {
        return Err(CheckError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|e| CheckError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

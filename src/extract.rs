//! Chart element extraction from slide-deck HTML.
//!
//! Chart elements are `<canvas data-chart="TYPE">` nodes. The configuration
//! payload lives in the first HTML comment inside the canvas; an optional
//! `data-chart-src` attribute points at an external CSV/JSON file instead.
//!
//! Extraction never fails: the HTML parser recovers from malformed markup
//! and every chart element it can see is returned, in document order.

use scraper::{ElementRef, Html, Node, Selector};

use crate::locate::{Locator, char_prefix};
use crate::types::ChartRecord;

/// CSS selector identifying chart elements.
pub const CHART_SELECTOR: &str = "canvas[data-chart]";
/// Attribute holding the declared chart type.
pub const TYPE_ATTR: &str = "data-chart";
/// Attribute holding an external data-source path.
pub const SOURCE_ATTR: &str = "data-chart-src";
/// Number of characters of serialized markup kept in [`ChartRecord::preview`].
pub const PREVIEW_CHARS: usize = 80;

/// Extract every chart element from an HTML document, in document order.
///
/// Documents without charts (including empty input) yield an empty vec.
pub fn extract(html: &str) -> Vec<ChartRecord> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(CHART_SELECTOR).expect("chart selector is valid CSS");
    let mut locator = Locator::new(html);

    let charts: Vec<ChartRecord> = document
        .select(&selector)
        .map(|element| chart_record(element, &mut locator))
        .collect();

    tracing::debug!(count = charts.len(), "extracted chart elements");
    charts
}

fn chart_record(element: ElementRef<'_>, locator: &mut Locator<'_>) -> ChartRecord {
    let attrs = element.value();
    let chart_type = attrs.attr(TYPE_ATTR).unwrap_or_default().to_string();
    let external_source = attrs
        .attr(SOURCE_ATTR)
        .filter(|src| !src.is_empty())
        .map(str::to_string);

    let outer_html = element.html();
    let line = locator.locate(&outer_html, &chart_type);
    if line.is_none() {
        tracing::debug!(chart_type = %chart_type, "could not resolve chart source line");
    }

    ChartRecord {
        config_text: first_comment(element),
        external_source,
        line,
        preview: format!("{}...", char_prefix(&outer_html, PREVIEW_CHARS)),
        chart_type,
    }
}

/// Trimmed text of the first comment nested inside `element`.
fn first_comment(element: ElementRef<'_>) -> Option<String> {
    element
        .descendants()
        .skip(1)
        .find_map(|node| match node.value() {
            Node::Comment(comment) => Some(comment.trim().to_string()),
            _ => None,
        })
}

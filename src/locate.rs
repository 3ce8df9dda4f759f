//! Maps extracted chart elements back to their source lines.
//!
//! The HTML parser does not expose source offsets, so positions are recovered
//! from the text. The primary strategy searches for the first 50 characters of
//! the element's re-serialized markup; when serialization does not reproduce
//! the source (single-quoted attributes, extra whitespace, entity escapes),
//! raw `<canvas>` opening tags found by a lexical scan are used instead.
//! Markup matches count only where a scanned tag starts, which keeps
//! commented-out charts from claiming a position.
//! Both strategies consume matches in document order, so repeated identical
//! charts resolve to successive occurrences instead of the first one.

use regex::Regex;
use std::sync::LazyLock;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static CANVAS_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<canvas\b[^>]*>").unwrap());

static DATA_CHART_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\sdata-chart\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#).unwrap()
});

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Number of leading characters of serialized markup used as a search key.
pub const SEARCH_PREFIX_CHARS: usize = 50;

/// 1-based line number of a byte offset.
pub fn line_at(source: &str, offset: usize) -> usize {
    source.as_bytes()[..offset.min(source.len())]
        .iter()
        .filter(|b| **b == b'\n')
        .count()
        + 1
}

/// First `n` characters of `s`, respecting UTF-8 boundaries.
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// A raw `<canvas data-chart=...>` opening tag found in the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RawChartTag {
    offset: usize,
    chart_type: String,
}

/// Lexical scan for chart opening tags outside of HTML comments.
fn scan_chart_tags(source: &str) -> Vec<RawChartTag> {
    let comments: Vec<(usize, usize)> = COMMENT_RE
        .find_iter(source)
        .map(|m| (m.start(), m.end()))
        .collect();
    let in_comment = |pos: usize| comments.iter().any(|&(s, e)| pos > s && pos < e);

    CANVAS_TAG_RE
        .find_iter(source)
        .filter(|m| !in_comment(m.start()))
        .filter_map(|m| {
            let caps = DATA_CHART_ATTR_RE.captures(m.as_str())?;
            let value = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map_or("", |v| v.as_str());
            Some(RawChartTag {
                offset: m.start(),
                chart_type: value.to_string(),
            })
        })
        .collect()
}

/// Stateful resolver that hands out source lines in document order.
pub struct Locator<'a> {
    source: &'a str,
    cursor: usize,
    tags: Vec<RawChartTag>,
    next_tag: usize,
}

impl<'a> Locator<'a> {
    pub fn new(source: &'a str) -> Self {
        Locator {
            source,
            cursor: 0,
            tags: scan_chart_tags(source),
            next_tag: 0,
        }
    }

    /// Resolve the line of the next chart, given its serialized markup and
    /// declared type. Returns `None` when neither strategy finds it.
    ///
    /// Only offsets of scanned opening tags are accepted, and the earliest
    /// unused tag wins, so a match can neither land inside an HTML comment
    /// nor skip over an earlier chart of the same type.
    pub fn locate(&mut self, serialized: &str, chart_type: &str) -> Option<usize> {
        let by_markup = self.find_serialized(serialized);
        let by_type = self.find_raw_tag(chart_type);
        let offset = match (by_markup, by_type) {
            (Some(m), Some(t)) => Some(m.min(t)),
            (m, t) => m.or(t),
        }?;
        if by_markup != Some(offset) {
            tracing::debug!(chart_type, "line resolved from raw tag scan");
        }
        self.advance_past(offset);
        Some(line_at(self.source, offset))
    }

    /// First occurrence of the serialized prefix that starts an unused tag.
    fn find_serialized(&self, serialized: &str) -> Option<usize> {
        let key = char_prefix(serialized, SEARCH_PREFIX_CHARS);
        if key.is_empty() {
            return None;
        }
        let unused = &self.tags[self.next_tag..];
        self.source[self.cursor..]
            .match_indices(key)
            .map(|(pos, _)| self.cursor + pos)
            .find(|offset| unused.binary_search_by_key(offset, |t| t.offset).is_ok())
    }

    /// Next unused tag whose raw `data-chart` value equals `chart_type`.
    fn find_raw_tag(&self, chart_type: &str) -> Option<usize> {
        self.tags[self.next_tag..]
            .iter()
            .find(|t| t.offset >= self.cursor && t.chart_type == chart_type)
            .map(|t| t.offset)
    }

    fn advance_past(&mut self, offset: usize) {
        // Step over the '<' so the next search starts after this element.
        self.cursor = (offset + 1).min(self.source.len());
        while !self.source.is_char_boundary(self.cursor) {
            self.cursor += 1;
        }
        while self.next_tag < self.tags.len() && self.tags[self.next_tag].offset < self.cursor {
            self.next_tag += 1;
        }
    }
}

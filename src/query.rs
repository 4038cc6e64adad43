//! Query model, derived views, and the canonical serializer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One `keyword:value` clause. Repeated keywords stay distinct entries;
/// grouping happens only in derived views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub keyword: String,
    pub value: String,
    pub negated: bool,
}

/// A free-standing word or quoted phrase that no condition or transform
/// claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub text: String,
    pub negated: bool,
}

/// Read-only projection of the condition list: keyword → values in
/// condition order, split by negation. Recomputed from [`SearchQuery`] on
/// demand, never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub include: BTreeMap<String, Vec<String>>,
    pub exclude: BTreeMap<String, Vec<String>>,
}

impl ParsedQuery {
    /// Shaped view over the non-negated values of `keyword`.
    pub fn value(&self, keyword: &str) -> Option<Value> {
        Value::from_values(self.include.get(keyword)?)
    }

    /// Shaped view over the negated values of `keyword`.
    pub fn exclude_value(&self, keyword: &str) -> Option<Value> {
        Value::from_values(self.exclude.get(keyword)?)
    }
}

/// Shape of a keyword's values where a projection needs more than a flat
/// list. The canonical [`Condition`] always keeps `value` as one plain
/// string; this variant exists only at the projection layer.
///
/// ```
/// use searchstring::{Value, parse};
///
/// let parsed = parse("date:1/10/2013-15/04/2014").parsed_query();
/// assert!(matches!(parsed.value("date"), Some(Value::Range(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
    Range(RangeValue),
}

/// A `from-to` span detected in a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeValue {
    pub from: String,
    pub to: String,
}

impl Value {
    fn from_values(values: &[String]) -> Option<Self> {
        match values {
            [] => None,
            [single] => Some(
                try_parse_range(single)
                    .map(Value::Range)
                    .unwrap_or_else(|| Value::Scalar(single.clone())),
            ),
            many => Some(Value::List(many.to_vec())),
        }
    }
}

/// Hyphenated ranges are ambiguous with plain dashes, so only accept them
/// when both sides look date-like (`1/10/2013-15/04/2014`).
fn try_parse_range(raw: &str) -> Option<RangeValue> {
    for (idx, ch) in raw.char_indices() {
        if ch != '-' {
            continue;
        }
        let left = raw[..idx].trim();
        let right = raw[idx + 1..].trim();
        if left.is_empty() || right.is_empty() {
            continue;
        }
        if looks_like_date_fragment(left) && looks_like_date_fragment(right) {
            return Some(RangeValue {
                from: left.to_string(),
                to: right.to_string(),
            });
        }
    }
    None
}

fn looks_like_date_fragment(value: &str) -> bool {
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let separated = value.contains('/') || value.contains('.');
    let hyphens = value.chars().filter(|&c| c == '-').count();
    separated || hyphens >= 2
}

/// A parsed search string: ordered conditions plus ordered free-text
/// segments. The sole source of truth; every derived view is recomputed
/// from it, including the canonical string form ([`fmt::Display`]).
///
/// Created by [`parse`](crate::parse) (or by cloning); mutated only through
/// [`add_entry`](Self::add_entry), [`remove_keyword`](Self::remove_keyword)
/// and [`remove_entry`](Self::remove_entry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    conditions: Vec<Condition>,
    segments: Vec<TextSegment>,
}

impl SearchQuery {
    pub(crate) fn new(conditions: Vec<Condition>, segments: Vec<TextSegment>) -> Self {
        Self {
            conditions,
            segments,
        }
    }

    /// Conditions in first-appearance order. May contain several entries
    /// for one keyword.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Free-text segments in first-appearance order.
    pub fn text_segments(&self) -> &[TextSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.segments.is_empty()
    }

    /// Keyword → ordered values, negated conditions landing in `exclude`.
    pub fn parsed_query(&self) -> ParsedQuery {
        let mut parsed = ParsedQuery::default();
        for condition in &self.conditions {
            let side = if condition.negated {
                &mut parsed.exclude
            } else {
                &mut parsed.include
            };
            side.entry(condition.keyword.clone())
                .or_default()
                .push(condition.value.clone());
        }
        parsed
    }

    /// All text segments joined by spaces, negated segments prefixed with
    /// `-`.
    pub fn all_text(&self) -> String {
        let rendered: Vec<String> = self
            .segments
            .iter()
            .map(|segment| {
                if segment.negated {
                    format!("-{}", segment.text)
                } else {
                    segment.text.clone()
                }
            })
            .collect();
        rendered.join(" ")
    }

    /// Appends a condition. Never merges or dedupes against existing
    /// entries; whether duplicates are meaningful is the caller's business.
    pub fn add_entry(
        &mut self,
        keyword: impl Into<String>,
        value: impl Into<String>,
        negated: bool,
    ) {
        self.conditions.push(Condition {
            keyword: keyword.into(),
            value: value.into(),
            negated,
        });
    }

    /// Removes every condition whose keyword and negation both match.
    pub fn remove_keyword(&mut self, keyword: &str, negated: bool) {
        self.conditions
            .retain(|c| c.keyword != keyword || c.negated != negated);
    }

    /// Removes the first condition matching all three fields exactly; a
    /// silent no-op when none matches.
    pub fn remove_entry(&mut self, keyword: &str, value: &str, negated: bool) {
        if let Some(index) = self
            .conditions
            .iter()
            .position(|c| c.keyword == keyword && c.value == value && c.negated == negated)
        {
            self.conditions.remove(index);
        }
    }
}

/// Canonical rendering: conditions grouped by (negation, keyword) in
/// first-seen order with comma-joined values, then the free text. Stable
/// under repeated parse/serialize round trips of its own output.
impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut groups: Vec<((bool, &str), Vec<&str>)> = Vec::new();
        for condition in &self.conditions {
            let key = (condition.negated, condition.keyword.as_str());
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, values)) => values.push(condition.value.as_str()),
                None => groups.push((key, vec![condition.value.as_str()])),
            }
        }

        let mut rendered: Vec<String> = Vec::new();
        for ((negated, keyword), values) in groups {
            let safe: Vec<String> = values
                .iter()
                .filter(|v| !v.is_empty())
                .map(|v| escape_value(v))
                .collect();
            if safe.is_empty() {
                continue;
            }
            let sign = if negated { "-" } else { "" };
            rendered.push(format!("{sign}{keyword}:{}", safe.join(",")));
        }

        let conditions = rendered.join(" ");
        let text = self.all_text();
        // Segments can carry edge whitespace (quoted phrases like `"a "`),
        // so the assembled string is trimmed as a whole.
        let full = if conditions.is_empty() {
            text
        } else if text.is_empty() {
            conditions
        } else {
            format!("{conditions} {text}")
        };
        f.write_str(full.trim())
    }
}

/// Escapes literal `"` and wraps the value in double quotes when it holds a
/// space or comma, so the output re-parses to the same value.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut needs_quotes = false;
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            ' ' | ',' => {
                needs_quotes = true;
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    if needs_quotes {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}

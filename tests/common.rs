#![allow(dead_code)]
//! Shared helpers for `searchstring` integration tests.

use searchstring::*;

pub fn cond(keyword: &str, value: &str, negated: bool) -> Condition {
    Condition {
        keyword: keyword.to_string(),
        value: value.to_string(),
        negated,
    }
}

pub fn seg(text: &str, negated: bool) -> TextSegment {
    TextSegment {
        text: text.to_string(),
        negated,
    }
}

/// (text, negated) pairs in segment order.
pub fn segments(query: &SearchQuery) -> Vec<(&str, bool)> {
    query
        .text_segments()
        .iter()
        .map(|s| (s.text.as_str(), s.negated))
        .collect()
}

/// (value, negated) pairs for one keyword, in condition order.
pub fn values_of<'q>(query: &'q SearchQuery, keyword: &str) -> Vec<(&'q str, bool)> {
    query
        .conditions()
        .iter()
        .filter(|c| c.keyword == keyword)
        .map(|c| (c.value.as_str(), c.negated))
        .collect()
}

/// Number of distinct keywords across all conditions.
pub fn keyword_count(query: &SearchQuery) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for c in query.conditions() {
        if !seen.contains(&c.keyword.as_str()) {
            seen.push(&c.keyword);
        }
    }
    seen.len()
}

/// Asserts that `input` serializes to itself once parsed.
pub fn assert_fixed_point(input: &str) {
    let canonical = parse(input).to_string();
    assert_eq!(parse(&canonical).to_string(), canonical);
}

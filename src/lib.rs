//! # Structured Search String Parser
//!
//! `searchstring` turns a human-typed search string like
//! `to:me -from:joe@acme.com "exact phrase" foobar` into a query model:
//! ordered `keyword:value` conditions (negatable, multi-valued, quotable)
//! plus the residual free-text segments, and renders the model back to a
//! canonical string that re-parses to an equivalent query.
//!
//! Parsing is total: there is no failure path for malformed input. A
//! trailing `keyword:` yields an empty value, a stray quote stays a literal
//! character, and an unterminated quote never leaks quote mode across
//! tokens. The stray-vs-structural distinction comes from a quote-pairing
//! pre-pass, so the main scan needs no lookahead.
//!
//! ## Example
//! ```
//! let query = searchstring::parse(r#"to:me -from:joe@acme.com "exact phrase" foobar"#);
//!
//! assert_eq!(query.conditions().len(), 2);
//! assert_eq!(query.conditions()[0].keyword, "to");
//! assert!(query.conditions()[1].negated);
//! assert_eq!(query.text_segments()[0].text, "exact phrase");
//! assert_eq!(query.to_string(), "to:me -from:joe@acme.com exact phrase foobar");
//! ```
//!
//! Transforms let collaborators reclassify free text as conditions without
//! the tokenizer knowing their logic:
//! ```
//! use searchstring::{emails, parse_with};
//!
//! let query = parse_with("<a@b.com> to:c@d.com", &[&emails]);
//! assert!(query.text_segments().is_empty());
//! assert_eq!(query.parsed_query().include["to"], ["a@b.com", "c@d.com"]);
//! ```

mod parser;
mod query;
mod quotes;
mod transform;

pub use query::{Condition, ParsedQuery, RangeValue, SearchQuery, TextSegment, Value};
pub use transform::{Transform, domains, emails};

/// Parses a search string into a [`SearchQuery`]. Never fails; an empty or
/// blank input yields an empty query.
pub fn parse(input: &str) -> SearchQuery {
    parse_with(input, &[])
}

/// Like [`parse`], with an ordered list of [`Transform`]s tried against
/// every would-be free-text segment.
pub fn parse_with(input: &str, transforms: &[&dyn Transform]) -> SearchQuery {
    parser::Tokenizer::new(transforms).run(input)
}

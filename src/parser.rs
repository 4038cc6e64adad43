//! Single-pass tokenizer over a structured search string.
//!
//! Parsing is total: any input produces a query. Malformed constructs
//! degrade instead of failing (a trailing `keyword:` yields an empty value,
//! a stray quote is kept as a literal character).

use crate::query::{Condition, SearchQuery, TextSegment};
use crate::quotes::QuotePairs;
use crate::transform::Transform;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing accumulated for the current token.
    Reset,
    /// Accumulating free text, or a keyword that has not yet met its `:`.
    InText,
    /// A `:` was seen; accumulating the value.
    InOperand,
}

/// Whether the scan is currently inside an open quoted span. Orthogonal to
/// [`State`]: a quote can open before any token content exists.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

pub(crate) struct Tokenizer<'t> {
    transforms: &'t [&'t dyn Transform],
    conditions: Vec<Condition>,
    segments: Vec<TextSegment>,
    state: State,
    quote: Quote,
    /// Token text; becomes the keyword once a `:` promotes it.
    text: String,
    /// Value accumulated after the `:`.
    operand: String,
    negated: bool,
    prev: char,
}

impl<'t> Tokenizer<'t> {
    pub(crate) fn new(transforms: &'t [&'t dyn Transform]) -> Self {
        Self {
            transforms,
            conditions: Vec::new(),
            segments: Vec::new(),
            state: State::Reset,
            quote: Quote::None,
            text: String::new(),
            operand: String::new(),
            negated: false,
            prev: '\0',
        }
    }

    pub(crate) fn run(mut self, input: &str) -> SearchQuery {
        let pairs = QuotePairs::scan(input);
        for (offset, ch) in input.char_indices() {
            self.step(offset, ch, &pairs);
            self.prev = ch;
        }
        // No token is lost at end of input even without a trailing space.
        match self.state {
            State::InText => self.emit_text(),
            State::InOperand => self.emit_condition(),
            State::Reset => {}
        }
        tracing::trace!(
            conditions = self.conditions.len(),
            segments = self.segments.len(),
            "parsed search string"
        );
        SearchQuery::new(self.conditions, self.segments)
    }

    fn step(&mut self, offset: usize, ch: char, pairs: &QuotePairs) {
        match ch {
            ' ' => match (self.state, self.quote) {
                (State::InOperand, Quote::None) => self.emit_condition(),
                (State::InText, Quote::None) => self.emit_text(),
                // Inside a quoted span the space is literal.
                (State::InOperand, _) => self.operand.push(' '),
                (State::InText, _) => self.text.push(' '),
                (State::Reset, _) => {}
            },
            // Comma separates several values under one keyword. The keyword
            // and state survive so accumulation continues for the next value.
            ',' if self.state == State::InOperand && self.quote == Quote::None => {
                let condition = Condition {
                    keyword: self.text.clone(),
                    value: std::mem::take(&mut self.operand),
                    negated: self.negated,
                };
                self.conditions.push(condition);
            }
            // Negation applies once, and only before any token content.
            '-' if self.state == State::Reset && !self.negated => {
                self.negated = true;
            }
            ':' if self.quote == Quote::None => match self.state {
                // Keys cannot contain unescaped colons, but values can.
                State::InOperand => self.operand.push(':'),
                State::InText => self.state = State::InOperand,
                State::Reset => {}
            },
            '"' if self.prev != '\\' && self.quote != Quote::Single => {
                if self.quote == Quote::Double {
                    self.quote = Quote::None;
                } else if pairs.paired_double(offset) {
                    self.quote = Quote::Double;
                } else {
                    self.literal(ch);
                }
            }
            '\'' if self.prev != '\\' && self.quote != Quote::Double => {
                if self.quote == Quote::Single {
                    self.quote = Quote::None;
                } else if pairs.paired_single(offset) {
                    self.quote = Quote::Single;
                } else {
                    self.literal(ch);
                }
            }
            // Escape marker: produces no content, only shields the next
            // character from quote handling via the `prev` check above.
            '\\' => {}
            _ => self.literal(ch),
        }
    }

    fn literal(&mut self, ch: char) {
        if self.state == State::InOperand {
            self.operand.push(ch);
        } else {
            self.text.push(ch);
            self.state = State::InText;
        }
    }

    fn emit_condition(&mut self) {
        let condition = Condition {
            keyword: std::mem::take(&mut self.text),
            value: std::mem::take(&mut self.operand),
            negated: self.negated,
        };
        self.conditions.push(condition);
        self.reset_token();
    }

    /// Offers the accumulated text to every transform, in order. Each match
    /// adds a condition; any match suppresses the text segment.
    fn emit_text(&mut self) {
        let text = std::mem::take(&mut self.text);
        let mut claimed = false;
        for transform in self.transforms {
            if let Some((keyword, value)) = transform.transform(&text) {
                self.conditions.push(Condition {
                    keyword,
                    value,
                    negated: self.negated,
                });
                claimed = true;
            }
        }
        if !claimed {
            self.segments.push(TextSegment {
                text,
                negated: self.negated,
            });
        }
        self.reset_token();
    }

    fn reset_token(&mut self) {
        self.state = State::Reset;
        self.quote = Quote::None;
        self.text.clear();
        self.operand.clear();
        self.negated = false;
    }
}

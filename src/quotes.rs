//! Quote-pairing pre-pass.
//!
//! The tokenizer cannot tell a closing quote apart from a stray apostrophe
//! (`don't`) without unbounded lookahead, so we scan the input once up front
//! and record which quote characters actually participate in a matched pair.
//! The main scan then classifies any quote it meets with a set lookup.

use hashbrown::HashSet;

/// Byte offsets of genuinely paired quote characters, one set per kind.
///
/// Single and double quotes pair independently: a `'` inside a `"…"` span
/// still counts toward single-quote pairing and vice versa. A quote preceded
/// by `\` is never structural. When a second unescaped quote of a kind is
/// seen while one is pending, both offsets are recorded and the pending
/// marker clears; otherwise the new offset replaces any older unmatched
/// candidate, so an odd count leaves the final quote unpaired.
#[derive(Debug, Default)]
pub(crate) struct QuotePairs {
    single: HashSet<usize>,
    double: HashSet<usize>,
}

impl QuotePairs {
    pub(crate) fn scan(input: &str) -> Self {
        let mut pairs = Self::default();
        let mut pending_single = None;
        let mut pending_double = None;
        let mut prev = '\0';
        for (offset, ch) in input.char_indices() {
            if prev != '\\' {
                match ch {
                    '"' => match pending_double.take() {
                        Some(open) => {
                            pairs.double.insert(open);
                            pairs.double.insert(offset);
                        }
                        None => pending_double = Some(offset),
                    },
                    '\'' => match pending_single.take() {
                        Some(open) => {
                            pairs.single.insert(open);
                            pairs.single.insert(offset);
                        }
                        None => pending_single = Some(offset),
                    },
                    _ => {}
                }
            }
            prev = ch;
        }
        pairs
    }

    pub(crate) fn paired_single(&self, offset: usize) -> bool {
        self.single.contains(&offset)
    }

    pub(crate) fn paired_double(&self, offset: usize) -> bool {
        self.double.contains(&offset)
    }
}

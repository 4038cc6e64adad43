//! Text-to-condition transforms.
//!
//! A transform inspects a would-be free-text segment and may claim it as a
//! condition instead (`foo@acme.com` → `to:foo@acme.com`). The tokenizer
//! tries every transform in order and every match fires; the text only
//! survives as a segment when nothing claimed it.

use once_cell::sync::Lazy;
use regex::Regex;

/// A pluggable collaborator that may reclassify a free-text candidate as a
/// `(keyword, value)` condition. Implemented for free by any
/// `Fn(&str) -> Option<(String, String)>`.
pub trait Transform {
    fn transform(&self, text: &str) -> Option<(String, String)>;
}

impl<F> Transform for F
where
    F: Fn(&str) -> Option<(String, String)>,
{
    fn transform(&self, text: &str) -> Option<(String, String)> {
        self(text)
    }
}

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@<>]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$").unwrap()
});

static DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$").unwrap()
});

/// Claims text that looks like an e-mail address as `to:<address>`. Angle
/// brackets around the address are stripped first, so pasted RFC recipients
/// (`<joe@acme.com>`) work too.
pub fn emails(text: &str) -> Option<(String, String)> {
    let candidate = text
        .strip_prefix('<')
        .and_then(|t| t.strip_suffix('>'))
        .unwrap_or(text);
    EMAIL
        .is_match(candidate)
        .then(|| ("to".to_string(), candidate.to_string()))
}

/// Claims text that is a bare domain (`acme.com`) as `to:<domain>`.
pub fn domains(text: &str) -> Option<(String, String)> {
    DOMAIN
        .is_match(text)
        .then(|| ("to".to_string(), text.to_string()))
}

//! Utility functions and types.

use std::fmt::Debug;

/// Redact hides a sensitive string when it is formatted with `{:?}`.
///
/// - Empty input prints `EMPTY`.
/// - Input shorter than 12 bytes is fully masked as `***`.
/// - Longer input keeps its first and last three characters so different
///   access keys stay distinguishable in logs.
///
/// Secret access keys should always be passed through `Redact` before they
/// reach a `Debug` implementation.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        if s.is_empty() {
            return f.write_str("EMPTY");
        }

        match (s.get(..3), s.get(s.len().saturating_sub(3)..)) {
            (Some(head), Some(tail)) if s.len() >= 12 => write!(f, "{head}***{tail}"),
            _ => f.write_str("***"),
        }
    }
}

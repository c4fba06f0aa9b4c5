//! Line-oriented parsing of `KEY=VALUE` env file text.
//!
//! The format is deliberately minimal: one entry per line, `#` starts a
//! comment, blank lines are skipped. There is no quoting, no escaping, and
//! no multiline support. Whitespace handling follows the full-trim policy:
//! the key and the value are each trimmed as a whole, so embedded spaces in
//! a value survive (`KEY = VALUE WITH SPACES` parses to `"VALUE WITH
//! SPACES"`).

use crate::error::{EnvError, Result};

/// Parse a single raw line into zero or one key/value pair.
///
/// Returns `Ok(None)` for blank lines and `#` comments. Only the first `=`
/// on the line is a separator; further `=` characters belong to the value.
///
/// # Errors
///
/// Returns [`EnvError::InvalidLine`] if the line has no `=`, or if either
/// side of the split is empty after trimming.
pub fn parse_line(raw: &str) -> Result<Option<(String, String)>> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let Some((left, right)) = line.split_once('=') else {
        return Err(EnvError::InvalidLine {
            line: line.to_string(),
            reason: "missing '=' separator".to_string(),
        });
    };

    let key = left.trim();
    let value = right.trim();
    if key.is_empty() {
        return Err(EnvError::InvalidLine {
            line: line.to_string(),
            reason: "empty key".to_string(),
        });
    }
    if value.is_empty() {
        return Err(EnvError::InvalidLine {
            line: line.to_string(),
            reason: "empty value".to_string(),
        });
    }

    Ok(Some((key.to_string(), value.to_string())))
}

/// Parse whole env file text into key/value pairs in file order.
///
/// Duplicate keys are preserved here; the loader resolves them with
/// last-occurrence-wins semantics.
///
/// # Errors
///
/// Returns the first [`EnvError::InvalidLine`] encountered; no partial
/// result is produced.
pub fn parse_str(text: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for raw in text.lines() {
        if let Some(pair) = parse_line(raw)? {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

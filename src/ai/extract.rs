//! Pulls a JSON payload out of free-form model output.
//!
//! Models wrap structured answers in all sorts of ways. Candidates are tried
//! in this order and the first one found decides the result:
//! 1. a fenced block labeled `json`
//! 2. any fenced block
//! 3. the first balanced `{ ... }` object in the text

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, error};

use crate::errors::StyleError;

static JSON_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)```json\b\s*(.*?)\s*```")
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

// The optional word right after the opening fence is an info string, not content.
static ANY_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:[A-Za-z0-9_+-]+[ \t]*\r?\n)?(.*?)```")
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Locates and parses the JSON payload in `text`.
///
/// # Errors
///
/// Returns [`StyleError::NoJsonFound`] when no candidate exists and
/// [`StyleError::JsonParse`] when the chosen candidate is not valid JSON.
pub fn extract_json(text: &str) -> Result<Value, StyleError> {
    let candidate = find_json_candidate(text).ok_or(StyleError::NoJsonFound)?;
    debug!("Extracted JSON candidate of {} bytes", candidate.len());

    serde_json::from_str(candidate.trim()).map_err(|e| {
        error!("Failed to parse JSON candidate: {}", e);
        StyleError::JsonParse(e.to_string())
    })
}

/// Returns the raw candidate text the extractor would parse, if any.
#[must_use]
pub fn find_json_candidate(text: &str) -> Option<&str> {
    if let Some(m) = JSON_FENCE_RE.captures(text).and_then(|c| c.get(1)) {
        return Some(m.as_str());
    }

    if let Some(m) = ANY_FENCE_RE.captures(text).and_then(|c| c.get(1)) {
        return Some(m.as_str());
    }

    find_object_span(text)
}

/// Finds the first `{` and the `}` that closes it.
///
/// Braces inside JSON string literals do not count toward nesting. An object
/// that never closes yields everything from its opening brace to the end of
/// `text`, so the caller reports a parse error rather than silently dropping it.
#[must_use]
pub fn find_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    Some(&text[start..])
}

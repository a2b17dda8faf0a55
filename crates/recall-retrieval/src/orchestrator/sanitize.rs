//! Redaction for error messages written to traces.

use std::sync::LazyLock;

use regex::Regex;

const REDACTED: &str = "[REDACTED]";

static ASSIGNED_SECRET: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(api[_-]?key|key|token|secret|password|passwd)(\s*[=:]\s*)\S+").ok()
});
static BEARER_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bbearer\s+[A-Za-z0-9._~+/=\-]+").ok());
static SK_KEY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\bsk-[A-Za-z0-9_\-]{8,}").ok());

/// Redact credential-shaped substrings, then cap the result at `max_chars`
/// characters.
pub fn sanitize_error_message(message: &str, max_chars: usize) -> String {
    let mut text = message.to_string();
    if let Some(re) = ASSIGNED_SECRET.as_ref() {
        text = re
            .replace_all(&text, format!("${{1}}${{2}}{REDACTED}"))
            .into_owned();
    }
    if let Some(re) = BEARER_TOKEN.as_ref() {
        text = re
            .replace_all(&text, format!("Bearer {REDACTED}"))
            .into_owned();
    }
    if let Some(re) = SK_KEY.as_ref() {
        text = re.replace_all(&text, REDACTED).into_owned();
    }
    truncate_chars(&text, max_chars)
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

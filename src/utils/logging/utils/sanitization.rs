//! Redaction of credentials and protected health information
//!
//! Anything that might carry patient text (provider error bodies, transcripts,
//! file paths) goes through [`Sanitization::sanitize_for_log`] before it is
//! logged.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest message body kept in a log line
pub const MAX_LOGGED_CHARS: usize = 200;

static CREDENTIAL_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\bbearer\s+[A-Za-z0-9\-_.=+/]+", "Bearer [REDACTED]"),
        (r"\bsk-[A-Za-z0-9\-_]{8,}", "[REDACTED_KEY]"),
        (
            r#"(?i)\b(api[_-]?key|x-api-key|token|password|secret)(["']?\s*[:=]\s*["']?)[^\s"',}]+"#,
            "${1}${2}[REDACTED]",
        ),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
    .collect()
});

static PHI_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}", "[EMAIL]"),
        (r"\b\d{3}-\d{2}-\d{4}\b", "[SSN]"),
        (
            r"(?:\+?1[\s.-]?)?(?:\(\d{3}\)\s?|\b\d{3}[\s.-])\d{3}[\s.-]\d{4}\b",
            "[PHONE]",
        ),
        (r"\b\d{4}-\d{2}-\d{2}\b", "[DATE]"),
        (r"\b\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}\b", "[DATE]"),
        (
            r"(?i)\b(?:mrn|medical record(?: number)?|patient id)\s*[:#]?\s*[A-Za-z0-9-]*\d[A-Za-z0-9-]*",
            "[MRN]",
        ),
        (r"\b\d{6,}\b", "[ID]"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
    .collect()
});

pub struct Sanitization;

impl Sanitization {
    /// Redact API keys, bearer tokens and `key=value` secrets
    pub fn sanitize_log_data(data: &str) -> String {
        apply(&CREDENTIAL_PATTERNS, data)
    }

    /// Redact identifiers commonly found in clinical text
    pub fn redact_phi(data: &str) -> String {
        apply(&PHI_PATTERNS, data)
    }

    /// Full pass applied before anything request-derived reaches a log line
    pub fn sanitize_for_log(data: &str) -> String {
        let cleaned = Self::redact_phi(&Self::sanitize_log_data(data));
        truncate_chars(&cleaned, MAX_LOGGED_CHARS)
    }
}

fn apply(patterns: &[(Regex, &'static str)], data: &str) -> String {
    let mut sanitized = data.to_string();
    for (re, replacement) in patterns {
        sanitized = re.replace_all(&sanitized, *replacement).into_owned();
    }
    sanitized
}

fn truncate_chars(data: &str, max_chars: usize) -> String {
    match data.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...[truncated]", &data[..cut]),
        None => data.to_string(),
    }
}

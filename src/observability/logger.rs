//! Structured JSON logger
//!
//! One log line = one event. Output is deterministic: the `event` key
//! comes first, then `severity`, then the remaining fields sorted
//! alphabetically. Writes are synchronous and unbuffered; `ERROR` and
//! `FATAL` go to stderr.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
    /// Unrecoverable, process exits
    Fatal = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured logger for process-level events.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Log to stderr (for errors and fatal messages)
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    /// Internal log implementation that writes to a given writer
    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut output = String::with_capacity(128);

        // Event first, severity second, everything else alphabetical.
        output.push('{');
        output.push_str("\"event\":\"");
        Self::escape_json_string(&mut output, event);
        output.push('"');
        Self::push_field(&mut output, "severity", severity.as_str());

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(key, _)| *key);
        for (key, value) in sorted_fields {
            Self::push_field(&mut output, key, value);
        }

        output.push('}');
        output.push('\n');

        // One write_all call so lines never interleave.
        let _ = writer.write_all(output.as_bytes());
        let _ = writer.flush();
    }

    /// Append one `,"key":"value"` pair, escaping both sides
    fn push_field(output: &mut String, key: &str, value: &str) {
        output.push_str(",\"");
        Self::escape_json_string(output, key);
        output.push_str("\":\"");
        Self::escape_json_string(output, value);
        output.push('"');
    }

    /// Escape special characters for JSON strings
    fn escape_json_string(output: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if c.is_control() => {
                    output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => output.push(c),
            }
        }
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log_stderr(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log_stderr(Severity::Fatal, event, fields);
    }
}

/// Capture logs to a buffer for testing
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

//! Turns a `.env` file into a committable template.
//!
//! Keys, comments, blank lines and malformed lines survive verbatim. Every
//! assigned value is replaced by a placeholder chosen from the shape of the
//! original value, so the template still hints at what belongs there.

use envgen_core::{EnvLine, TemplateHeader, trim_env};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Strings that JavaScript's `Number()` accepts as finite or infinite numbers
    static ref NUMERIC: Regex = Regex::new(
        r"^(?:[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+)$"
    )
    .unwrap();
}

/// Which placeholder a value gets. Variants are listed in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionRule {
    DoubleQuoted,
    SingleQuoted,
    /// Both `true` and `false` map to `true`
    Boolean,
    Numeric,
    Url,
    Email,
    Domain,
    Empty,
}

impl RedactionRule {
    pub fn classify(raw: &str) -> Self {
        let value = trim_env(raw);

        if value.starts_with('"') && value.ends_with('"') {
            Self::DoubleQuoted
        } else if value.starts_with('\'') && value.ends_with('\'') {
            Self::SingleQuoted
        } else if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
            Self::Boolean
        } else if !value.is_empty() && NUMERIC.is_match(value) {
            Self::Numeric
        } else if value.contains("://") {
            Self::Url
        } else if value.contains('@') {
            Self::Email
        } else if value.contains('.') {
            Self::Domain
        } else {
            Self::Empty
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::DoubleQuoted => "\"\"",
            Self::SingleQuoted => "''",
            Self::Boolean => "true",
            Self::Numeric => "0",
            Self::Url => "https://example.com",
            Self::Email => "user@example.com",
            Self::Domain => "example.com",
            Self::Empty => "",
        }
    }
}

/// One redacted assignment. Carries the key, never the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    /// 1-indexed line in the source file
    pub line: usize,
    pub key: String,
    pub rule: RedactionRule,
}

/// Stateless template renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvRedactor;

impl EnvRedactor {
    pub fn new() -> Self {
        Self
    }

    /// Redact `content` and prepend `header`.
    ///
    /// Lines are split on `\n` only and joined back with `\n`, so a CRLF
    /// file keeps its `\r` on every line that is passed through.
    pub fn redact(&self, content: &str, header: &TemplateHeader) -> (String, Vec<RedactionInfo>) {
        let mut lines: Vec<String> = header.lines().into();
        let mut redactions = Vec::new();

        for (idx, line) in EnvLine::parse_all(content).enumerate() {
            match line {
                EnvLine::Blank(text) | EnvLine::Comment(text) | EnvLine::Other(text) => {
                    lines.push(text.to_string());
                }
                // Nothing to name the value by: the line is dropped
                EnvLine::Assignment { key: "", .. } => {}
                EnvLine::Assignment { key, value } => {
                    let rule = RedactionRule::classify(value);
                    lines.push(format!("{}={}", key, rule.placeholder()));
                    redactions.push(RedactionInfo {
                        line: idx + 1,
                        key: key.to_string(),
                        rule,
                    });
                }
            }
        }

        (lines.join("\n"), redactions)
    }
}

/// Render a template without the redaction details.
pub fn render(content: &str, header: &TemplateHeader) -> String {
    EnvRedactor::new().redact(content, header).0
}

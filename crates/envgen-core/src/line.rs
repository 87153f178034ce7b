//! Line model of a `.env` file

/// Trim the way the classifier expects: Unicode whitespace except NEL
/// (U+0085), plus a stray BOM.
pub fn trim_env(s: &str) -> &str {
    s.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// One line of a `.env` file, borrowed from the source text.
///
/// `Blank`, `Comment` and `Other` keep the untrimmed line so it can be
/// re-emitted byte for byte (including a trailing `\r`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvLine<'a> {
    Blank(&'a str),
    Comment(&'a str),
    /// `key` and `value` are both trimmed. `key` may be empty.
    Assignment { key: &'a str, value: &'a str },
    /// No `=` anywhere: passed through untouched
    Other(&'a str),
}

impl<'a> EnvLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = trim_env(line);

        if trimmed.is_empty() {
            return Self::Blank(line);
        }
        if trimmed.starts_with('#') {
            return Self::Comment(line);
        }

        // Split on the first '=' only; later ones belong to the value
        match trimmed.split_once('=') {
            Some((key, value)) => Self::Assignment {
                key: trim_env(key),
                value: trim_env(value),
            },
            None => Self::Other(line),
        }
    }

    /// Split raw content into lines. Only `\n` separates lines.
    pub fn parse_all(content: &'a str) -> impl Iterator<Item = EnvLine<'a>> {
        content.split('\n').map(Self::parse)
    }
}

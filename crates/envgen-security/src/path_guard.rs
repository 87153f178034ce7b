//! Gatekeeping for the paths and file names envgen reads and writes.
//!
//! Every check here is pure and total: it answers accept or reject and
//! never panics. Callers turn a rejection into their own error.

use std::path::{Component, Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

/// Upper bound on a target name, in UTF-16 code units
pub const MAX_FILE_NAME_LEN: usize = 255;

pub const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

lazy_static! {
    static ref DANGEROUS_CHARS: Regex = Regex::new(r#"[<>:"|?*\x00-\x1f]"#).unwrap();
}

/// Check that a path is safe to read from or write next to.
///
/// The path is normalized lexically first, so `/srv/app/../.env` is judged
/// as `/srv/.env`. Whatever `..` survives normalization (a relative path
/// climbing out, or a name like `a..b`) rejects, as does any `~`.
pub fn is_secure_path(path: impl AsRef<Path>) -> bool {
    let normalized = normalize(path.as_ref());
    let text = normalized.to_string_lossy();

    if text.contains("..") || text.contains('~') {
        return false;
    }

    match std::path::absolute(&normalized) {
        Ok(resolved) => resolved.is_absolute(),
        Err(_) => false,
    }
}

/// Check a target file name such as `.env.example`.
pub fn is_valid_env_file_name(name: &str) -> bool {
    if !name.starts_with(".env") {
        return false;
    }

    if DANGEROUS_CHARS.is_match(name) {
        return false;
    }

    let base = strip_extension(base_name(name)).to_uppercase();
    if RESERVED_NAMES.contains(&base.as_str()) {
        return false;
    }

    if name.encode_utf16().count() > MAX_FILE_NAME_LEN {
        return false;
    }

    true
}

/// Rules for a name typed by the user rather than picked from the known types.
pub fn validate_custom_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("name cannot be empty");
    }
    if !name.starts_with(".env") {
        return Err("name must start with .env");
    }
    if name == ".env" {
        return Err("use a suffix (e.g. .env.custom)");
    }
    Ok(())
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => {
                out.push(part);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Last segment of a name, ignoring trailing separators. Both `/` and `\`
/// count as separators regardless of platform.
fn base_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

/// Drop the final extension. A leading dot starts a name, not an extension.
fn strip_extension(base: &str) -> &str {
    match base.rfind('.') {
        None | Some(0) => base,
        Some(idx) => &base[..idx],
    }
}

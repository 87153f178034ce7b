//! Path validation and value redaction for `.env` templates

pub mod path_guard;
pub mod redactor;

pub use path_guard::{
    MAX_FILE_NAME_LEN, RESERVED_NAMES, is_secure_path, is_valid_env_file_name,
    validate_custom_name,
};
pub use redactor::{EnvRedactor, RedactionInfo, RedactionRule, render};

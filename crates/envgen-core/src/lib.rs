//! Core domain models for envgen
//!
//! This crate contains:
//! - The error taxonomy shared by every crate
//! - The line model of a `.env` file
//! - The template header and the table of known template types

pub mod error;
pub mod line;
pub mod template;

pub use error::{Error, ReadErrorKind, Result};
pub use line::{EnvLine, trim_env};
pub use template::{
    AUTO_GENERATED_NOTICE, CUSTOM_DESCRIPTION, ENV_TYPES, EnvType, HEADER_LINE_COUNT,
    TemplateHeader, describe, is_known_type,
};

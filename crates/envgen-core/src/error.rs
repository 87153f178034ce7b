use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsafe file path: {0}")]
    PathUnsafe(String),

    #[error("Not a .env file: {0}")]
    NotEnvFile(String),

    #[error("File too large ({size} bytes). Maximum allowed: {}KB", .limit / 1024)]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Invalid file name: {0}")]
    FileNameInvalid(String),

    #[error("{kind}: {}", .path.display())]
    Read { path: PathBuf, kind: ReadErrorKind },

    #[error("File already exists: {} (use --force to overwrite)", .0.display())]
    TargetExists(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why reading the source file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadErrorKind {
    NotFound,
    PermissionDenied,
    IsDirectory,
    /// Catch-all: bad encoding, corruption, or any unrecognized I/O failure
    Decode,
}

impl ReadErrorKind {
    /// Map an I/O error to a read failure. Unknown kinds collapse to `Decode`.
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::IsADirectory => Self::IsDirectory,
            _ => Self::Decode,
        }
    }
}

impl fmt::Display for ReadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NotFound => "File not found",
            Self::PermissionDenied => "Permission denied reading file",
            Self::IsDirectory => "The given path is a directory",
            Self::Decode => "Failed to read file: invalid encoding or corrupted file",
        };
        f.write_str(msg)
    }
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::Read {
            path: path.into(),
            kind: ReadErrorKind::from_io(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_kind_mapping() {
        let cases = [
            (io::ErrorKind::NotFound, ReadErrorKind::NotFound),
            (io::ErrorKind::PermissionDenied, ReadErrorKind::PermissionDenied),
            (io::ErrorKind::IsADirectory, ReadErrorKind::IsDirectory),
            (io::ErrorKind::InvalidData, ReadErrorKind::Decode),
            (io::ErrorKind::UnexpectedEof, ReadErrorKind::Decode),
        ];

        for (io_kind, expected) in cases {
            let err = io::Error::from(io_kind);
            assert_eq!(ReadErrorKind::from_io(&err), expected, "{:?}", io_kind);
        }
    }

    #[test]
    fn test_messages() {
        let err = Error::FileTooLarge {
            size: 2 * 1024 * 1024,
            limit: 1024 * 1024,
        };
        assert_eq!(
            err.to_string(),
            "File too large (2097152 bytes). Maximum allowed: 1024KB"
        );

        let err = Error::read("/tmp/.env", &io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.to_string(), "File not found: /tmp/.env");
    }
}

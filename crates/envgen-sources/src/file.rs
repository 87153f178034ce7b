use std::path::Path;

use envgen_core::{Error, ReadErrorKind, Result};
use tokio::io::AsyncReadExt;

/// 1 MiB
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Check that `path` is a readable-looking regular file no larger than
/// `max_size`. Returns its size.
pub async fn inspect(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| Error::read(path, &e))?;

    if metadata.is_dir() {
        return Err(Error::Read {
            path: path.to_path_buf(),
            kind: ReadErrorKind::IsDirectory,
        });
    }

    let size = metadata.len();
    if size > max_size {
        return Err(Error::FileTooLarge {
            size,
            limit: max_size,
        });
    }

    Ok(size)
}

/// Read a `.env` file, rejecting anything over `max_size` bytes.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub async fn read_env_file(path: &Path, max_size: u64) -> Result<String> {
    inspect(path, max_size).await?;

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| Error::read(path, &e))?;

    // Cap the read in case the file grew after the size check
    let mut bytes = Vec::new();
    file.take(max_size.saturating_add(1))
        .read_to_end(&mut bytes)
        .await
        .map_err(|e| Error::read(path, &e))?;

    let size = bytes.len() as u64;
    if size > max_size {
        return Err(Error::FileTooLarge {
            size,
            limit: max_size,
        });
    }

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            tracing::warn!(
                "{} is not valid UTF-8; invalid bytes were replaced",
                path.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_small_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "A=1\r\nB=2").unwrap();

        let content = read_env_file(&path, MAX_FILE_SIZE).await.unwrap();
        assert_eq!(content, "A=1\r\nB=2");
    }

    #[tokio::test]
    async fn test_exact_limit_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, vec![b'a'; 64]).unwrap();

        assert_eq!(inspect(&path, 64).await.unwrap(), 64);
        assert_eq!(read_env_file(&path, 64).await.unwrap().len(), 64);
    }

    #[tokio::test]
    async fn test_oversized_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, vec![b'#'; 2 * 1024 * 1024]).unwrap();

        let err = read_env_file(&path, MAX_FILE_SIZE).await.unwrap_err();
        match err {
            Error::FileTooLarge { size, limit } => {
                assert_eq!(size, 2 * 1024 * 1024);
                assert_eq!(limit, MAX_FILE_SIZE);
            }
            other => panic!("Expected FileTooLarge, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_env_file(&dir.path().join(".env"), MAX_FILE_SIZE)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Read {
                kind: ReadErrorKind::NotFound,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_env_file(dir.path(), MAX_FILE_SIZE).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Read {
                kind: ReadErrorKind::IsDirectory,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, b"A=\xff\xfe\nB=2").unwrap();

        let content = read_env_file(&path, MAX_FILE_SIZE).await.unwrap();
        assert_eq!(content, "A=\u{fffd}\u{fffd}\nB=2");
    }
}

use std::path::{Path, PathBuf};

/// Find the git workspace that contains `env_file` by walking up to the
/// first directory holding `.git`. Falls back to the file's own directory.
pub fn find_workspace_root(env_file: &Path) -> PathBuf {
    let start = match env_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut current = start.clone();
    loop {
        if current.join(".git").exists() {
            return current;
        }

        if !current.pop() || current.as_os_str().is_empty() {
            return start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_enclosing_repo() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let nested = dir.path().join("services/api");
        std::fs::create_dir_all(&nested).unwrap();

        let root = find_workspace_root(&nested.join(".env"));
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_nearest_repo_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let inner = dir.path().join("vendor/lib");
        std::fs::create_dir_all(inner.join(".git")).unwrap();

        assert_eq!(find_workspace_root(&inner.join(".env")), inner);
    }

    #[test]
    fn test_bare_file_name_uses_current_dir() {
        assert_eq!(find_workspace_root(Path::new(".env")), PathBuf::from("."));
    }
}

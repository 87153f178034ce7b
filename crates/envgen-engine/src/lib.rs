//! End-to-end template generation: validate, read, redact, write.

use std::path::{Path, PathBuf};

use envgen_config::Config;
use envgen_core::{Error, Result, TemplateHeader, is_known_type};
use envgen_security::{
    EnvRedactor, RedactionInfo, is_secure_path, is_valid_env_file_name, validate_custom_name,
};
use envgen_sources::{AuthorResolver, FixedAuthor, GitAuthor, MAX_FILE_SIZE};
use tokio::io::AsyncWriteExt;

/// One generation run
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// The `.env` file to read
    pub source: PathBuf,
    /// Target file name, created next to the source
    pub target_name: String,
    /// Header date; today's local date when `None`
    pub date: Option<String>,
    /// Replace an existing target
    pub force: bool,
    /// When false, nothing is written and the template is only returned
    pub write: bool,
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub target_path: PathBuf,
    pub content: String,
    pub header: TemplateHeader,
    pub redactions: Vec<RedactionInfo>,
    pub written: bool,
}

pub struct Generator {
    max_file_size: u64,
    author: Box<dyn AuthorResolver>,
    redactor: EnvRedactor,
}

impl Generator {
    pub fn new(author: Box<dyn AuthorResolver>) -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            author,
            redactor: EnvRedactor::new(),
        }
    }

    /// Build from user config. A fixed author skips the git lookup.
    pub fn from_config(config: &Config, author: Option<String>) -> Self {
        let resolver: Box<dyn AuthorResolver> = match author {
            Some(name) => Box::new(FixedAuthor(name)),
            None => Box::new(
                GitAuthor::new()
                    .with_timeout(config.git_timeout())
                    .with_fallback(config.fallback_author.clone()),
            ),
        };

        Self::new(resolver).with_max_file_size(config.max_file_size)
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateOutcome> {
        // 1. Source checks
        let source = check_source(&request.source)?;

        // 2. Target name
        validate_target_name(&request.target_name)?;

        // 3. Read (size-bounded before any byte is parsed)
        let content = envgen_sources::read_env_file(&source, self.max_file_size).await?;
        tracing::debug!("Read {} bytes from {}", content.len(), source.display());

        // 4. Metadata
        let workspace_root = envgen_sources::find_workspace_root(&source);
        let author = self.author.resolve(&workspace_root).await;
        let date = request.date.clone().unwrap_or_else(envgen_sources::today);
        let header = TemplateHeader::new(request.target_name.as_str(), author, date);

        // 5. Redact
        let (output, redactions) = self.redactor.redact(&content, &header);
        tracing::debug!("Redacted {} assignments", redactions.len());

        // 6. Write
        let target_path = target_path(&source, &request.target_name);
        let written = if request.write {
            write_template(&target_path, &output, request.force).await?;
            tracing::info!("Wrote {}", target_path.display());
            true
        } else {
            false
        };

        Ok(GenerateOutcome {
            target_path,
            content: output,
            header,
            redactions,
            written,
        })
    }
}

/// The rules `generate` applies to a target name, in order.
pub fn validate_target_name(name: &str) -> Result<()> {
    if !is_known_type(name) {
        validate_custom_name(name)
            .map_err(|reason| Error::FileNameInvalid(format!("{:?}: {}", name, reason)))?;
    }

    if !is_valid_env_file_name(name) {
        return Err(Error::FileNameInvalid(format!("{:?}", name)));
    }

    if name.contains(['/', '\\']) {
        return Err(Error::PathUnsafe(format!(
            "target name must not contain a path separator: {:?}",
            name
        )));
    }

    Ok(())
}

fn check_source(source: &Path) -> Result<PathBuf> {
    if !source.to_string_lossy().ends_with(".env") {
        return Err(Error::NotEnvFile(source.display().to_string()));
    }

    if !is_secure_path(source) {
        return Err(Error::PathUnsafe(source.display().to_string()));
    }

    std::path::absolute(source).map_err(|_| Error::PathUnsafe(source.display().to_string()))
}

/// `target_name` has passed `validate_target_name`, so it is a single
/// component and cannot leave the source directory.
fn target_path(source: &Path, target_name: &str) -> PathBuf {
    source.parent().unwrap_or(Path::new(".")).join(target_name)
}

async fn write_template(path: &Path, content: &str, force: bool) -> Result<()> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if force {
        return tokio::fs::write(path, content).await.map_err(write_err);
    }

    // create_new makes the existence check and the create one step
    let mut file = match tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return Err(Error::TargetExists(path.to_path_buf()));
        }
        Err(e) => return Err(write_err(e)),
    };

    file.write_all(content.as_bytes()).await.map_err(write_err)?;
    file.flush().await.map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_custom_targets() {
        assert!(validate_target_name(".env.example").is_ok());
        assert!(validate_target_name(".env.dev-joao").is_ok());
    }

    #[test]
    fn test_custom_rules_apply_to_unknown_names() {
        assert!(matches!(
            validate_target_name(".env"),
            Err(Error::FileNameInvalid(_))
        ));
        assert!(matches!(
            validate_target_name(""),
            Err(Error::FileNameInvalid(_))
        ));
        assert!(matches!(
            validate_target_name("example.env"),
            Err(Error::FileNameInvalid(_))
        ));
    }

    #[test]
    fn test_reserved_and_dangerous_names() {
        assert!(matches!(
            validate_target_name(".env/AUX.txt"),
            Err(Error::FileNameInvalid(_))
        ));
        assert!(matches!(
            validate_target_name(".env.a|b"),
            Err(Error::FileNameInvalid(_))
        ));
    }

    #[test]
    fn test_separators_are_unsafe() {
        assert!(matches!(
            validate_target_name(".env/../../escape"),
            Err(Error::PathUnsafe(_))
        ));
        assert!(matches!(
            validate_target_name(".env\\x"),
            Err(Error::PathUnsafe(_))
        ));
    }

    #[test]
    fn test_check_source() {
        assert!(matches!(
            check_source(Path::new("/srv/app/.env.local")),
            Err(Error::NotEnvFile(_))
        ));
        assert!(matches!(
            check_source(Path::new("../app/.env")),
            Err(Error::PathUnsafe(_))
        ));

        let resolved = check_source(Path::new("/srv/app/prod.env")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/app/prod.env"));
    }

    #[test]
    fn test_target_path_is_next_to_source() {
        let path = target_path(Path::new("/srv/app/.env"), ".env.example");
        assert_eq!(path, PathBuf::from("/srv/app/.env.example"));
    }

    #[test]
    fn test_backup_style_names_are_accepted() {
        for name in [".env.old~", ".env..bak"] {
            assert!(validate_target_name(name).is_ok(), "{name}");
            assert_eq!(
                target_path(Path::new("/srv/app/.env"), name),
                Path::new("/srv/app").join(name)
            );
        }
    }
}

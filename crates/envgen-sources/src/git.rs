use async_trait::async_trait;
use envgen_security::is_secure_path;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::handler::AuthorResolver;

pub const AUTHOR_FALLBACK: &str = "Usuário";

pub const GIT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Reads `git config user.name` for the workspace, falling back to a
/// default name on any failure.
#[derive(Debug, Clone)]
pub struct GitAuthor {
    timeout: Duration,
    fallback: String,
}

impl GitAuthor {
    pub fn new() -> Self {
        Self {
            timeout: GIT_TIMEOUT,
            fallback: AUTHOR_FALLBACK.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    async fn lookup(&self, workspace_root: &Path) -> anyhow::Result<String> {
        if !is_secure_path(workspace_root) {
            anyhow::bail!("Unsafe workspace path: {}", workspace_root.display());
        }

        let mut cmd = Command::new("git");
        cmd.args(["config", "user.name"])
            .current_dir(workspace_root)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| anyhow::anyhow!("git config timed out after {:?}", self.timeout))?
            .map_err(|e| anyhow::anyhow!("Failed to run git config: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git config failed ({}): {}", output.status, stderr.trim());
        }

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            anyhow::bail!("git user.name is empty");
        }

        Ok(name)
    }
}

impl Default for GitAuthor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorResolver for GitAuthor {
    async fn resolve(&self, workspace_root: &Path) -> String {
        if !workspace_root.join(".git").exists() {
            tracing::debug!(
                "{} is not a git repository, using default author",
                workspace_root.display()
            );
            return self.fallback.clone();
        }

        match self.lookup(workspace_root).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Could not read git author: {}", e);
                self.fallback.clone()
            }
        }
    }
}

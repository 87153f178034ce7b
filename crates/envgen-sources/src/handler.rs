//! Author resolver trait

use async_trait::async_trait;
use std::path::Path;

/// Supplies the author name written into a template header.
///
/// Resolution never fails: implementations fall back to a default name.
#[async_trait]
pub trait AuthorResolver: Send + Sync {
    async fn resolve(&self, workspace_root: &Path) -> String;
}

/// Always answers with the same name (e.g. from `--author`)
#[derive(Debug, Clone)]
pub struct FixedAuthor(pub String);

#[async_trait]
impl AuthorResolver for FixedAuthor {
    async fn resolve(&self, _workspace_root: &Path) -> String {
        self.0.clone()
    }
}

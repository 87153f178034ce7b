use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for envgen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Largest source file accepted, in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Deadline for `git config user.name`, in milliseconds
    #[serde(default = "default_git_timeout_ms")]
    pub git_timeout_ms: u64,

    /// Author written when git has no answer
    #[serde(default = "default_fallback_author")]
    pub fallback_author: String,

    /// Target used when `--target` is omitted
    #[serde(default = "default_target")]
    pub default_target: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            git_timeout_ms: default_git_timeout_ms(),
            fallback_author: default_fallback_author(),
            default_target: default_target(),
        }
    }
}

fn default_max_file_size() -> u64 {
    1024 * 1024
}

fn default_git_timeout_ms() -> u64 {
    5000
}

fn default_fallback_author() -> String {
    "Usuário".to_string()
}

fn default_target() -> String {
    ".env.example".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "envgen", "envgen") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from(".envgen/config.toml")
        }
    }

    pub fn git_timeout(&self) -> Duration {
        Duration::from_millis(self.git_timeout_ms)
    }
}

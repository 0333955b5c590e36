//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// PSS configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name stamped as "Prepared By" on exports
    pub author: Option<String>,

    /// Currency symbol used in rendered output
    pub currency: Option<String>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/pss/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(author) = std::env::var("PSS_AUTHOR") {
            config.author = Some(author);
        }
        if let Ok(currency) = std::env::var("PSS_CURRENCY") {
            config.currency = Some(currency);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pss")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.author.is_some() {
            self.author = other.author;
        }
        if other.currency.is_some() {
            self.currency = other.currency;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Get the author name, falling back to git config or username
    pub fn author(&self) -> String {
        if let Some(ref author) = self.author {
            return author.clone();
        }

        // Try git config
        if let Ok(output) = std::process::Command::new("git")
            .args(["config", "user.name"])
            .output()
        {
            if output.status.success() {
                let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !name.is_empty() {
                    return name;
                }
            }
        }

        // Fall back to username
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }

    /// Get the currency symbol for display
    pub fn currency(&self) -> String {
        self.currency.clone().unwrap_or_else(|| "₹".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_currency() {
        let config = Config::default();
        assert_eq!(config.currency(), "₹");
    }

    #[test]
    fn test_merge_precedence() {
        let mut base = Config {
            author: Some("base".to_string()),
            currency: None,
            default_format: Some("yaml".to_string()),
        };
        base.merge(Config {
            author: Some("override".to_string()),
            currency: Some("$".to_string()),
            default_format: None,
        });

        assert_eq!(base.author.as_deref(), Some("override"));
        assert_eq!(base.currency.as_deref(), Some("$"));
        assert_eq!(base.default_format.as_deref(), Some("yaml"));
    }
}

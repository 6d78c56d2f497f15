//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::compose::{CleanupOptions, chat_link};
use crate::error::{Result, ScaffoldError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ScaffoldError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults if it does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ScaffoldError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ScaffoldError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `chat_url` must be an http(s) URL
    /// - `draft_header` must be non-blank
    pub fn validate(&self) -> Result<()> {
        if !(self.chat_url.starts_with("https://") || self.chat_url.starts_with("http://")) {
            return Err(ScaffoldError::UserError(format!(
                "config validation failed: chat_url must start with http:// or https:// (found '{}')",
                self.chat_url
            )));
        }

        if self.draft_header.trim().is_empty() {
            return Err(ScaffoldError::UserError(
                "config validation failed: draft_header must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Cleanup options for the composer.
    pub fn cleanup_options(&self) -> CleanupOptions {
        CleanupOptions {
            strip_dangling_at: self.strip_dangling_at,
        }
    }

    /// Chat link carrying `prompt`.
    pub fn chat_link(&self, prompt: &str) -> String {
        chat_link(&self.chat_url, prompt, self.chat_embed)
    }
}

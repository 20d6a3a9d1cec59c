//! Configuration file parser for ~/.config/rss-validate/config.toml.
//!
//! The config file is optional: a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields` off),
//! though we log a warning when the file contains potential typos.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::feed::RenderOptions;
use crate::validate::Options;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// SEC-014: Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// How the CLI prints a validation report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per violation.
    #[default]
    Text,
    /// A single JSON object with the verdict and all violations.
    Json,
}

/// Top-level configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Require `<day>` values to be English weekday names.
    pub strict_days: bool,

    /// Emit an XML declaration when rendering.
    pub xml_declaration: bool,

    /// Documents larger than this are refused before parsing.
    pub max_document_bytes: usize,

    /// Report format for `validate`.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_days: false,
            xml_declaration: false,
            max_document_bytes: Self::DEFAULT_MAX_DOCUMENT_BYTES,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// SEC-014: Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// 16 MB. Real-world feeds are rarely above a few hundred KB.
    pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 16 * 1024 * 1024;

    const KNOWN_KEYS: [&'static str; 4] = [
        "strict_days",
        "xml_declaration",
        "max_document_bytes",
        "format",
    ];

    /// `$HOME/.config/rss-validate/config.toml`, or `None` without `HOME`.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("rss-validate")
                .join("config.toml"),
        )
    }

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // SEC-014: Check file size before reading to prevent memory exhaustion
        // from a maliciously large or corrupted config file.
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Race condition: file deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse the TOML content first as a raw table to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            strict_days = config.strict_days,
            format = ?config.format,
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn validator_options(&self) -> Options {
        Options {
            strict_days: self.strict_days,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            xml_declaration: self.xml_declaration,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(test: &str, content: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!("rss_validate_config_test_{}", test));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.strict_days);
        assert!(!config.xml_declaration);
        assert_eq!(config.max_document_bytes, Config::DEFAULT_MAX_DOCUMENT_BYTES);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/rss_validate_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_file_returns_default() {
        let (dir, path) = write_config("empty", "");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_whitespace_only_file_returns_default() {
        let (dir, path) = write_config("whitespace", "   \n  \n  ");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let (dir, path) = write_config("partial", "strict_days = true\n");

        let config = Config::load(&path).unwrap();
        assert!(config.strict_days);
        assert_eq!(config.format, OutputFormat::Text); // default
        assert_eq!(config.max_document_bytes, Config::DEFAULT_MAX_DOCUMENT_BYTES);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_full_config() {
        let content = r#"
strict_days = true
xml_declaration = true
max_document_bytes = 4096
format = "json"
"#;
        let (dir, path) = write_config("full", content);

        let config = Config::load(&path).unwrap();
        assert!(config.strict_days);
        assert!(config.xml_declaration);
        assert_eq!(config.max_document_bytes, 4096);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.validator_options().strict_days);
        assert!(config.render_options().xml_declaration);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let (dir, path) = write_config("invalid", "this is not [valid toml");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid TOML"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let content = r#"
strict_days = false
totally_fake_key = "should not fail"
another_unknown = 42
"#;
        let (dir, path) = write_config("unknown", content);

        // Should succeed (unknown keys ignored)
        let config = Config::load(&path).unwrap();
        assert!(!config.strict_days);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_wrong_type_returns_error() {
        let (dir, path) = write_config("wrongtype", "strict_days = \"yes\"\n");
        assert!(Config::load(&path).is_err());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unknown_format_returns_error() {
        let (dir, path) = write_config("badformat", "format = \"yaml\"\n");
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
        std::fs::remove_dir_all(&dir).ok();
    }

    // SEC-014: File size limit
    #[test]
    fn test_too_large_file_rejected() {
        let (dir, path) = write_config("too_large", &"a".repeat(1_048_577));

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        assert!(err.to_string().contains("too large"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_file_at_size_limit_accepted() {
        let mut content = "strict_days = true\n".to_string();
        // Pad to exactly 1MB with TOML comments
        while content.len() < 1_048_576 - 20 {
            content.push_str("# padding comment\n");
        }
        content.truncate(1_048_576);
        let (dir, path) = write_config("at_limit", &content);

        let result = Config::load(&path);
        assert!(result.is_ok());

        std::fs::remove_dir_all(&dir).ok();
    }
}

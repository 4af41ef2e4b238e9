//! Render defaults loaded from `labeldoc.toml`.
//!
//! The file is optional. When `--config` names a file it must exist; the
//! implicit `./labeldoc.toml` is only read if present.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "labeldoc.toml";

/// Narrowest wrap width the text renderer accepts.
pub const MIN_TEXT_WIDTH: usize = 20;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output format used when `-f` is not given.
    pub format: Option<String>,
    pub html: HtmlConfig,
    pub text: TextConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    /// Page `<title>`; the first section heading when unset.
    pub title: Option<String>,
    /// Extra CSS appended after the built-in stylesheet.
    pub css: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    pub width: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { width: 80 }
    }
}

impl Config {
    /// Load from an explicit path, or from `./labeldoc.toml` if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.text.width < MIN_TEXT_WIDTH {
            anyhow::bail!(
                "text.width must be at least {}, got {}",
                MIN_TEXT_WIDTH,
                config.text.width
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert!(config.format.is_none());
        assert!(config.html.title.is_none());
        assert_eq!(config.text.width, 80);
    }

    #[test]
    fn full_config() {
        let config = Config::parse(
            "format = \"html\"\n[html]\ntitle = \"Paradigms\"\ncss = \"h1 { color: red; }\"\n[text]\nwidth = 60\n",
        )
        .unwrap();
        assert_eq!(config.format.as_deref(), Some("html"));
        assert_eq!(config.html.title.as_deref(), Some("Paradigms"));
        assert_eq!(config.html.css.as_deref(), Some("h1 { color: red; }"));
        assert_eq!(config.text.width, 60);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(Config::parse("colour = \"blue\"\n").is_err());
    }

    #[test]
    fn narrow_width_rejected() {
        let err = Config::parse("[text]\nwidth = 5\n").unwrap_err();
        assert!(err.to_string().contains("at least 20"));
    }

    #[test]
    fn explicit_missing_file_fails() {
        let err = Config::load(Some(Path::new("/nonexistent/labeldoc.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"format = \"text\"\n").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.format.as_deref(), Some("text"));
    }
}

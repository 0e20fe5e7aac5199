/// Runtime configuration
///
/// Read from `~/.termfolio/config.json` unless a path is given. Every field
/// is optional; a missing file means defaults.

use crate::error::{PortfolioError, Result};
use crate::registry::content::HEADER_HOST;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Shortest clock period we accept
const MIN_CLOCK_PERIOD_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub enabled: bool,
    pub period_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            period_ms: 1000,
        }
    }
}

impl ClockConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms.max(MIN_CLOCK_PERIOD_MS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub header: String,
    pub prompt: String,
    pub color: ColorMode,
    pub open_links: bool,
    pub clock: ClockConfig,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: HEADER_HOST.to_string(),
            prompt: "$".to_string(),
            color: ColorMode::Auto,
            open_links: true,
            clock: ClockConfig::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default location: `~/.termfolio/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            PortfolioError::Config("Could not determine home directory".to_string())
        })?;

        Ok(home.join(".termfolio").join("config.json"))
    }

    /// Load from `path`, or from the default location when `None`
    ///
    /// # Returns
    /// * `Ok(Config)` - Parsed config, or defaults if the file is absent
    /// * `Err(PortfolioError)` - File exists but cannot be read or parsed
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Ok(p) => p,
                // No home directory: nothing to read
                Err(_) => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(PortfolioError::Config("prompt must not be blank".to_string()));
        }
        Ok(())
    }

    /// Whether to emit ANSI colors
    ///
    /// `auto` respects `NO_COLOR` and only colors a terminal.
    pub fn use_color(&self, is_terminal: bool) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Log filter, `TERMFOLIO_LOG` winning over the file
    pub fn log_filter(&self) -> String {
        std::env::var("TERMFOLIO_LOG").unwrap_or_else(|_| self.log_level.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.header, "prajapati@sankalp:~");
        assert_eq!(config.prompt, "$");
        assert!(config.open_links);
        assert_eq!(config.clock.period(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_json(r#"{ "color": "never", "clock": { "enabled": false } }"#)
            .unwrap();

        assert_eq!(config.color, ColorMode::Never);
        assert!(!config.clock.enabled);
        assert_eq!(config.clock.period_ms, 1000);
        assert_eq!(config.prompt, "$");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::from_json(r#"{ "colour": "never" }"#);
        assert!(matches!(result, Err(PortfolioError::Serialization(_))));
    }

    #[test]
    fn test_blank_prompt_rejected() {
        let result = Config::from_json(r#"{ "prompt": "  " }"#);
        assert!(matches!(result, Err(PortfolioError::Config(_))));
    }

    #[test]
    fn test_clock_period_clamped() {
        let config = Config::from_json(r#"{ "clock": { "period_ms": 5 } }"#).unwrap();
        assert_eq!(config.clock.period(), Duration::from_millis(100));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "header": "me@box:~", "open_links": false }}"#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.header, "me@box:~");
        assert!(!config.open_links);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("nope.json").as_path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_color_modes() {
        let mut config = Config::default();

        config.color = ColorMode::Always;
        assert!(config.use_color(false));

        config.color = ColorMode::Never;
        assert!(!config.use_color(true));

        config.color = ColorMode::Auto;
        assert!(!config.use_color(false));
    }
}

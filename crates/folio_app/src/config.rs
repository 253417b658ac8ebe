//! Folio configuration file handling
//!
//! `folio.toml` is optional. Every section and field has a default, so an
//! empty file and a missing file load the same configuration.

use std::path::{Path, PathBuf};

use folio_theme::{ThemeError, ThemeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding `default_theme`
pub const THEME_ENV: &str = "FOLIO_THEME";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level configuration (folio.toml)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme shown on first render
    pub default_theme: ThemeId,
    /// Content file; the bundled content is used when unset
    pub content_path: Option<PathBuf>,
    pub viewport: ViewportConfig,
    pub picker: PickerConfig,
    pub contact: ContactConfig,
    pub now_playing: NowPlayingConfig,
    pub analytics: AnalyticsConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Widths at or below this are treated as mobile
    pub mobile_breakpoint: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: folio_core::viewport::MOBILE_BREAKPOINT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PickerConfig {
    /// How long the tooltip stays up after a tap on mobile
    pub tooltip_ms: u64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self { tooltip_ms: 1_600 }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    /// How long "sent" or "failed" stays on the button
    pub status_display_ms: u64,
    /// How long the copied-email check mark stays up
    pub copied_email_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            status_display_ms: 5_000,
            copied_email_ms: 2_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NowPlayingConfig {
    pub enabled: bool,
    pub poll_interval_ms: u64,
}

impl Default for NowPlayingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval_ms: 5_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub engagement_interval_ms: u64,
    pub inactivity_timeout_ms: u64,
    /// Scroll-depth percentages reported once each
    pub milestones: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            engagement_interval_ms: 10_000,
            inactivity_timeout_ms: 30_000,
            milestones: vec![25, 50, 75, 100],
            measurement_id: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(theme) = lookup(THEME_ENV).filter(|value| !value.trim().is_empty()) {
            self.default_theme = theme.parse()?;
            tracing::debug!(theme = %self.default_theme, "theme overridden from environment");
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.mobile_breakpoint <= 0.0 {
            return Err(invalid("viewport.mobile_breakpoint", "must be positive"));
        }
        if self.now_playing.poll_interval_ms == 0 {
            return Err(invalid("now_playing.poll_interval_ms", "must be positive"));
        }
        if self.analytics.engagement_interval_ms == 0 {
            return Err(invalid("analytics.engagement_interval_ms", "must be positive"));
        }
        if self.analytics.inactivity_timeout_ms == 0 {
            return Err(invalid("analytics.inactivity_timeout_ms", "must be positive"));
        }
        if let Some(bad) = self
            .analytics
            .milestones
            .iter()
            .find(|&&m| m == 0 || m > 100)
        {
            return Err(invalid(
                "analytics.milestones",
                format!("{bad} is outside 1..=100"),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.picker.tooltip_ms, 1_600);
        assert_eq!(config.analytics.milestones, vec![25, 50, 75, 100]);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
default_theme = "synthwave"

[analytics]
enabled = false

[now_playing]
poll_interval_ms = 10000
"#,
        )
        .unwrap();
        assert_eq!(config.default_theme, ThemeId::Synthwave);
        assert!(!config.analytics.enabled);
        assert_eq!(config.analytics.inactivity_timeout_ms, 30_000);
        assert_eq!(config.now_playing.poll_interval_ms, 10_000);
        assert!(config.now_playing.enabled);
    }

    #[test]
    fn environment_overrides_theme() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| (key == THEME_ENV).then(|| "terminal".to_string()))
            .unwrap();
        assert_eq!(config.default_theme, ThemeId::Terminal);

        let err = config
            .apply_overrides(|_| Some("vaporwave".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Theme(ThemeError::UnknownTheme(_))));
        assert_eq!(config.default_theme, ThemeId::Terminal);
    }

    #[test]
    fn rejects_out_of_range_milestones() {
        let mut config = AppConfig::default();
        config.analytics.milestones.push(120);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "analytics.milestones", .. })
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default("/nonexistent/folio.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}

//! Theme registry
//!
//! The set of themes is closed: [`ThemeId`] enumerates them and the registry
//! holds exactly one [`ThemeConfig`] per id, so lookup by id cannot fail.
//! Parsing an id from user input is the only fallible step.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::theme::{ThemeConfig, ThemeError};
use crate::themes;

static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

/// Registered theme identifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeId {
    #[default]
    Brutalism,
    LiquidGlass,
    Minimalism,
    Terminal,
    Synthwave,
}

impl ThemeId {
    /// Stable id for config, render keys and analytics
    pub fn id(self) -> &'static str {
        match self {
            Self::Brutalism => "brutalism",
            Self::LiquidGlass => "liquid_glass",
            Self::Minimalism => "minimalism",
            Self::Terminal => "terminal",
            Self::Synthwave => "synthwave",
        }
    }

    /// Id reported to analytics; camel case as dashboards already key on it
    pub fn analytics_id(self) -> &'static str {
        match self {
            Self::LiquidGlass => "liquidGlass",
            other => other.id(),
        }
    }

    /// User-facing display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Brutalism => "Neo Brutalism",
            Self::LiquidGlass => "Liquid Glass",
            Self::Minimalism => "Minimalism",
            Self::Terminal => "Terminal",
            Self::Synthwave => "Synthwave",
        }
    }

    /// Every theme, in picker order
    pub fn all() -> &'static [ThemeId] {
        const THEMES: [ThemeId; 5] = [
            ThemeId::Brutalism,
            ThemeId::LiquidGlass,
            ThemeId::Minimalism,
            ThemeId::Terminal,
            ThemeId::Synthwave,
        ];
        &THEMES
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Build this theme's configuration
    pub fn config(self) -> ThemeConfig {
        match self {
            Self::Brutalism => themes::brutalism::theme(),
            Self::LiquidGlass => themes::liquid_glass::theme(),
            Self::Minimalism => themes::minimalism::theme(),
            Self::Terminal => themes::terminal::theme(),
            Self::Synthwave => themes::synthwave::theme(),
        }
    }
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    /// Accepts the stable id case-insensitively, with `-` or `_` separators
    /// or in camel case (`liquidGlass`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .flat_map(char::to_lowercase)
            .collect();

        Self::all()
            .iter()
            .copied()
            .find(|id| id.id().replace('_', "") == normalized)
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

/// Immutable table of every theme configuration
#[derive(Debug)]
pub struct ThemeRegistry {
    themes: Vec<ThemeConfig>,
}

impl ThemeRegistry {
    /// Build every theme
    pub fn new() -> Self {
        let themes = ThemeId::all().iter().map(|id| id.config()).collect();
        tracing::debug!(count = ThemeId::all().len(), "theme registry built");
        Self { themes }
    }

    /// Process-wide registry, built on first access
    pub fn global() -> &'static ThemeRegistry {
        REGISTRY.get_or_init(ThemeRegistry::new)
    }

    pub fn get(&self, id: ThemeId) -> &ThemeConfig {
        &self.themes[id.index()]
    }

    /// Resolve a user-supplied id string
    pub fn lookup(&self, id: &str) -> Result<&ThemeConfig, ThemeError> {
        id.parse().map(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeConfig> {
        self.themes.iter()
    }

    /// Validate every theme, collecting all failures
    pub fn validate(&self) -> Result<(), Vec<ThemeError>> {
        let errors: Vec<_> = self.iter().filter_map(|t| t.validate().err()).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_leniently() {
        assert_eq!("liquid_glass".parse::<ThemeId>(), Ok(ThemeId::LiquidGlass));
        assert_eq!("liquidGlass".parse::<ThemeId>(), Ok(ThemeId::LiquidGlass));
        assert_eq!("Liquid-Glass".parse::<ThemeId>(), Ok(ThemeId::LiquidGlass));
        assert_eq!(" SYNTHWAVE ".parse::<ThemeId>(), Ok(ThemeId::Synthwave));
        assert_eq!(
            "vaporwave".parse::<ThemeId>(),
            Err(ThemeError::UnknownTheme("vaporwave".into()))
        );
    }

    #[test]
    fn registry_is_indexed_by_id() {
        let registry = ThemeRegistry::global();
        for id in ThemeId::all() {
            assert_eq!(registry.get(*id).id, *id);
        }
        assert_eq!(registry.iter().count(), ThemeId::all().len());
    }

    #[test]
    fn analytics_ids_round_trip_through_parsing() {
        assert_eq!(ThemeId::LiquidGlass.analytics_id(), "liquidGlass");
        assert_eq!(ThemeId::Terminal.analytics_id(), "terminal");
        for id in ThemeId::all() {
            assert_eq!(id.analytics_id().parse::<ThemeId>(), Ok(*id));
        }
    }

    #[test]
    fn lookup_reports_unknown_ids() {
        let registry = ThemeRegistry::global();
        assert_eq!(registry.lookup("terminal").map(|t| t.id), Ok(ThemeId::Terminal));
        assert!(matches!(
            registry.lookup("nope"),
            Err(ThemeError::UnknownTheme(id)) if id == "nope"
        ));
    }
}

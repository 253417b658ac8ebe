//! Active theme selection
//!
//! Selection is transient UI state owned by the application root. Every
//! change bumps a generation counter; the layout subtree is keyed on
//! `{theme}-{generation}` so a switch always remounts instead of diffing
//! against state captured under the previous theme.

use serde::{Deserialize, Serialize};

use crate::registry::{ThemeId, ThemeRegistry};
use crate::theme::ThemeConfig;

/// A completed theme switch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChange {
    pub from: ThemeId,
    pub to: ThemeId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSelection {
    active: ThemeId,
    generation: u64,
}

impl ThemeSelection {
    pub fn new(initial: ThemeId) -> Self {
        Self {
            active: initial,
            generation: 0,
        }
    }

    pub fn active(&self) -> ThemeId {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Configuration of the active theme
    pub fn config(&self) -> &'static ThemeConfig {
        ThemeRegistry::global().get(self.active)
    }

    /// Switch themes; `None` when `id` is already active
    pub fn select(&mut self, id: ThemeId) -> Option<ThemeChange> {
        if id == self.active {
            return None;
        }
        let change = ThemeChange {
            from: self.active,
            to: id,
        };
        self.active = id;
        self.generation += 1;
        tracing::debug!(from = %change.from, to = %change.to, generation = self.generation, "theme selected");
        Some(change)
    }

    /// Key for the themed subtree; changes on every switch
    pub fn remount_key(&self) -> String {
        format!("{}-{}", self.active.id(), self.generation)
    }
}

impl Default for ThemeSelection {
    fn default() -> Self {
        Self::new(ThemeId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reselecting_is_a_no_op() {
        let mut selection = ThemeSelection::new(ThemeId::Minimalism);
        assert_eq!(selection.select(ThemeId::Minimalism), None);
        assert_eq!(selection.remount_key(), "minimalism-0");
    }

    #[test]
    fn switch_reports_change_and_remounts() {
        let mut selection = ThemeSelection::new(ThemeId::Minimalism);
        let change = selection.select(ThemeId::Synthwave);
        assert_eq!(
            change,
            Some(ThemeChange {
                from: ThemeId::Minimalism,
                to: ThemeId::Synthwave
            })
        );
        assert_eq!(selection.remount_key(), "synthwave-1");
        assert_eq!(selection.config().id, ThemeId::Synthwave);

        selection.select(ThemeId::Minimalism);
        assert_eq!(selection.remount_key(), "minimalism-2");
    }
}

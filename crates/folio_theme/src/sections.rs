//! Page sections and per-theme section support

use std::fmt::{Display, Formatter};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Top-level page section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Journey,
    Artworks,
    Lifestyle,
    Connect,
}

impl Section {
    /// Stable id used for anchors and render keys
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Journey => "journey",
            Self::Artworks => "artworks",
            Self::Lifestyle => "lifestyle",
            Self::Connect => "connect",
        }
    }

    /// Short label shown by the section selector
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Journey => "Dev",
            Self::Artworks => "Art",
            Self::Lifestyle => "Lifestyle",
            Self::Connect => "Connect",
        }
    }

    /// Sections in page order
    pub fn all() -> &'static [Section] {
        const SECTIONS: [Section; 6] = [
            Section::Home,
            Section::About,
            Section::Journey,
            Section::Artworks,
            Section::Lifestyle,
            Section::Connect,
        ];
        &SECTIONS
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How richly a theme renders a section
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "support", rename_all = "snake_case")]
pub enum SectionSupport {
    #[default]
    Full,
    /// The section renders an explicit placeholder element
    Placeholder { message: String },
}

impl SectionSupport {
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self::Placeholder {
            message: message.into(),
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Support table; sections without an entry are fully supported
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTable {
    entries: FxHashMap<Section, SectionSupport>,
}

impl SectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: mark a section as placeholder-only
    pub fn placeholder(mut self, section: Section, message: impl Into<String>) -> Self {
        self.entries
            .insert(section, SectionSupport::placeholder(message));
        self
    }

    pub fn support(&self, section: Section) -> &SectionSupport {
        static FULL: SectionSupport = SectionSupport::Full;
        self.entries.get(&section).unwrap_or(&FULL)
    }

    /// Placeholder sections in page order
    pub fn placeholders(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::all()
            .iter()
            .filter_map(|section| match self.entries.get(section) {
                Some(SectionSupport::Placeholder { message }) => Some((*section, message.as_str())),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_are_full() {
        let table = SectionTable::new().placeholder(Section::Lifestyle, "soon");
        assert!(table.support(Section::Home).is_full());
        assert_eq!(
            table.support(Section::Lifestyle),
            &SectionSupport::placeholder("soon")
        );
        assert_eq!(
            table.placeholders().collect::<Vec<_>>(),
            vec![(Section::Lifestyle, "soon")]
        );
    }

    #[test]
    fn labels_and_ids() {
        assert_eq!(Section::Journey.id(), "journey");
        assert_eq!(Section::Journey.label(), "Dev");
        assert_eq!(Section::all().len(), 6);
    }
}

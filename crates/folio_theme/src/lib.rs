//! Folio Theme System
//!
//! The contract every portfolio theme fulfils, plus the built-in themes.
//!
//! # Overview
//!
//! A theme is a single [`ThemeConfig`] value. It carries everything shared
//! layout code needs to skin the page:
//! - **Tokens**: palette, fonts, style descriptors for every UI element
//! - **Animations**: entrance variants for badge, heading, body and links
//! - **Interaction**: tilt, glare and scale tuning for the profile card
//! - **Mobile fallback**: background and animation switch for small viewports
//! - **Background**: a renderer producing decorative layers
//! - **Sections**: which page sections the theme renders in full
//!
//! # Quick Start
//!
//! ```rust
//! use folio_theme::{ThemeId, ThemeRegistry};
//!
//! let registry = ThemeRegistry::global();
//! let theme = registry.get(ThemeId::Synthwave);
//! assert_eq!(theme.name, "Synthwave");
//!
//! let theme = registry.lookup("liquidGlass").unwrap();
//! assert_eq!(theme.id, ThemeId::LiquidGlass);
//! ```
//!
//! # Switching
//!
//! [`ThemeSelection`] holds the active id. Every switch bumps a generation
//! counter used to key the themed subtree, so per-theme state never leaks
//! across a switch.

pub mod background;
pub mod registry;
pub mod sections;
pub mod state;
pub mod theme;
pub mod tokens;

mod themes;

// Re-export commonly used types
pub use background::{BackgroundContext, BackgroundLayer, BackgroundRenderer, LayerKind};
pub use registry::{ThemeId, ThemeRegistry};
pub use sections::{Section, SectionSupport, SectionTable};
pub use state::{ThemeChange, ThemeSelection};
pub use theme::{ThemeConfig, ThemeError};
pub use tokens::*;

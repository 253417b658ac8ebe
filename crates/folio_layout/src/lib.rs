//! Folio Layout
//!
//! Turns a theme and the portfolio content into a render tree.
//!
//! # Overview
//!
//! - **Render tree**: [`Element`] nodes with classes, styles and motion data
//! - **Content**: the TOML-backed [`Content`] model
//! - **Layout**: [`ThemeLayout::render`], a pure function of theme, content
//!   and [`LayoutState`]
//! - **Profile card**: [`CardController`], the tilt, glare and scale springs
//!
//! # Example
//!
//! ```rust
//! use folio_layout::{Content, LayoutState, ThemeLayout, YearMonth};
//! use folio_theme::{ThemeId, ThemeRegistry};
//!
//! let content = Content::embedded().unwrap();
//! let theme = ThemeRegistry::global().get(ThemeId::Brutalism);
//! let state = LayoutState::new("brutalism-0", YearMonth::current());
//!
//! let tree = ThemeLayout::render(theme, &content, &state);
//! assert!(tree.find_by_key("profile-card").is_some());
//! assert!(tree.find_by_key("section-lifestyle").is_some());
//! ```

pub mod card;
pub mod components;
pub mod content;
pub mod element;
pub mod layout;
pub mod media;
pub mod timeline;
pub mod views;

pub use card::{fit_scale, tilt_for_pointer, CardController, CardPadding, CardTransform};
pub use content::{Content, ContentError};
pub use element::{Element, Tag};
pub use layout::{LayoutState, ThemeLayout};
pub use timeline::{TimelineEnd, YearMonth};
pub use views::{FormStatus, FormView, NowPlayingView, TrackView};

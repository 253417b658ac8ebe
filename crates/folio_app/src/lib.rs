//! Folio Application
//!
//! The application root and everything that talks to the outside world:
//!
//! - **[`PortfolioApp`]**: theme selection, input routing, timers and
//!   rendering
//! - **Integrations**: analytics, contact messages and "now playing"
//! - **Configuration**: the optional `folio.toml`
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use folio_app::integrations::RecordingSink;
//! use folio_app::{AppConfig, PortfolioApp};
//! use folio_layout::Content;
//! use folio_theme::ThemeId;
//!
//! let content = Arc::new(Content::embedded().unwrap());
//! let sink = RecordingSink::new();
//! let mut app = PortfolioApp::new(AppConfig::default(), content, Box::new(sink.clone()));
//!
//! app.start();
//! app.select_theme(ThemeId::Synthwave);
//! assert_eq!(app.remount_key(), "synthwave-1");
//! assert_eq!(sink.events().len(), 2);
//! ```

pub mod app;
pub mod config;
pub mod integrations;
pub mod picker;

pub use app::PortfolioApp;
pub use config::{AppConfig, ConfigError};
pub use integrations::IntegrationError;
pub use picker::{ThemePicker, TransientTooltip};

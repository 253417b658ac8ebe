//! Third-party integrations
//!
//! Each integration is a trait seam plus the state that consumes it. No
//! network transport ships here; hosts plug their own implementations in.

pub mod analytics;
pub mod contact;
pub mod now_playing;

use thiserror::Error;

pub use analytics::{
    AnalyticsEvent, AnalyticsSink, AnalyticsTracker, ChannelSink, RecordingSink, TracingSink,
};
pub use contact::{ContactForm, ContactPayload, MessageSender, TracingSender};
pub use now_playing::{
    parse_currently_playing, NowPlayingPoller, NowPlayingSource, NowPlayingState, PollResult,
    ScriptedSource, Track,
};

/// Failure reported by an integration
///
/// Integrations never fail the render path; callers degrade to a fallback
/// view and log.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegrationError {
    #[error("integration is not configured: {0}")]
    Unavailable(String),

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Payload(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for IntegrationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err.to_string())
    }
}

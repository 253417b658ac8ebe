//! View models for the interactive connect widgets
//!
//! The application owns the state machines and integrations; layout only
//! sees these snapshots.

use folio_theme::FormStyles;
use serde::{Deserialize, Serialize};

pub const PLAYING_ICON: &str = "/playback/soundwave.gif";
pub const PAUSED_ICON: &str = "/playback/pause.png";
pub const OFFLINE_ICON: &str = "/playback/offline.png";

/// Submission state of the contact form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl FormStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Sent => "Message sent successfully!",
            Self::Failed => "Failed to send, try again?",
        }
    }

    /// The button only accepts clicks while idle
    pub fn is_disabled(self) -> bool {
        self != Self::Idle
    }

    /// State class appended to the button class
    pub fn class(self, styles: &FormStyles) -> &str {
        match self {
            Self::Idle | Self::Sending => &styles.idle_class,
            Self::Sent => &styles.success_class,
            Self::Failed => &styles.error_class,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub email: String,
    pub message: String,
    pub status: FormStatus,
    /// Shown under the form when input was rejected before sending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<String>,
}

impl FormView {
    pub const PROMPT: &'static str = "Leave a message and I'll get back to you ASAP!";
    pub const EMAIL_LABEL: &'static str = "Email";
    pub const MESSAGE_LABEL: &'static str = "Message";
    pub const EMAIL_PLACEHOLDER: &'static str = "your.email@example.com";
    pub const MESSAGE_PLACEHOLDER: &'static str = "Your message here...";
}

/// Track as displayed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackView {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub album_image_url: String,
    pub song_url: String,
    pub is_playing: bool,
    pub progress_ms: u64,
    pub duration_ms: u64,
}

impl TrackView {
    /// Playback position in percent, capped at 100
    pub fn progress_percent(&self) -> f32 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        (self.progress_ms as f32 / self.duration_ms as f32 * 100.0).min(100.0)
    }

    pub fn status_icon(&self) -> &'static str {
        if self.is_playing {
            PLAYING_ICON
        } else {
            PAUSED_ICON
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum NowPlayingView {
    /// No response yet
    #[default]
    Loading,
    Offline,
    Track(TrackView),
}

impl NowPlayingView {
    pub const OFFLINE_TITLE: &'static str = "Offline";
    pub const OFFLINE_CAPTION: &'static str = "Not playing";
}

//! "Now playing" integration
//!
//! A [`NowPlayingSource`] is polled on a fixed interval by the
//! [`NowPlayingPoller`]; results reach the app through a `watch` channel and
//! are folded into a [`NowPlayingState`], which keeps the last known track
//! through transient empty or failed responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use folio_layout::{NowPlayingView, TrackView};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::IntegrationError;

const UNKNOWN_TRACK: &str = "Unknown Track";
const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_ALBUM: &str = "Unknown Album";
const NO_LINK: &str = "#";
/// Preferred album art size
const MAX_ART_HEIGHT: u32 = 300;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub album_image_url: String,
    pub song_url: String,
    pub is_playing: bool,
    pub progress_ms: u64,
    pub duration_ms: u64,
}

impl From<&Track> for TrackView {
    fn from(track: &Track) -> Self {
        TrackView {
            name: track.name.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            album_image_url: track.album_image_url.clone(),
            song_url: track.song_url.clone(),
            is_playing: track.is_playing,
            progress_ms: track.progress_ms.min(track.duration_ms),
            duration_ms: track.duration_ms,
        }
    }
}

/// One poll outcome; `Ok(None)` means nothing is playing
pub type PollResult = Result<Option<Track>, IntegrationError>;

#[async_trait]
pub trait NowPlayingSource: Send + Sync {
    async fn current_track(&self) -> PollResult;
}

/// Replays a fixed list of responses, repeating the last one
#[derive(Debug)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<PollResult>>,
}

impl ScriptedSource {
    pub fn new(responses: impl IntoIterator<Item = PollResult>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl NowPlayingSource for ScriptedSource {
    async fn current_track(&self) -> PollResult {
        let mut responses = self
            .responses
            .lock()
            .map_err(|_| IntegrationError::Unavailable("scripted source poisoned".into()))?;
        match responses.len() {
            0 => Ok(None),
            1 => responses.front().cloned().unwrap_or(Ok(None)),
            _ => responses.pop_front().unwrap_or(Ok(None)),
        }
    }
}

#[derive(Deserialize)]
struct PlayerPayload {
    #[serde(default)]
    is_playing: Option<bool>,
    #[serde(default)]
    progress_ms: Option<u64>,
    #[serde(default)]
    item: Option<ItemPayload>,
}

#[derive(Deserialize)]
struct ItemPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    duration_ms: Option<u64>,
    #[serde(default)]
    artists: Vec<NamedPayload>,
    #[serde(default)]
    album: Option<AlbumPayload>,
    #[serde(default)]
    external_urls: Option<ExternalUrls>,
}

#[derive(Deserialize)]
struct NamedPayload {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct AlbumPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    images: Vec<ImagePayload>,
}

#[derive(Deserialize)]
struct ImagePayload {
    url: String,
    #[serde(default)]
    height: Option<u32>,
}

#[derive(Deserialize)]
struct ExternalUrls {
    #[serde(default)]
    spotify: Option<String>,
}

fn non_empty(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Decode a "currently playing" player response.
///
/// `204 No Content` and responses without an item mean nothing is playing.
/// Missing fields fall back to placeholder text rather than failing.
pub fn parse_currently_playing(status: u16, body: &str) -> PollResult {
    if status == 204 {
        return Ok(None);
    }
    if !(200..300).contains(&status) {
        return Err(IntegrationError::Status(status));
    }

    let payload: PlayerPayload = serde_json::from_str(body)?;
    let Some(item) = payload.item else {
        return Ok(None);
    };

    let artist = item
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let (album, album_image_url) = match item.album {
        Some(album) => {
            let image = album
                .images
                .iter()
                .find(|img| img.height.is_some_and(|h| h <= MAX_ART_HEIGHT))
                .or_else(|| album.images.last())
                .map(|img| img.url.clone())
                .unwrap_or_default();
            (non_empty(album.name, UNKNOWN_ALBUM), image)
        }
        None => (UNKNOWN_ALBUM.to_string(), String::new()),
    };

    Ok(Some(Track {
        name: non_empty(item.name, UNKNOWN_TRACK),
        artist: non_empty(Some(artist), UNKNOWN_ARTIST),
        album,
        album_image_url,
        song_url: non_empty(item.external_urls.and_then(|u| u.spotify), NO_LINK),
        is_playing: payload.is_playing.unwrap_or(false),
        progress_ms: payload.progress_ms.unwrap_or(0),
        duration_ms: item.duration_ms.unwrap_or(0),
    }))
}

/// Stale-while-revalidate display state
///
/// Only the first response can produce `Offline`. Once a track is known, an
/// empty or failed poll keeps showing it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NowPlayingState {
    view: NowPlayingView,
}

impl NowPlayingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &NowPlayingView {
        &self.view
    }

    /// Derived playing flag for consumers that only need a boolean
    pub fn is_playing(&self) -> bool {
        matches!(&self.view, NowPlayingView::Track(track) if track.is_playing)
    }

    pub fn apply(&mut self, result: PollResult) {
        match result {
            Ok(Some(track)) => self.accept(&track),
            Ok(None) => self.miss("nothing playing"),
            Err(err) => {
                tracing::warn!(error = %err, "now playing poll failed");
                self.miss("poll failed");
            }
        }
    }

    fn accept(&mut self, track: &Track) {
        if let NowPlayingView::Track(current) = &mut self.view {
            let same = current.name == track.name
                && current.artist == track.artist
                && current.is_playing == track.is_playing;
            if same {
                current.duration_ms = track.duration_ms;
                current.progress_ms = track.progress_ms.min(track.duration_ms);
                return;
            }
        }
        tracing::debug!(name = %track.name, playing = track.is_playing, "now playing changed");
        self.view = NowPlayingView::Track(track.into());
    }

    fn miss(&mut self, reason: &str) {
        if self.view == NowPlayingView::Loading {
            tracing::debug!(reason, "now playing offline");
            self.view = NowPlayingView::Offline;
        }
    }

    /// Advance local playback progress between polls
    pub fn tick(&mut self, elapsed_ms: u64) {
        if let NowPlayingView::Track(track) = &mut self.view {
            if track.is_playing {
                track.progress_ms = (track.progress_ms + elapsed_ms).min(track.duration_ms);
            }
        }
    }
}

/// Polls a source on a fixed interval until dropped
///
/// The first poll runs immediately. Dropping the handle aborts the task, so
/// no poll outlives its owner.
#[derive(Debug)]
pub struct NowPlayingPoller {
    rx: watch::Receiver<Option<PollResult>>,
    task: JoinHandle<()>,
}

impl NowPlayingPoller {
    /// Spawn the polling task on the current tokio runtime
    pub fn spawn(source: Arc<dyn NowPlayingSource>, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(None);
        let period = interval.max(Duration::from_millis(1));

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let result = source.current_track().await;
                tracing::trace!(ok = result.is_ok(), "now playing polled");
                if tx.send(Some(result)).is_err() {
                    break;
                }
            }
        });

        Self { rx, task }
    }

    /// Receiver of poll results; `None` until the first poll completes
    pub fn subscribe(&self) -> watch::Receiver<Option<PollResult>> {
        self.rx.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for NowPlayingPoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, playing: bool, progress_ms: u64) -> Track {
        Track {
            name: name.into(),
            artist: "Artist".into(),
            album: "Album".into(),
            album_image_url: String::new(),
            song_url: "#".into(),
            is_playing: playing,
            progress_ms,
            duration_ms: 180_000,
        }
    }

    fn shown(state: &NowPlayingState) -> Option<&TrackView> {
        match state.view() {
            NowPlayingView::Track(track) => Some(track),
            _ => None,
        }
    }

    #[test]
    fn first_empty_response_is_offline() {
        let mut state = NowPlayingState::new();
        assert_eq!(state.view(), &NowPlayingView::Loading);
        state.apply(Ok(None));
        assert_eq!(state.view(), &NowPlayingView::Offline);
        state.apply(Ok(Some(track("A", true, 0))));
        assert!(state.is_playing());
    }

    #[test]
    fn transient_gaps_keep_last_track() {
        let mut state = NowPlayingState::new();
        state.apply(Ok(Some(track("A", true, 1_000))));
        state.apply(Ok(None));
        assert_eq!(shown(&state).map(|t| t.name.as_str()), Some("A"));
        state.apply(Err(IntegrationError::Status(502)));
        assert_eq!(shown(&state).map(|t| t.name.as_str()), Some("A"));
        state.apply(Ok(Some(track("A", true, 11_000))));
        assert_eq!(shown(&state).map(|t| t.progress_ms), Some(11_000));
    }

    #[test]
    fn same_track_updates_progress_only() {
        let mut state = NowPlayingState::new();
        state.apply(Ok(Some(track("A", true, 1_000))));
        let mut newer = track("A", true, 6_000);
        newer.album_image_url = "https://img/new.jpg".into();
        state.apply(Ok(Some(newer)));
        let shown = shown(&state).unwrap();
        assert_eq!(shown.progress_ms, 6_000);
        assert!(shown.album_image_url.is_empty());

        state.apply(Ok(Some(track("A", false, 6_000))));
        assert!(!state.is_playing());
    }

    #[test]
    fn local_progress_is_capped() {
        let mut state = NowPlayingState::new();
        state.apply(Ok(Some(track("A", true, 178_000))));
        state.tick(1_000);
        assert_eq!(shown(&state).unwrap().progress_ms, 179_000);
        state.tick(5_000);
        assert_eq!(shown(&state).unwrap().progress_ms, 180_000);

        state.apply(Ok(Some(track("B", false, 0))));
        state.tick(5_000);
        assert_eq!(shown(&state).unwrap().progress_ms, 0);
    }

    #[test]
    fn parses_player_payload() {
        let body = r#"{
            "is_playing": true,
            "progress_ms": 42000,
            "item": {
                "name": "Nightcall",
                "duration_ms": 258000,
                "artists": [{"name": "Kavinsky"}, {"name": "Lovefoxxx"}],
                "album": {
                    "name": "OutRun",
                    "images": [
                        {"url": "https://i/640", "height": 640},
                        {"url": "https://i/300", "height": 300},
                        {"url": "https://i/64", "height": 64}
                    ]
                },
                "external_urls": {"spotify": "https://open.spotify.com/track/1"}
            }
        }"#;
        let track = parse_currently_playing(200, body).unwrap().unwrap();
        assert_eq!(track.artist, "Kavinsky, Lovefoxxx");
        assert_eq!(track.album_image_url, "https://i/300");
        assert_eq!(track.progress_ms, 42_000);
        assert!(track.is_playing);
    }

    #[test]
    fn sparse_payload_uses_defaults() {
        let body = r#"{"item": {"album": {"images": [{"url": "https://i/640", "height": 640}]}}}"#;
        let track = parse_currently_playing(200, body).unwrap().unwrap();
        assert_eq!(track.name, UNKNOWN_TRACK);
        assert_eq!(track.artist, UNKNOWN_ARTIST);
        assert_eq!(track.album, UNKNOWN_ALBUM);
        assert_eq!(track.album_image_url, "https://i/640");
        assert_eq!(track.song_url, NO_LINK);
        assert!(!track.is_playing);
    }

    #[test]
    fn empty_and_failed_responses() {
        assert_eq!(parse_currently_playing(204, ""), Ok(None));
        assert_eq!(parse_currently_playing(200, r#"{"is_playing": false}"#), Ok(None));
        assert_eq!(
            parse_currently_playing(401, "{}"),
            Err(IntegrationError::Status(401))
        );
        assert!(matches!(
            parse_currently_playing(200, "not json"),
            Err(IntegrationError::Payload(_))
        ));
    }

    #[tokio::test]
    async fn scripted_source_repeats_last() {
        let source = ScriptedSource::new([Ok(None), Ok(Some(track("A", true, 0)))]);
        assert_eq!(source.current_track().await, Ok(None));
        assert!(source.current_track().await.unwrap().is_some());
        assert!(source.current_track().await.unwrap().is_some());
    }
}

use async_trait::async_trait;
use rodio::Source;

use crate::{audio::error::AudioError, library::Track};

/// A decoded preview ready to be appended to the sink.
pub type PreviewSource = Box<dyn Source + Send>;

/// The audio side of the player as seen by the session.
///
/// `start` only has to begin loading: completion or failure of the actual
/// playback is reported later through `Event::TrackStarted` and
/// `Event::PlaybackFailed`, tagged with the generation they belong to.
pub trait PlaybackControl {
    fn start(&self, track: &Track) -> Result<(), AudioError>;
    fn toggle_pause(&self);
    fn stop(&self);

    /// Identifies the most recent `start` or `stop`.
    fn generation(&self) -> u64;
}

/// Fetches and decodes the audio behind a preview URL.
#[async_trait]
pub trait PreviewLoader: Send + Sync {
    async fn load(&self, url: &str) -> Result<PreviewSource, AudioError>;
}

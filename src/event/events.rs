use crate::{error::LibraryError, library::{RawTrack, Track}};

/// Everything background tasks report back to the UI loop.
///
/// Playback events carry the player generation they were produced under;
/// the loop drops the ones a newer request has superseded.
#[derive(Debug, Clone)]
pub enum Event {
    CatalogFetched(Result<Vec<RawTrack>, LibraryError>),
    TrackStarted(Track, u64),
    TrackEnded(u64),
    PlaybackFailed(String, u64),
}

use thiserror::Error;

/// Classified failures of the library core.
///
/// Every one of these is recoverable by a later user action; the UI turns them
/// into a notice line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Failed to fetch tracks: {0}")]
    SourceUnavailable(String),

    #[error("{}", duplicate_playlist_message(.0))]
    DuplicatePlaylist(String),

    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    #[error("\"{title}\" is already in \"{playlist}\"")]
    DuplicateTrack { playlist: String, title: String },

    #[error("Index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No tracks to play")]
    EmptyView,

    #[error("Track not found in library: {0}")]
    TrackNotFound(String),

    #[error("Failed to play audio: {0}")]
    PlaybackFailure(String),

    #[error("Failed to save playlists: {0}")]
    PersistenceFailure(String),
}

fn duplicate_playlist_message(name: &str) -> String {
    if name.is_empty() {
        "Playlist name cannot be empty".to_string()
    } else {
        format!("Playlist \"{name}\" already exists")
    }
}

use tracing::{debug, info, warn};

use super::model::{Playlist, Playlists};
use crate::{
    error::LibraryError,
    library::Track,
    storage::BlobStore,
};

pub const PLAYLISTS_KEY: &str = "playlists";

/// Owns the playlists map and mirrors it to a [`BlobStore`].
pub struct PlaylistStore<S: BlobStore> {
    playlists: Playlists,
    store: S,
}

impl<S: BlobStore> PlaylistStore<S> {
    /// Reads the stored map once. A missing or unreadable blob yields an
    /// empty map.
    pub fn load(store: S) -> Self {
        let playlists = match store.read(PLAYLISTS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Playlists>(&blob) {
                Ok(mut playlists) => {
                    let dropped = playlists.dedup_titles();
                    if dropped > 0 {
                        warn!(dropped, "playlists_duplicate_titles_dropped");
                    }
                    playlists
                }
                Err(e) => {
                    warn!(error = %e, "playlists_unparseable");
                    Playlists::new()
                }
            },
            Ok(None) => Playlists::new(),
            Err(e) => {
                warn!(error = %e, "playlists_unreadable");
                Playlists::new()
            }
        };

        info!(count = playlists.len(), "playlists_loaded");
        Self { playlists, store }
    }

    pub fn create(&mut self, name: &str) -> Result<(), LibraryError> {
        let name = name.trim();
        if name.is_empty() || self.playlists.contains(name) {
            return Err(LibraryError::DuplicatePlaylist(name.to_string()));
        }

        self.playlists.insert(Playlist::new(name));
        debug!(name, "playlist_created");
        self.persist()
    }

    pub fn add_track(&mut self, name: &str, track: &Track) -> Result<(), LibraryError> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))?;

        if playlist.contains_title(&track.title) {
            return Err(LibraryError::DuplicateTrack {
                playlist: name.to_string(),
                title: track.title.clone(),
            });
        }

        playlist.tracks.push(track.clone());
        debug!(name, title = track.title.as_str(), "playlist_track_added");
        self.persist()
    }

    /// Removes one entry. A playlist left empty is deleted.
    pub fn remove_track(&mut self, name: &str, index: usize) -> Result<Track, LibraryError> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| LibraryError::PlaylistNotFound(name.to_string()))?;

        let len = playlist.tracks.len();
        if index >= len {
            return Err(LibraryError::IndexOutOfRange { index, len });
        }

        let removed = playlist.tracks.remove(index);
        if playlist.tracks.is_empty() {
            self.playlists.remove(name);
            debug!(name, "playlist_deleted");
        }

        debug!(name, title = removed.title.as_str(), "playlist_track_removed");
        self.persist().map(|_| removed)
    }

    pub fn list(&self) -> Vec<String> {
        self.playlists.names().map(str::to_string).collect()
    }

    pub fn tracks_of(&self, name: &str) -> &[Track] {
        self.playlists
            .get(name)
            .map(|p| p.tracks.as_slice())
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains(name)
    }

    pub fn playlists(&self) -> &Playlists {
        &self.playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Serializes the whole map and overwrites the stored blob. The
    /// in-memory state is kept whatever the outcome.
    fn persist(&self) -> Result<(), LibraryError> {
        let blob = serde_json::to_string(&self.playlists)
            .map_err(|e| LibraryError::PersistenceFailure(e.to_string()))?;

        self.store.write(PLAYLISTS_KEY, &blob).map_err(|e| {
            warn!(error = %e, "playlists_persist_failed");
            LibraryError::PersistenceFailure(e.to_string())
        })
    }
}

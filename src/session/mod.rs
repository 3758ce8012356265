//! The owning context: catalog, filtered view, cursor, playlists and the
//! player, with one method per user intent.
//!
//! Every intent runs to completion and returns a classified result. Nothing
//! here renders; callers redraw from the accessors afterwards.

use tracing::{debug, info, warn};

use crate::{
    audio::{CursorState, PlaybackControl, PlaybackCursor},
    error::LibraryError,
    library::{Catalog, FilteredView, RawTrack, Track, filter},
    playlist::PlaylistStore,
    storage::BlobStore,
};

pub struct Session<P: PlaybackControl, S: BlobStore> {
    catalog: Catalog,
    query: String,
    view: FilteredView,
    cursor: PlaybackCursor,
    playlists: PlaylistStore<S>,
    player: P,
}

impl<P: PlaybackControl, S: BlobStore> Session<P, S> {
    pub fn new(player: P, store: S) -> Self {
        Self {
            catalog: Catalog::new(),
            query: String::new(),
            view: FilteredView::new(),
            cursor: PlaybackCursor::new(),
            playlists: PlaylistStore::load(store),
            player,
        }
    }

    /// Takes the outcome of the startup fetch. On failure the catalog stays
    /// empty.
    pub fn load_catalog(
        &mut self,
        fetched: Result<Vec<RawTrack>, LibraryError>,
    ) -> Result<usize, LibraryError> {
        let raw = fetched.inspect_err(|e| warn!(error = %e, "catalog_unavailable"))?;
        self.catalog.load(raw);
        self.refresh_view();
        info!(count = self.catalog.len(), "catalog_ready");
        Ok(self.catalog.len())
    }

    pub fn search(&mut self, query: &str) -> &[Track] {
        self.query = query.to_string();
        self.refresh_view();
        debug!(query, matches = self.view.len(), "search_applied");
        &self.view
    }

    fn refresh_view(&mut self) {
        self.view = filter::apply(&self.catalog, &self.query);
    }

    /// Selects `index` in the view and asks the player to start it. The
    /// selection is kept even when the player refuses.
    pub fn play(&mut self, index: usize) -> Result<&Track, LibraryError> {
        self.cursor.select(index, self.view.len())?;
        let track = &self.view[index];
        info!(index, title = track.title.as_str(), "play_requested");

        self.player
            .start(track)
            .map_err(|e| LibraryError::PlaybackFailure(e.to_string()))?;
        Ok(track)
    }

    pub fn next(&mut self) -> Result<usize, LibraryError> {
        self.cursor.next(self.view.len())
    }

    pub fn previous(&mut self) -> Result<usize, LibraryError> {
        self.cursor.previous(self.view.len())
    }

    /// Advances like [`Session::next`] and starts the new track.
    /// Advances after the player reports that `generation` finished. Reports
    /// from a playback that has since been replaced or stopped are ignored
    /// and yield `Ok(None)`.
    pub fn on_track_ended(&mut self, generation: u64) -> Result<Option<usize>, LibraryError> {
        if !self.is_current_playback(generation) {
            debug!(generation, current = self.player.generation(), "stale_track_end_ignored");
            return Ok(None);
        }
        let index = self.next()?;
        self.play(index)?;
        Ok(Some(index))
    }

    /// Whether an event tagged with `generation` belongs to the latest
    /// playback request.
    pub fn is_current_playback(&self, generation: u64) -> bool {
        self.player.generation() == generation
    }

    pub fn toggle_pause(&self) {
        self.player.toggle_pause();
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<(), LibraryError> {
        self.playlists.create(name)
    }

    /// Adds the view track at `view_index` to the named playlist.
    pub fn add_to_playlist(&mut self, name: &str, view_index: usize) -> Result<&Track, LibraryError> {
        let len = self.view.len();
        let track = self
            .view
            .get(view_index)
            .ok_or(LibraryError::IndexOutOfRange {
                index: view_index,
                len,
            })?;
        self.playlists.add_track(name, track)?;
        Ok(track)
    }

    pub fn remove_from_playlist(&mut self, name: &str, index: usize) -> Result<Track, LibraryError> {
        self.playlists.remove_track(name, index)
    }

    /// Plays a playlist entry by locating its title in the catalog. The query
    /// is cleared first so catalog and view positions coincide.
    pub fn play_from_playlist(&mut self, name: &str, index: usize) -> Result<usize, LibraryError> {
        let entries = self.playlists.tracks_of(name);
        if entries.is_empty() && !self.playlists.contains(name) {
            return Err(LibraryError::PlaylistNotFound(name.to_string()));
        }
        let entry = entries.get(index).ok_or(LibraryError::IndexOutOfRange {
            index,
            len: entries.len(),
        })?;
        let catalog_index = self
            .catalog
            .find_index_by_title(&entry.title)
            .ok_or_else(|| LibraryError::TrackNotFound(entry.title.clone()))?;

        if !self.query.is_empty() {
            self.search("");
        }
        self.play(catalog_index)?;
        Ok(catalog_index)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &[Track] {
        &self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor.state()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.cursor.current().and_then(|i| self.view.get(i))
    }

    pub fn playlist_names(&self) -> Vec<String> {
        self.playlists.list()
    }

    pub fn playlist_tracks(&self, name: &str) -> &[Track] {
        self.playlists.tracks_of(name)
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}

use ratatui::widgets::ListState;

use crate::library::Track;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Library,
    Playlists,
    PlaylistTracks,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::Library => Pane::Playlists,
            Pane::Playlists => Pane::PlaylistTracks,
            Pane::PlaylistTracks => Pane::Library,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Pane::Library => Pane::PlaylistTracks,
            Pane::Playlists => Pane::Library,
            Pane::PlaylistTracks => Pane::Playlists,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    NewPlaylist,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct UiState {
    pub pane: Pane,
    pub mode: InputMode,
    /// Text being typed in search or new-playlist mode.
    pub input: String,
    pub library: ListState,
    pub playlists: ListState,
    pub playlist_tracks: ListState,
    pub notice: Option<Notice>,
    pub is_loading: bool,
    pub now_playing: Option<Track>,
}

impl UiState {
    pub fn info(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Info(message.into()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Error(message.into()));
    }

    /// The playlist highlighted in the playlists pane; also the target of
    /// "add to playlist".
    pub fn selected_playlist<'a>(&self, names: &'a [String]) -> Option<&'a str> {
        self.playlists
            .selected()
            .and_then(|i| names.get(i))
            .map(String::as_str)
    }
}

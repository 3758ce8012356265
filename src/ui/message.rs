/// User intents produced by the input handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    Quit,

    // Playback
    Activate,
    NextTrack,
    PreviousTrack,
    TogglePlayPause,
    VolumeUp,
    VolumeDown,
    ToggleMute,

    // Navigation
    NextPane,
    PreviousPane,
    MoveDown,
    MoveUp,
    MoveTop,
    MoveBottom,

    // Text input
    StartSearch,
    ClearSearch,
    StartNewPlaylist,
    Input(char),
    Paste(String),
    Backspace,
    Submit,
    Cancel,

    // Playlists
    AddToPlaylist,
    RemoveFromPlaylist,
}

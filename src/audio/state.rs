use crate::library::Track;

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackState {
    Stopped,
    Buffering(Track),
    Playing(Track),
    Paused(Track),
}

use crate::library::Track;

#[derive(Debug, Clone)]
pub enum AudioCommand {
    PlayTrack(Track),
    Pause,
    Resume,
    Stop,
}

pub mod now_playing;
pub mod spinner;

pub use now_playing::NowPlaying;
pub use spinner::Spinner;

pub mod commands;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod loader;
pub mod playback;
pub mod state;
pub mod traits;

pub use controller::AudioController;
pub use cursor::{CursorState, PlaybackCursor};
pub use error::AudioError;
pub use loader::HttpPreviewLoader;
pub use traits::{PlaybackControl, PreviewLoader, PreviewSource};

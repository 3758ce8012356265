//! Named, ordered, de-duplicated track lists.
//!
//! The whole map is written to the blob store after every mutation under the
//! `playlists` key, as a JSON object from playlist name to track array.

mod model;
mod store;

pub use model::{Playlist, Playlists};
pub use store::{PLAYLISTS_KEY, PlaylistStore};

#[cfg(test)]
mod tests;

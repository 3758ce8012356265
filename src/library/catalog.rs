use tracing::debug;

use super::track::{RawTrack, Track};

/// Every track fetched at startup, in response order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the raw records, renaming fields only.
    pub fn load(&mut self, raw_results: Vec<RawTrack>) {
        let before = self.tracks.len();
        self.tracks.extend(raw_results.into_iter().map(Track::from));
        debug!(
            added = self.tracks.len() - before,
            total = self.tracks.len(),
            "catalog_loaded"
        );
    }

    /// First track with exactly this title, in catalog order.
    pub fn find_index_by_title(&self, title: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.title == title)
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

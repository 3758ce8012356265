use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::library::Track;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.tracks.iter().any(|t| t.title == title)
    }
}

/// Playlists in insertion order, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlists(Vec<Playlist>);

impl Playlists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.0.iter().find(|p| p.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.0.iter_mut().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Replaces the playlist of the same name in place, or appends.
    pub fn insert(&mut self, playlist: Playlist) {
        match self.get_mut(&playlist.name) {
            Some(existing) => *existing = playlist,
            None => self.0.push(playlist),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Playlist> {
        let index = self.0.iter().position(|p| p.name == name)?;
        Some(self.0.remove(index))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops repeated titles inside each playlist, keeping the first one.
    /// Returns how many entries were removed.
    pub(crate) fn dedup_titles(&mut self) -> usize {
        let mut removed = 0;
        for playlist in &mut self.0 {
            let mut seen = Vec::with_capacity(playlist.tracks.len());
            playlist.tracks.retain(|track| {
                if seen.contains(&track.title) {
                    removed += 1;
                    false
                } else {
                    seen.push(track.title.clone());
                    true
                }
            });
        }
        removed
    }
}

impl Serialize for Playlists {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for playlist in &self.0 {
            map.serialize_entry(&playlist.name, &playlist.tracks)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Playlists {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PlaylistsVisitor;

        impl<'de> Visitor<'de> for PlaylistsVisitor {
            type Value = Playlists;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from playlist name to a list of tracks")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Playlists, A::Error> {
                let mut playlists = Playlists::new();
                while let Some((name, tracks)) = access.next_entry::<String, Vec<Track>>()? {
                    playlists.insert(Playlist { name, tracks });
                }
                Ok(playlists)
            }
        }

        deserializer.deserialize_map(PlaylistsVisitor)
    }
}

use serde::{Deserialize, Serialize};

/// A track as returned by the search API, before field renaming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrack {
    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub collection_name: Option<String>,
    pub primary_genre_name: Option<String>,
    pub preview_url: Option<String>,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url100: Option<String>,
}

/// A catalog track. Playlists hold value copies of these.
///
/// The serialized field names follow the stored playlist format, so
/// `preview_url` is written as `url` and `artwork_url` as `artworkUrl100`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    #[serde(rename = "url")]
    pub preview_url: String,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url: String,
}

impl From<RawTrack> for Track {
    fn from(raw: RawTrack) -> Self {
        Self {
            title: raw.track_name.unwrap_or_default(),
            artist: raw.artist_name.unwrap_or_default(),
            album: raw.collection_name.unwrap_or_default(),
            genre: raw.primary_genre_name.unwrap_or_default(),
            preview_url: raw.preview_url.unwrap_or_default(),
            artwork_url: raw.artwork_url100.unwrap_or_default(),
        }
    }
}

impl Track {
    pub fn display_name(&self) -> String {
        if self.artist.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.artist)
        }
    }
}

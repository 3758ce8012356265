use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use super::{PLAYLISTS_KEY, Playlist, PlaylistStore, Playlists};
use crate::{
    error::LibraryError,
    library::Track,
    storage::{BlobStore, MemoryStore, StorageError},
};

fn track(title: &str, artist: &str) -> Track {
    Track {
        title: title.to_string(),
        artist: artist.to_string(),
        album: "Album".to_string(),
        genre: "World".to_string(),
        preview_url: format!("https://audio.example/{title}.m4a"),
        artwork_url: format!("https://art.example/{title}.jpg"),
    }
}

/// Delegates to a [`MemoryStore`] until told to fail.
#[derive(Clone, Default)]
struct FlakyStore {
    inner: MemoryStore,
    failing: Arc<AtomicBool>,
}

impl FlakyStore {
    fn fail_writes(&self, fail: bool) {
        self.failing.store(fail, Ordering::SeqCst);
    }
}

impl BlobStore for FlakyStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".into()));
        }
        self.inner.write(key, value)
    }
}

fn stored(store: &MemoryStore) -> Playlists {
    let blob = store.read(PLAYLISTS_KEY).unwrap().expect("nothing persisted");
    serde_json::from_str(&blob).unwrap()
}

#[test]
fn load_without_blob_starts_empty() {
    let store = PlaylistStore::load(MemoryStore::new());
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}

#[test]
fn load_with_unparseable_blob_starts_empty() {
    let store = PlaylistStore::load(MemoryStore::with_blob(PLAYLISTS_KEY, "{not json"));
    assert!(store.is_empty());
}

#[test]
fn load_reads_the_stored_browser_format() {
    let blob = r#"{
        "Road Trip": [
            {"title": "Mundeya", "artist": "Raj Bains", "album": "A", "genre": "World",
             "url": "https://audio.example/m.m4a", "artworkUrl100": "https://art.example/m.jpg"}
        ],
        "Chill": []
    }"#;
    let store = PlaylistStore::load(MemoryStore::with_blob(PLAYLISTS_KEY, blob));

    assert_eq!(store.list(), vec!["Road Trip", "Chill"]);
    let tracks = store.tracks_of("Road Trip");
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].preview_url, "https://audio.example/m.m4a");
    assert_eq!(tracks[0].artwork_url, "https://art.example/m.jpg");
}

#[test]
fn load_drops_repeated_titles() {
    let blob = r#"{"Favs": [
        {"title": "Same", "artist": "One"},
        {"title": "Other", "artist": "Two"},
        {"title": "Same", "artist": "Three"}
    ]}"#;
    let store = PlaylistStore::load(MemoryStore::with_blob(PLAYLISTS_KEY, blob));

    let artists: Vec<&str> = store
        .tracks_of("Favs")
        .iter()
        .map(|t| t.artist.as_str())
        .collect();
    assert_eq!(artists, vec!["One", "Two"]);
}

#[test]
fn create_twice_is_rejected_and_leaves_size_unchanged() {
    let mut store = PlaylistStore::load(MemoryStore::new());

    store.create("Road Trip").unwrap();
    assert_eq!(
        store.create("Road Trip"),
        Err(LibraryError::DuplicatePlaylist("Road Trip".into()))
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn create_trims_and_rejects_blank_names() {
    let mut store = PlaylistStore::load(MemoryStore::new());

    assert_eq!(
        store.create("   "),
        Err(LibraryError::DuplicatePlaylist(String::new()))
    );
    store.create("  Chill  ").unwrap();
    assert!(store.contains("Chill"));
    assert!(matches!(
        store.create("Chill "),
        Err(LibraryError::DuplicatePlaylist(_))
    ));
}

#[test]
fn list_keeps_insertion_order() {
    let mut store = PlaylistStore::load(MemoryStore::new());
    for name in ["Zeta", "Alpha", "Mid"] {
        store.create(name).unwrap();
    }
    assert_eq!(store.list(), vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn add_track_requires_an_existing_playlist() {
    let mut store = PlaylistStore::load(MemoryStore::new());
    assert_eq!(
        store.add_track("Nope", &track("A", "X")),
        Err(LibraryError::PlaylistNotFound("Nope".into()))
    );
}

#[test]
fn add_track_rejects_repeated_titles_even_from_other_artists() {
    let mut store = PlaylistStore::load(MemoryStore::new());
    store.create("Favs").unwrap();

    store.add_track("Favs", &track("Mundeya", "Raj Bains")).unwrap();
    assert_eq!(
        store.add_track("Favs", &track("Mundeya", "Someone Else")),
        Err(LibraryError::DuplicateTrack {
            playlist: "Favs".into(),
            title: "Mundeya".into(),
        })
    );
    assert_eq!(store.tracks_of("Favs").len(), 1);
}

#[test]
fn remove_track_preserves_order_of_the_rest() {
    let mut store = PlaylistStore::load(MemoryStore::new());
    store.create("Favs").unwrap();
    for title in ["A", "B", "C"] {
        store.add_track("Favs", &track(title, "X")).unwrap();
    }

    let removed = store.remove_track("Favs", 1).unwrap();
    assert_eq!(removed.title, "B");

    let titles: Vec<&str> = store.tracks_of("Favs").iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[test]
fn remove_track_validates_name_and_index() {
    let mut store = PlaylistStore::load(MemoryStore::new());
    store.create("Favs").unwrap();
    store.add_track("Favs", &track("A", "X")).unwrap();

    assert_eq!(
        store.remove_track("Other", 0),
        Err(LibraryError::PlaylistNotFound("Other".into()))
    );
    assert_eq!(
        store.remove_track("Favs", 3),
        Err(LibraryError::IndexOutOfRange { index: 3, len: 1 })
    );
}

#[test]
fn removing_the_last_track_deletes_the_playlist_and_persists() {
    let memory = MemoryStore::new();
    let mut store = PlaylistStore::load(memory.clone());
    store.create("Favs").unwrap();
    store.create("Keep").unwrap();
    store.add_track("Favs", &track("A", "X")).unwrap();

    store.remove_track("Favs", 0).unwrap();

    assert!(!store.contains("Favs"));
    assert!(store.tracks_of("Favs").is_empty());
    assert_eq!(store.list(), vec!["Keep"]);
    assert!(!stored(&memory).contains("Favs"));
}

#[test]
fn every_mutation_writes_the_whole_map() {
    let memory = MemoryStore::new();
    let mut store = PlaylistStore::load(memory.clone());

    store.create("Favs").unwrap();
    assert_eq!(stored(&memory), *store.playlists());

    store.add_track("Favs", &track("A", "X")).unwrap();
    store.create("Later").unwrap();
    assert_eq!(stored(&memory), *store.playlists());
}

#[test]
fn reloading_reproduces_an_equal_map() {
    let memory = MemoryStore::new();
    let mut store = PlaylistStore::load(memory.clone());
    store.create("B-side").unwrap();
    store.create("A-side").unwrap();
    store.add_track("A-side", &track("Two", "Y")).unwrap();
    store.add_track("A-side", &track("One", "X")).unwrap();
    store.add_track("B-side", &track("Three", "Z")).unwrap();

    let reloaded = PlaylistStore::load(memory);
    assert_eq!(reloaded.playlists(), store.playlists());
    assert_eq!(reloaded.list(), vec!["B-side", "A-side"]);
}

#[test]
fn persistence_failure_is_reported_but_mutation_stands() {
    let flaky = FlakyStore::default();
    let mut store = PlaylistStore::load(flaky.clone());
    store.create("Favs").unwrap();

    flaky.fail_writes(true);
    assert!(matches!(
        store.add_track("Favs", &track("A", "X")),
        Err(LibraryError::PersistenceFailure(_))
    ));
    assert_eq!(store.tracks_of("Favs").len(), 1);

    assert!(matches!(
        store.create("Other"),
        Err(LibraryError::PersistenceFailure(_))
    ));
    assert!(store.contains("Other"));

    flaky.fail_writes(false);
    store.create("Third").unwrap();
    let persisted: Playlists =
        serde_json::from_str(&flaky.read(PLAYLISTS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted.len(), 3);
}

#[test]
fn playlists_serialize_as_a_name_keyed_object() {
    let mut playlists = Playlists::new();
    playlists.insert(Playlist {
        name: "Favs".into(),
        tracks: vec![track("A", "X")],
    });

    let value = serde_json::to_value(&playlists).unwrap();
    let entry = &value["Favs"][0];
    assert_eq!(entry["title"], "A");
    assert_eq!(entry["url"], "https://audio.example/A.m4a");
    assert_eq!(entry["artworkUrl100"], "https://art.example/A.jpg");
}

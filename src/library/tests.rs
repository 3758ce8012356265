use super::{Catalog, RawTrack, Track, filter};

fn raw(title: &str, artist: &str) -> RawTrack {
    RawTrack {
        track_name: Some(title.to_string()),
        artist_name: Some(artist.to_string()),
        collection_name: Some(format!("{title} (Single)")),
        primary_genre_name: Some("Bhangra".to_string()),
        preview_url: Some(format!("https://audio.example/{title}.m4a")),
        artwork_url100: Some(format!("https://art.example/{title}.jpg")),
    }
}

fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.load(vec![
        raw("Mundeya", "Raj Bains"),
        raw("Desi Beat", "Various Artists"),
        raw("Rajj Ke", "DJ Sanj"),
        raw("Mundeya", "Someone Else"),
    ]);
    catalog
}

fn titles(view: &[Track]) -> Vec<(&str, &str)> {
    view.iter()
        .map(|t| (t.title.as_str(), t.artist.as_str()))
        .collect()
}

#[test]
fn load_renames_fields_and_keeps_response_order() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 4);

    let first = catalog.get(0).unwrap();
    assert_eq!(first.title, "Mundeya");
    assert_eq!(first.artist, "Raj Bains");
    assert_eq!(first.album, "Mundeya (Single)");
    assert_eq!(first.genre, "Bhangra");
    assert_eq!(first.preview_url, "https://audio.example/Mundeya.m4a");
    assert_eq!(first.artwork_url, "https://art.example/Mundeya.jpg");
    assert_eq!(catalog.get(2).unwrap().title, "Rajj Ke");
}

#[test]
fn load_fills_missing_fields_with_empty_strings() {
    let mut catalog = Catalog::new();
    catalog.load(vec![RawTrack {
        track_name: Some("Untitled".into()),
        ..Default::default()
    }]);

    let track = catalog.get(0).unwrap();
    assert_eq!(track.title, "Untitled");
    assert!(track.artist.is_empty());
    assert!(track.preview_url.is_empty());
}

#[test]
fn raw_track_deserializes_from_api_field_names() {
    let raw: RawTrack = serde_json::from_str(
        r#"{
            "wrapperType": "track",
            "trackName": "Mundeya",
            "artistName": "Raj Bains",
            "collectionName": "Album",
            "primaryGenreName": "World",
            "previewUrl": "https://audio.example/a.m4a",
            "artworkUrl100": "https://art.example/a.jpg",
            "trackId": 42
        }"#,
    )
    .unwrap();

    assert_eq!(raw.track_name.as_deref(), Some("Mundeya"));
    assert_eq!(raw.artwork_url100.as_deref(), Some("https://art.example/a.jpg"));
}

#[test]
fn find_index_by_title_returns_first_match() {
    let catalog = catalog();
    assert_eq!(catalog.find_index_by_title("Mundeya"), Some(0));
    assert_eq!(catalog.find_index_by_title("Rajj Ke"), Some(2));
    assert_eq!(catalog.find_index_by_title("mundeya"), None);
    assert_eq!(catalog.find_index_by_title("Missing"), None);
}

#[test]
fn empty_query_matches_everything() {
    let catalog = catalog();
    assert_eq!(filter::apply(&catalog, ""), catalog.tracks().to_vec());
}

#[test]
fn query_matches_title_or_artist_case_insensitively() {
    let catalog = catalog();

    assert_eq!(
        titles(&filter::apply(&catalog, "RAJ")),
        vec![("Mundeya", "Raj Bains"), ("Rajj Ke", "DJ Sanj")]
    );
    assert_eq!(
        titles(&filter::apply(&catalog, "beat")),
        vec![("Desi Beat", "Various Artists")]
    );
    assert!(filter::apply(&catalog, "nothing like this").is_empty());
}

#[test]
fn filtered_view_is_an_ordered_subsequence_of_the_catalog() {
    let catalog = catalog();

    for query in ["", "a", "mun", "DJ", "e", "zzz"] {
        let view = filter::apply(&catalog, query);
        let expected: Vec<Track> = catalog
            .tracks()
            .iter()
            .filter(|t| {
                let q = query.to_lowercase();
                t.title.to_lowercase().contains(&q) || t.artist.to_lowercase().contains(&q)
            })
            .cloned()
            .collect();
        assert_eq!(view, expected, "query {query:?}");
    }
}

#[test]
fn apply_recomputes_over_the_full_catalog() {
    let catalog = catalog();
    let narrow = filter::apply(&catalog, "rajj");
    assert_eq!(narrow.len(), 1);

    let wide = filter::apply(&catalog, "mun");
    assert_eq!(titles(&wide), vec![("Mundeya", "Raj Bains"), ("Mundeya", "Someone Else")]);
}

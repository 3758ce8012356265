use super::{catalog::Catalog, track::Track};

/// Tracks of the catalog matching the current query, in catalog order.
pub type FilteredView = Vec<Track>;

/// Case-insensitive substring match on title or artist. An empty query
/// matches everything.
pub fn apply(catalog: &Catalog, query: &str) -> FilteredView {
    let query = query.to_lowercase();
    catalog
        .tracks()
        .iter()
        .filter(|track| matches(track, &query))
        .cloned()
        .collect()
}

fn matches(track: &Track, query: &str) -> bool {
    query.is_empty()
        || track.title.to_lowercase().contains(query)
        || track.artist.to_lowercase().contains(query)
}

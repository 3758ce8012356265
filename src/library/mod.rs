pub mod catalog;
pub mod filter;
pub mod track;

pub use catalog::Catalog;
pub use filter::FilteredView;
pub use track::{RawTrack, Track};

#[cfg(test)]
mod tests;

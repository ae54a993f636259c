/// Playable track domain type
use crate::types::{CatalogItem, ItemCategory};
use serde::{Deserialize, Serialize};

/// An identifiable playable unit
///
/// Structural subset of [`CatalogItem`]: just what the player bar needs to
/// stream a preview, render the now-playing state, and label playback
/// analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier (shared with the catalog item)
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Beat or Pack, carried through to playback analytics
    pub category: ItemCategory,

    /// Streamable media URL
    pub stream_url: String,

    /// Artwork URL
    pub artwork_url: String,
}

impl Track {
    /// Create a track with minimal fields (category Beat)
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            category: ItemCategory::Beat,
            stream_url: String::new(),
            artwork_url: String::new(),
        }
    }
}

impl From<&CatalogItem> for Track {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            artist: item.artist.clone(),
            category: item.category,
            stream_url: item.preview_url.clone(),
            artwork_url: item.artwork_url.clone(),
        }
    }
}

//! Artwork and department data structures.

use serde::{Deserialize, Serialize};

/// Opaque identifier for an object in the remote collection.
pub type ObjectId = u64;

/// A single artwork fetched from the object-detail endpoint.
///
/// Immutable once fetched; every field is sourced from the remote API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtworkRecord {
    /// Collection object id
    pub id: ObjectId,

    /// Artwork title (may be empty for unnamed pieces)
    pub title: String,

    /// Artist display name
    pub artist: String,

    /// Artist biography line (nationality, life dates)
    pub artist_bio: String,

    /// Curatorial department display name
    pub department: String,

    /// Medium description
    pub medium: String,

    /// Physical dimensions, free text
    pub dimensions: String,

    /// Free-text date ("1885", "ca. 1890-1891", "19th century", ...)
    pub object_date: String,

    /// Culture attribution
    pub culture: String,

    /// Subject tags attached by the museum
    pub tags: Vec<String>,

    /// Primary image URL, absent when the object has no open-access image
    pub primary_image_url: Option<String>,

    /// Further image URLs in gallery order
    pub additional_image_urls: Vec<String>,

    /// Link to the object page on the museum website
    pub object_page_url: String,

    /// Whether the museum flags this object as a collection highlight
    pub is_highlight: bool,
}

impl ArtworkRecord {
    /// Title for display, substituting a placeholder for empty titles.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Whether an artist name is known for this record.
    pub fn has_artist(&self) -> bool {
        !self.artist.is_empty() && self.artist != "Unknown"
    }
}

/// A curatorial department, used to scope searches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    /// Numeric department id the search endpoint accepts
    pub department_id: u32,

    /// Human-readable department name
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ArtworkRecord {
        ArtworkRecord {
            id: 436535,
            title: String::new(),
            artist: "Vincent van Gogh".to_string(),
            artist_bio: "Dutch, Zundert 1853–1890 Auvers-sur-Oise".to_string(),
            department: "European Paintings".to_string(),
            medium: "Oil on canvas".to_string(),
            dimensions: "28 3/4 x 36 1/4 in.".to_string(),
            object_date: "1889".to_string(),
            culture: String::new(),
            tags: vec!["Landscapes".to_string(), "Cypresses".to_string()],
            primary_image_url: None,
            additional_image_urls: Vec::new(),
            object_page_url: "https://www.metmuseum.org/art/collection/search/436535"
                .to_string(),
            is_highlight: true,
        }
    }

    #[test]
    fn test_display_title_placeholder() {
        let record = sample_record();
        assert_eq!(record.display_title(), "Untitled");
    }

    #[test]
    fn test_has_artist() {
        let mut record = sample_record();
        assert!(record.has_artist());

        record.artist = "Unknown".to_string();
        assert!(!record.has_artist());
    }
}

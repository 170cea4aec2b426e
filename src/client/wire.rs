//! Wire-format payloads for the collection API.
//!
//! The remote schema uses camelCase names and pads missing fields with
//! empty strings or nulls; these types absorb that before conversion
//! into the domain models.

use serde::Deserialize;

use crate::models::{ArtworkRecord, Department, ObjectId};

/// Response body of the search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchPayload {
    /// Remote-reported total, informational only
    #[serde(default)]
    #[allow(dead_code)]
    pub total: u64,

    /// Matching ids; the endpoint sends null instead of an empty array
    #[serde(rename = "objectIDs")]
    pub object_ids: Option<Vec<ObjectId>>,
}

/// Response body of the departments endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DepartmentsPayload {
    pub departments: Vec<DepartmentEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DepartmentEntry {
    #[serde(rename = "departmentId")]
    pub department_id: u32,

    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl From<DepartmentEntry> for Department {
    fn from(entry: DepartmentEntry) -> Self {
        Self {
            department_id: entry.department_id,
            display_name: entry.display_name,
        }
    }
}

/// Response body of the object-detail endpoint.
///
/// Only `objectID` is required; everything else defaults so a sparse
/// record still decodes.
#[derive(Debug, Deserialize)]
pub(crate) struct ObjectPayload {
    #[serde(rename = "objectID")]
    pub object_id: ObjectId,

    #[serde(default)]
    pub title: String,

    #[serde(default, rename = "artistDisplayName")]
    pub artist_display_name: String,

    #[serde(default, rename = "artistDisplayBio")]
    pub artist_display_bio: String,

    #[serde(default)]
    pub department: String,

    #[serde(default)]
    pub medium: String,

    #[serde(default)]
    pub dimensions: String,

    #[serde(default, rename = "objectDate")]
    pub object_date: String,

    #[serde(default)]
    pub culture: String,

    #[serde(default)]
    pub tags: Option<Vec<TagEntry>>,

    #[serde(default, rename = "primaryImage")]
    pub primary_image: String,

    #[serde(default, rename = "primaryImageSmall")]
    pub primary_image_small: String,

    #[serde(default, rename = "additionalImages")]
    pub additional_images: Vec<String>,

    #[serde(default, rename = "objectURL")]
    pub object_url: String,

    #[serde(default, rename = "isHighlight")]
    pub is_highlight: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagEntry {
    #[serde(default)]
    pub term: String,
}

impl From<ObjectPayload> for ArtworkRecord {
    fn from(payload: ObjectPayload) -> Self {
        // Prefer the smaller rendition for display; either may be "".
        let primary_image_url = [payload.primary_image_small, payload.primary_image]
            .into_iter()
            .find(|url| !url.is_empty());

        Self {
            id: payload.object_id,
            title: payload.title,
            artist: payload.artist_display_name,
            artist_bio: payload.artist_display_bio,
            department: payload.department,
            medium: payload.medium,
            dimensions: payload.dimensions,
            object_date: payload.object_date,
            culture: payload.culture,
            tags: payload
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(|tag| tag.term)
                .filter(|term| !term.is_empty())
                .collect(),
            primary_image_url,
            additional_image_urls: payload.additional_images,
            object_page_url: payload.object_url,
            is_highlight: payload.is_highlight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_payload_null_ids() {
        let payload: SearchPayload = serde_json::from_str(r#"{"total":0,"objectIDs":null}"#)
            .unwrap();
        assert!(payload.object_ids.is_none());
    }

    #[test]
    fn test_sparse_object_payload_decodes() {
        let payload: ObjectPayload = serde_json::from_str(r#"{"objectID":42}"#).unwrap();
        let record = ArtworkRecord::from(payload);
        assert_eq!(record.id, 42);
        assert!(record.title.is_empty());
        assert!(record.primary_image_url.is_none());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_object_payload_without_id_is_rejected() {
        assert!(serde_json::from_str::<ObjectPayload>(r#"{"title":"x"}"#).is_err());
    }

    #[test]
    fn test_image_url_prefers_small_rendition() {
        let payload: ObjectPayload = serde_json::from_str(
            r#"{"objectID":1,"primaryImage":"full.jpg","primaryImageSmall":"small.jpg"}"#,
        )
        .unwrap();
        let record = ArtworkRecord::from(payload);
        assert_eq!(record.primary_image_url.as_deref(), Some("small.jpg"));
    }

    #[test]
    fn test_tags_flatten_to_terms() {
        let payload: ObjectPayload = serde_json::from_str(
            r#"{"objectID":1,"tags":[{"term":"Cats","AAT_URL":"x"},{"term":""}]}"#,
        )
        .unwrap();
        let record = ArtworkRecord::from(payload);
        assert_eq!(record.tags, vec!["Cats".to_string()]);
    }
}

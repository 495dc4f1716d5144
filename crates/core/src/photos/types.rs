//! Types for upstream photo API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single search result: enough to render a thumbnail that links to the
/// detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoSummary {
    /// Upstream photo identifier.
    pub id: String,
    /// URL of the thumbnail-sized rendition.
    pub thumbnail_url: String,
    /// Accessibility text, when the upstream provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Pixel width of the original.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pixel height of the original.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Like count as reported by the upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
}

impl PhotoSummary {
    /// Width/height ratio, when both dimensions are known and valid.
    pub fn aspect_ratio(&self) -> Option<f32> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if h > 0 => Some(w as f32 / h as f32),
            _ => None,
        }
    }
}

/// Full detail for a single photo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoDetail {
    /// Upstream photo identifier.
    pub id: String,
    /// URL of the display-sized rendition.
    pub full_image_url: String,
    /// Author-provided description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accessibility text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Display name of the photographer.
    pub author_name: String,
    /// Photographer's upstream username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_username: Option<String>,
    /// Link to the photo's page on the upstream site.
    pub source_link: String,
    /// When the photo was published upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Pixel width of the original.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pixel height of the original.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Like count as reported by the upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
}

impl PhotoDetail {
    /// Best available caption: the description, falling back to the alt text.
    pub fn caption(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.alt_text.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(width: Option<u32>, height: Option<u32>) -> PhotoSummary {
        PhotoSummary {
            id: "abc123".to_string(),
            thumbnail_url: "https://images.example.com/abc123?w=400".to_string(),
            alt_text: None,
            width,
            height,
            likes: None,
        }
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(summary(Some(3000), Some(2000)).aspect_ratio(), Some(1.5));
        assert_eq!(summary(Some(3000), None).aspect_ratio(), None);
        assert_eq!(summary(Some(3000), Some(0)).aspect_ratio(), None);
    }

    #[test]
    fn test_caption_prefers_description() {
        let detail = PhotoDetail {
            id: "abc123".to_string(),
            full_image_url: "https://images.example.com/abc123".to_string(),
            description: Some("Sunset over the harbor".to_string()),
            alt_text: Some("orange sky above boats".to_string()),
            author_name: "Jane Doe".to_string(),
            author_username: Some("janedoe".to_string()),
            source_link: "https://photos.example.com/abc123".to_string(),
            created_at: None,
            width: None,
            height: None,
            likes: None,
        };
        assert_eq!(detail.caption(), Some("Sunset over the harbor"));
    }

    #[test]
    fn test_caption_falls_back_to_alt_text() {
        let detail = PhotoDetail {
            id: "abc123".to_string(),
            full_image_url: "https://images.example.com/abc123".to_string(),
            description: None,
            alt_text: Some("orange sky above boats".to_string()),
            author_name: "Jane Doe".to_string(),
            author_username: None,
            source_link: "https://photos.example.com/abc123".to_string(),
            created_at: None,
            width: None,
            height: None,
            likes: None,
        };
        assert_eq!(detail.caption(), Some("orange sky above boats"));

        let no_caption = PhotoDetail {
            description: None,
            alt_text: Some(String::new()),
            ..detail
        };
        assert_eq!(no_caption.caption(), None);
    }

    #[test]
    fn test_summary_serialization_skips_absent_fields() {
        let json = serde_json::to_string(&summary(None, None)).unwrap();
        assert!(!json.contains("alt_text"));
        assert!(!json.contains("width"));

        let parsed: PhotoSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, "abc123");
    }
}

//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides a mock implementation of the photo provider trait,
//! allowing comprehensive pipeline and E2E testing without real
//! infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use viewfinder_core::testing::{fixtures, MockPhotoProvider};
//!
//! let provider = MockPhotoProvider::new();
//! provider.set_results(vec![fixtures::photo_summary("abc123")]).await;
//!
//! // Use in a SearchSession or AppState...
//! ```

mod mock_photos;

pub use mock_photos::{MockPhotoProvider, RecordedQuery};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::photos::{PhotoDetail, PhotoSummary};

    /// Create a test photo summary with reasonable defaults.
    pub fn photo_summary(id: &str) -> PhotoSummary {
        PhotoSummary {
            id: id.to_string(),
            thumbnail_url: format!("https://images.example.com/{}?w=400", id),
            alt_text: Some(format!("photo {}", id)),
            width: Some(4000),
            height: Some(3000),
            likes: Some(42),
        }
    }

    /// Create a test photo detail with reasonable defaults.
    pub fn photo_detail(id: &str, author_name: &str) -> PhotoDetail {
        PhotoDetail {
            id: id.to_string(),
            full_image_url: format!("https://images.example.com/{}?w=1080", id),
            description: Some(format!("description of {}", id)),
            alt_text: Some(format!("photo {}", id)),
            author_name: author_name.to_string(),
            author_username: Some(author_name.to_lowercase().replace(' ', "")),
            source_link: format!("https://photos.example.com/{}", id),
            created_at: None,
            width: Some(4000),
            height: Some(3000),
            likes: Some(42),
        }
    }
}

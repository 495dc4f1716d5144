//! Photo search and detail API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use viewfinder_core::{PhotoDetail, PhotoError, PhotoSummary};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PhotoSearchParams {
    pub query: String,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct PhotoProviderStatus {
    pub backend: String,
    pub configured: bool,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn provider_unavailable() -> ApiError {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "Photo provider not configured".to_string(),
        }),
    )
}

fn upstream_error(e: PhotoError) -> ApiError {
    let status = match &e {
        PhotoError::NotFound(_) => StatusCode::NOT_FOUND,
        PhotoError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        PhotoError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/photos/search?query=<term>&per_page=<n>
///
/// Search the upstream photo API. Results keep the upstream order; an empty
/// list is a valid response.
pub async fn search_photos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PhotoSearchParams>,
) -> Result<Json<Vec<PhotoSummary>>, ApiError> {
    let Some(provider) = state.provider() else {
        return Err(provider_unavailable());
    };

    let per_page = params
        .per_page
        .unwrap_or_else(|| state.search_config().per_page);

    match provider.search(&params.query, per_page).await {
        Ok(photos) => Ok(Json(photos)),
        Err(e) => Err(upstream_error(e)),
    }
}

/// GET /api/v1/photos/{id}
///
/// Fetch a single photo's detail from the upstream API.
pub async fn get_photo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PhotoDetail>, ApiError> {
    let Some(provider) = state.provider() else {
        return Err(provider_unavailable());
    };

    match provider.get_photo(&id).await {
        Ok(photo) => Ok(Json(photo)),
        Err(PhotoError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Photo not found: {}", id),
            }),
        )),
        Err(e) => Err(upstream_error(e)),
    }
}

/// GET /api/v1/photos/status
///
/// Report which upstream backend is configured.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<PhotoProviderStatus> {
    match state.provider() {
        Some(provider) => Json(PhotoProviderStatus {
            backend: provider.name().to_string(),
            configured: true,
        }),
        None => Json(PhotoProviderStatus {
            backend: "none".to_string(),
            configured: false,
        }),
    }
}

//! Mock photo provider for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::photos::{PhotoDetail, PhotoError, PhotoProvider, PhotoSummary};

/// A recorded search for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedQuery {
    /// The term that was searched.
    pub query: String,
    /// Requested page size.
    pub per_page: u32,
    /// When the search was made.
    pub timestamp: Instant,
}

/// A query handler that produces results dynamically based on the query.
type QueryHandler = Box<dyn Fn(&str) -> Option<Vec<PhotoSummary>> + Send + Sync>;

/// Mock implementation of the `PhotoProvider` trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable search results
/// - Track search queries for assertions
/// - Simulate failures and slow responses
pub struct MockPhotoProvider {
    /// Configured search results to return.
    results: Arc<RwLock<Vec<PhotoSummary>>>,
    /// Configured photo details, by id.
    details: Arc<RwLock<HashMap<String, PhotoDetail>>>,
    /// Recorded search queries.
    queries: Arc<RwLock<Vec<RecordedQuery>>>,
    /// If set, the next search will fail with this error.
    next_error: Arc<RwLock<Option<PhotoError>>>,
    /// If set, the next detail fetch will fail with this error.
    next_detail_error: Arc<RwLock<Option<PhotoError>>>,
    /// Per-query artificial response delays.
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    /// Query handler for dynamic result generation based on the term.
    query_handler: Arc<RwLock<Option<QueryHandler>>>,
}

impl std::fmt::Debug for MockPhotoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockPhotoProvider")
            .field("results", &"<results>")
            .field("details", &"<details>")
            .field("queries", &"<queries>")
            .field("next_error", &"<next_error>")
            .field("delays", &"<delays>")
            .field("query_handler", &"<handler>")
            .finish()
    }
}

impl Default for MockPhotoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPhotoProvider {
    /// Create a new mock provider with empty results.
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            details: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            next_detail_error: Arc::new(RwLock::new(None)),
            delays: Arc::new(RwLock::new(HashMap::new())),
            query_handler: Arc::new(RwLock::new(None)),
        }
    }

    /// Set the results to return for subsequent searches.
    pub async fn set_results(&self, results: Vec<PhotoSummary>) {
        *self.results.write().await = results;
    }

    /// Add a single result.
    pub async fn add_result(&self, result: PhotoSummary) {
        self.results.write().await.push(result);
    }

    /// Register a photo detail, keyed by its id.
    pub async fn set_detail(&self, detail: PhotoDetail) {
        self.details.write().await.insert(detail.id.clone(), detail);
    }

    /// Get recorded search queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    /// Get the number of searches performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    /// Configure the next search to fail with the given error.
    pub async fn set_next_error(&self, error: PhotoError) {
        *self.next_error.write().await = Some(error);
    }

    /// Configure the next detail fetch to fail with the given error.
    pub async fn set_next_detail_error(&self, error: PhotoError) {
        *self.next_detail_error.write().await = Some(error);
    }

    /// Delay the response to searches for the given term.
    ///
    /// Useful for exercising the superseded-request path: a slow response for
    /// an old term arriving after a fast one for a newer term.
    pub async fn set_delay(&self, query: &str, delay: Duration) {
        self.delays.write().await.insert(query.to_string(), delay);
    }

    /// Set a query handler that dynamically generates results based on the
    /// term. The handler should return `Some(results)` to override the
    /// configured results, or `None` to fall through to them.
    pub async fn set_query_handler<F>(&self, handler: F)
    where
        F: Fn(&str) -> Option<Vec<PhotoSummary>> + Send + Sync + 'static,
    {
        *self.query_handler.write().await = Some(Box::new(handler));
    }

    /// Take the next search error if set.
    async fn take_error(&self) -> Option<PhotoError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl PhotoProvider for MockPhotoProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<PhotoSummary>, PhotoError> {
        // Record the search before any delay so the request start is observable
        self.queries.write().await.push(RecordedQuery {
            query: query.to_string(),
            per_page,
            timestamp: Instant::now(),
        });

        let delay = self.delays.read().await.get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        // Check for injected error
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        // Check if the query handler provides results
        let handler = self.query_handler.read().await;
        if let Some(ref h) = *handler {
            if let Some(handler_results) = h(query) {
                let results = handler_results
                    .into_iter()
                    .take(per_page as usize)
                    .collect();
                return Ok(results);
            }
        }
        drop(handler);

        let results = self
            .results
            .read()
            .await
            .iter()
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok(results)
    }

    async fn get_photo(&self, id: &str) -> Result<PhotoDetail, PhotoError> {
        if let Some(err) = self.next_detail_error.write().await.take() {
            return Err(err);
        }

        self.details
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| PhotoError::NotFound(id.to_string()))
    }
}

//! Debounced photo search pipeline.
//!
//! This module converts free-text input events into debounced queries against
//! the configured [`PhotoProvider`](crate::photos::PhotoProvider) and exposes
//! the resulting ordered result set as a stream of snapshots. Each debounce
//! cycle is tagged with a monotonically increasing generation so a superseded
//! in-flight request can never overwrite results for a newer term.

mod config;
mod session;
mod types;

pub use config::SearchConfig;
pub use session::SearchSession;
pub use types::{SearchMode, SearchPhase, SearchSnapshot};

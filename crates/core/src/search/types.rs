//! Types for the search pipeline.

use serde::{Deserialize, Serialize};

use crate::photos::PhotoSummary;

/// How the query term should be interpreted.
///
/// Only [`SearchMode::Name`] is wired to the upstream API. The other arms
/// exist so a mode selection is carried and reported explicitly instead of
/// being silently ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Free-text search against the upstream photo API.
    #[default]
    Name,
    /// Search by geographic coordinate. Not implemented.
    Coordinate,
    /// Natural-language search through an AI assistant. Not implemented.
    Ai,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Name => write!(f, "name"),
            SearchMode::Coordinate => write!(f, "coordinate"),
            SearchMode::Ai => write!(f, "ai"),
        }
    }
}

/// Where a session currently is in its debounce cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    /// No timer armed; results reflect the last settled cycle.
    #[default]
    Idle,
    /// The debounce timer is armed; new input restarts it.
    Pending,
    /// The timer elapsed and an upstream request is in flight.
    Fetching,
    /// A response for the current generation was applied.
    Settled,
}

/// Observable state of a search session, published after every transition.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchSnapshot {
    /// Current query term.
    pub term: String,
    /// Current search mode.
    pub mode: SearchMode,
    /// Debounce cycle phase.
    pub phase: SearchPhase,
    /// Visible result set, in upstream order.
    pub results: Vec<PhotoSummary>,
    /// Diagnostic from the last cycle, if it failed or hit an
    /// unimplemented mode. Cleared by the next successful settle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    /// Generation of the cycle that last applied to the visible state.
    pub generation: u64,
}

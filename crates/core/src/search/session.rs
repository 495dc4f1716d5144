//! Debounced search session implementation.
//!
//! A session is a spawned task owning all mutable search state. Input events
//! arrive on an mpsc channel, each one cancel-and-restarting the debounce
//! timer. When the timer elapses the cycle fires: an empty term clears the
//! result set, an unimplemented mode records a diagnostic, and a non-empty
//! term in name mode issues exactly one upstream request. Responses carry the
//! generation assigned at fire time and are dropped if a newer cycle has
//! fired since.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::metrics::{
    SEARCH_CYCLES_TOTAL, STALE_RESPONSES_DROPPED, UPSTREAM_REQUESTS_TOTAL,
    UPSTREAM_REQUEST_DURATION,
};
use crate::photos::{PhotoError, PhotoProvider, PhotoSummary};

use super::config::SearchConfig;
use super::types::{SearchMode, SearchPhase, SearchSnapshot};

/// Commands accepted by a running session.
#[derive(Debug)]
enum Command {
    /// The query term changed.
    Input(String),
    /// The search mode changed.
    Mode(SearchMode),
}

/// A settled upstream fetch, tagged with the generation it was issued for.
type FetchOutcome = (u64, Result<Vec<PhotoSummary>, PhotoError>);

/// Handle to a running search session.
///
/// Dropping the handle closes the command channel, which terminates the
/// session task; in-flight upstream requests are left to finish and their
/// responses discarded.
pub struct SearchSession {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<SearchSnapshot>,
    task: tokio::task::JoinHandle<()>,
}

impl SearchSession {
    /// Spawn a new session against the given provider.
    pub fn spawn(provider: Arc<dyn PhotoProvider>, config: SearchConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (snap_tx, snap_rx) = watch::channel(SearchSnapshot::default());
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();

        let runner = SessionRunner {
            provider,
            config,
            snapshots: snap_tx,
            state: SearchSnapshot::default(),
            deadline: None,
            latest_generation: 0,
            fetch_tx,
        };
        let task = tokio::spawn(runner.run(cmd_rx, fetch_rx));

        Self {
            commands: cmd_tx,
            snapshots: snap_rx,
            task,
        }
    }

    /// Report an input change. Restarts the debounce timer.
    pub fn input_changed(&self, term: impl Into<String>) {
        let _ = self.commands.send(Command::Input(term.into()));
    }

    /// Report a mode change. Restarts the debounce timer, like input.
    pub fn mode_changed(&self, mode: SearchMode) {
        let _ = self.commands.send(Command::Mode(mode));
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.snapshots.clone()
    }

    /// Shut the session down and wait for its task to finish.
    pub async fn shutdown(self) {
        let SearchSession {
            commands,
            snapshots: _snapshots,
            task,
        } = self;
        drop(commands);
        let _ = task.await;
    }
}

struct SessionRunner {
    provider: Arc<dyn PhotoProvider>,
    config: SearchConfig,
    snapshots: watch::Sender<SearchSnapshot>,
    state: SearchSnapshot,
    /// Armed debounce deadline, if any.
    deadline: Option<Instant>,
    /// Generation of the most recently fired cycle.
    latest_generation: u64,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
}

impl SessionRunner {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut fetches: mpsc::UnboundedReceiver<FetchOutcome>,
    ) {
        loop {
            let deadline = self.deadline;

            tokio::select! {
                cmd = commands.recv() => match cmd {
                    Some(Command::Input(term)) => self.on_input(term),
                    Some(Command::Mode(mode)) => self.on_mode(mode),
                    None => break,
                },
                Some((generation, result)) = fetches.recv() => {
                    self.on_fetch_settled(generation, result);
                }
                _ = debounce_elapsed(deadline) => self.on_debounce_fired(),
            }
        }

        debug!("Search session terminated");
    }

    fn on_input(&mut self, term: String) {
        self.state.term = term;
        self.arm_timer();
    }

    fn on_mode(&mut self, mode: SearchMode) {
        self.state.mode = mode;
        self.arm_timer();
    }

    /// Cancel-and-restart: every event replaces the pending deadline.
    fn arm_timer(&mut self) {
        self.deadline = Some(Instant::now() + Duration::from_millis(self.config.debounce_ms));
        self.state.phase = SearchPhase::Pending;
        self.publish();
    }

    fn on_debounce_fired(&mut self) {
        self.deadline = None;
        self.latest_generation += 1;
        let generation = self.latest_generation;

        if self.state.term.is_empty() {
            // No upstream call for an empty term. Consuming a generation here
            // keeps a pre-clear in-flight response from repopulating the grid.
            SEARCH_CYCLES_TOTAL.with_label_values(&["cleared"]).inc();
            self.state.results.clear();
            self.state.last_error = None;
            self.state.phase = SearchPhase::Idle;
            self.state.generation = generation;
            self.publish();
            return;
        }

        match self.state.mode {
            SearchMode::Name => {
                SEARCH_CYCLES_TOTAL.with_label_values(&["fetched"]).inc();
                self.state.phase = SearchPhase::Fetching;
                self.publish();
                self.spawn_fetch(generation);
            }
            mode @ (SearchMode::Coordinate | SearchMode::Ai) => {
                SEARCH_CYCLES_TOTAL
                    .with_label_values(&["unsupported_mode"])
                    .inc();
                warn!("{} search requested but not implemented", mode);
                self.state.last_error = Some(format!("{} search is not implemented", mode));
                self.state.phase = SearchPhase::Idle;
                self.state.generation = generation;
                self.publish();
            }
        }
    }

    /// Issue exactly one upstream request for the current term, tagged with
    /// the firing cycle's generation. The request is never cancelled.
    fn spawn_fetch(&self, generation: u64) {
        let provider = Arc::clone(&self.provider);
        let query = self.state.term.clone();
        let per_page = self.config.per_page;
        let outcomes = self.fetch_tx.clone();

        tokio::spawn(async move {
            let started = std::time::Instant::now();
            let result = provider.search(&query, per_page).await;

            let label = if result.is_ok() { "ok" } else { "error" };
            UPSTREAM_REQUESTS_TOTAL.with_label_values(&[label]).inc();
            UPSTREAM_REQUEST_DURATION
                .with_label_values(&[label])
                .observe(started.elapsed().as_secs_f64());

            let _ = outcomes.send((generation, result));
        });
    }

    fn on_fetch_settled(&mut self, generation: u64, result: Result<Vec<PhotoSummary>, PhotoError>) {
        if generation != self.latest_generation {
            STALE_RESPONSES_DROPPED.inc();
            debug!(
                generation,
                latest = self.latest_generation,
                "Dropping superseded search response"
            );
            return;
        }

        match result {
            Ok(photos) => {
                debug!(term = %self.state.term, count = photos.len(), "Search settled");
                self.state.results = photos;
                self.state.last_error = None;
            }
            Err(e) => {
                // Keep the previous result set; surface the diagnostic.
                warn!("Search for '{}' failed: {}", self.state.term, e);
                self.state.last_error = Some(e.to_string());
            }
        }

        self.state.phase = SearchPhase::Settled;
        self.state.generation = generation;
        self.publish();
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.state.clone());
    }
}

/// Resolves when the deadline passes; never resolves while no timer is armed.
async fn debounce_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

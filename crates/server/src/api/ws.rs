//! WebSocket live search.
//!
//! Each connection owns one debounced search session: `input` and `mode`
//! frames from the client feed the session's command channel, and every
//! snapshot the session publishes is forwarded back as a `snapshot` frame.
//! The session (and any in-flight upstream request bookkeeping) dies with
//! the connection.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use viewfinder_core::search::{SearchMode, SearchSession, SearchSnapshot};

use crate::metrics::{WS_CONNECTIONS_ACTIVE, WS_CONNECTIONS_TOTAL, WS_MESSAGES_SENT};
use crate::state::AppState;

/// Messages accepted from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The search input changed (one frame per keystroke).
    Input { term: String },
    /// The search mode toggle changed.
    Mode { mode: SearchMode },
}

/// Messages sent to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Current search state; sent on connect and after every change.
    Snapshot(SearchSnapshot),
    /// Live search is unavailable (no provider configured).
    Unavailable { message: String },
}

/// WebSocket upgrade handler.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Handle a single live-search connection.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    WS_CONNECTIONS_TOTAL.inc();
    WS_CONNECTIONS_ACTIVE.inc();
    info!("Live search client connected");

    let Some(provider) = state.provider() else {
        let msg = ServerMessage::Unavailable {
            message: "Photo provider not configured".to_string(),
        };
        if let Ok(json) = serde_json::to_string(&msg) {
            let _ = sender.send(Message::Text(json.into())).await;
        }
        let _ = sender.send(Message::Close(None)).await;
        WS_CONNECTIONS_ACTIVE.dec();
        return;
    };

    let session = SearchSession::spawn(provider, state.search_config());
    let mut snapshots = session.subscribe();

    // Forward snapshots to this client, starting with the current state
    let send_task = tokio::spawn(async move {
        loop {
            let snapshot = snapshots.borrow_and_update().clone();
            WS_MESSAGES_SENT.with_label_values(&["snapshot"]).inc();

            match serde_json::to_string(&ServerMessage::Snapshot(snapshot)) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        debug!("WebSocket send failed, client disconnected");
                        break;
                    }
                }
                Err(e) => {
                    error!("Failed to serialize snapshot: {}", e);
                }
            }

            if snapshots.changed().await.is_err() {
                debug!("Search session closed its snapshot channel");
                break;
            }
        }
    });

    // Feed client events into the session
    while let Some(result) = receiver.next().await {
        match result {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(ClientMessage::Input { term }) => session.input_changed(term),
                Ok(ClientMessage::Mode { mode }) => session.mode_changed(mode),
                Err(e) => {
                    warn!("Ignoring malformed live-search message: {}", e);
                }
            },
            Ok(Message::Close(_)) => {
                debug!("Live search client requested close");
                break;
            }
            Ok(Message::Ping(data)) => {
                // Pong is handled automatically by axum
                debug!("Received ping: {:?}", data);
            }
            Ok(_) => {
                // Ignore other message types
            }
            Err(e) => {
                warn!("WebSocket receive error: {}", e);
                break;
            }
        }
    }

    // Clean up
    send_task.abort();
    session.shutdown().await;
    WS_CONNECTIONS_ACTIVE.dec();
    info!("Live search client disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewfinder_core::search::SearchPhase;
    use viewfinder_core::testing::fixtures;

    #[test]
    fn test_parse_input_message() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"input","term":"paris"}"#).unwrap();
        match msg {
            ClientMessage::Input { term } => assert_eq!(term, "paris"),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_parse_mode_message() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"mode","mode":"coordinate"}"#).unwrap();
        match msg {
            ClientMessage::Mode { mode } => assert_eq!(mode, SearchMode::Coordinate),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_message_is_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"launch"}"#).is_err());
    }

    #[test]
    fn test_snapshot_frame_shape() {
        let snapshot = SearchSnapshot {
            term: "paris".to_string(),
            results: vec![fixtures::photo_summary("abc123")],
            phase: SearchPhase::Settled,
            generation: 3,
            ..SearchSnapshot::default()
        };

        let json = serde_json::to_string(&ServerMessage::Snapshot(snapshot)).unwrap();
        assert!(json.contains(r#""type":"snapshot""#));
        assert!(json.contains(r#""term":"paris""#));
        assert!(json.contains(r#""phase":"settled""#));
        assert!(json.contains("abc123"));
    }
}

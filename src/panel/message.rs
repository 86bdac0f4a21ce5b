//! Messages sent from the panel back to the host

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::notify::Notification;
use super::save::{MIND_MAP_FILE, SaveTarget, save_mind_map};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum HostMessage {
    /// Persist `text` as `MindMap.md`.
    SaveMindMap { text: String },
}

impl HostMessage {
    /// Parse one JSON message. Unknown commands and malformed input yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(message) => Some(message),
            Err(e) => {
                debug!(error = %e, "ignoring unrecognized host message");
                None
            }
        }
    }
}

/// Host side of the panel channel.
#[derive(Debug, Clone)]
pub struct MessageHandler {
    target: SaveTarget,
}

impl MessageHandler {
    pub fn new(target: SaveTarget) -> Self {
        Self { target }
    }

    /// Act on a message and describe the outcome for the user.
    pub fn handle(&self, message: &HostMessage) -> Notification {
        match message {
            HostMessage::SaveMindMap { text } => match save_mind_map(&self.target, text) {
                Ok(_) => Notification::info(format!("{} has been saved successfully!", MIND_MAP_FILE)),
                Err(e) => Notification::error(format!("Failed to save {}: {}", MIND_MAP_FILE, e)),
            },
        }
    }
}

//! Wire types shared between the game client and the lobby server.
//!
//! Every message travels as a JSON envelope `{"type": ..., "data": ...}`.
//! Coordinates and line widths on the wire are always in the canonical board
//! space, never in a participant's local canvas pixels.


use serde::{Deserialize, Serialize};

/// Width of the canonical drawing board every participant maps onto.
pub const CANONICAL_BOARD_WIDTH: f64 = 1600.0;
/// Height of the canonical drawing board.
pub const CANONICAL_BOARD_HEIGHT: f64 = 900.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A single stroke segment as sent to and received from peers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
    pub color: String,
    pub line_width: f64,
    /// Identifies the stroke this segment belongs to. Segments of one
    /// pointer gesture share an id; peers that omit it send `0`.
    #[serde(default)]
    pub gesture_id: u32,
}

/// A flood-fill seed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Fill {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub author: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    #[serde(rename = "line")]
    Line(Line),
    #[serde(rename = "fill")]
    Fill(Fill),
    #[serde(rename = "clear-drawing-board")]
    Clear,
    #[serde(rename = "message")]
    Message(String),
    #[serde(rename = "choose-word")]
    ChooseWord(usize),
    #[serde(rename = "kick-vote")]
    KickVote(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    #[serde(rename = "line")]
    Line(Line),
    #[serde(rename = "fill")]
    Fill(Fill),
    #[serde(rename = "clear-drawing-board")]
    Clear,
    #[serde(rename = "message")]
    Message(ChatMessage),
    #[serde(rename = "system-message")]
    SystemMessage(String),
    /// Candidate words offered to the player whose turn starts.
    #[serde(rename = "your-turn")]
    YourTurn(Vec<String>),
    #[serde(rename = "next-turn")]
    NextTurn(serde_json::Value),
}

impl ServerMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::Line(_) => "line",
            ServerMessage::Fill(_) => "fill",
            ServerMessage::Clear => "clear-drawing-board",
            ServerMessage::Message(_) => "message",
            ServerMessage::SystemMessage(_) => "system-message",
            ServerMessage::YourTurn(_) => "your-turn",
            ServerMessage::NextTurn(_) => "next-turn",
        }
    }
}

/// Lobby metadata handed to the client when it enters a lobby.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LobbyData {
    pub lobby_id: String,
    pub drawing_board_base_width: u32,
    pub drawing_board_base_height: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("failed to encode client message: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode server message: {0}")]
    Decode(#[source] serde_json::Error),
}

pub fn encode_client_message(message: &ClientMessage) -> Result<String, ProtocolError> {
    serde_json::to_string(message).map_err(ProtocolError::Encode)
}

pub fn decode_server_message(payload: &str) -> Result<ServerMessage, ProtocolError> {
    serde_json::from_str(payload).map_err(ProtocolError::Decode)
}

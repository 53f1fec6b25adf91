//! Client configuration handed over by the hosting page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use scribble_shared::{LobbyData, CANONICAL_BOARD_HEIGHT, CANONICAL_BOARD_WIDTH};

use crate::color::{normalize_color, ColorError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid default color: {0}")]
    Color(#[from] ColorError),
    #[error("board size must be positive, got {width}x{height}")]
    BoardSize { width: f64, height: f64 },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    pub lobby_id: Option<String>,
    pub canonical_width: f64,
    pub canonical_height: f64,
    pub default_color: String,
    /// Initial stroke width in local units.
    pub default_line_width: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            lobby_id: None,
            canonical_width: CANONICAL_BOARD_WIDTH,
            canonical_height: CANONICAL_BOARD_HEIGHT,
            default_color: "#000000".to_string(),
            default_line_width: 8.0,
        }
    }
}

impl ClientConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validated()
    }

    pub fn from_lobby_data(lobby: &LobbyData) -> Result<Self, ConfigError> {
        Self {
            lobby_id: Some(lobby.lobby_id.clone()),
            canonical_width: f64::from(lobby.drawing_board_base_width),
            canonical_height: f64::from(lobby.drawing_board_base_height),
            ..Self::default()
        }
        .validated()
    }

    /// Parse the lobby document served when joining and build a config from it.
    pub fn from_lobby_json(text: &str) -> Result<Self, ConfigError> {
        let lobby: LobbyData = serde_json::from_str(text)?;
        Self::from_lobby_data(&lobby)
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !(positive(self.canonical_width) && positive(self.canonical_height)) {
            return Err(ConfigError::BoardSize {
                width: self.canonical_width,
                height: self.canonical_height,
            });
        }
        self.default_color = normalize_color(&self.default_color)?;
        Ok(self)
    }
}

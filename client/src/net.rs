use wasm_bindgen::JsValue;
use web_sys::Window;

use scribble_shared::{ClientMessage, Fill, Line};

/// One-way channel to the lobby. Sends are fire-and-forget and carry
/// canonical coordinates only.
pub trait Transport {
    fn send(&self, message: ClientMessage);

    fn send_clear(&self) {
        self.send(ClientMessage::Clear);
    }

    fn send_message(&self, text: &str) {
        self.send(ClientMessage::Message(text.to_string()));
    }

    fn send_choose_word(&self, index: usize) {
        self.send(ClientMessage::ChooseWord(index));
    }

    fn send_kick_vote(&self, player_id: &str) {
        self.send(ClientMessage::KickVote(player_id.to_string()));
    }

    fn send_fill(&self, x: f64, y: f64, color: &str) {
        self.send(ClientMessage::Fill(Fill {
            x,
            y,
            color: color.to_string(),
        }));
    }

    fn send_line(&self, line: Line) {
        self.send(ClientMessage::Line(line));
    }
}

pub fn websocket_url(window: &Window, lobby_id: &str) -> Result<String, JsValue> {
    let location = window.location();
    let protocol = location.protocol()?;
    let host = location.host()?;
    let scheme = if protocol == "https:" { "wss" } else { "ws" };
    Ok(format!("{scheme}://{host}/v1/ws?lobby_id={lobby_id}"))
}

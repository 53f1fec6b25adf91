//! Applying lobby broadcasts to the local canvas and session.
//!
//! Peer strokes arrive in canonical space and are mapped into local pixels
//! with the viewport's current factors before they reach the renderer.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use scribble_shared::{Point, ServerMessage};

use crate::actions::ActionDispatcher;
use crate::geometry::normalize_point;
use crate::panels::Panel;
use crate::state::StatePatch;

impl ActionDispatcher {
    pub fn apply_server_message(&self, message: ServerMessage) {
        log::debug!("server message {}", message.kind());
        match message {
            ServerMessage::Line(line) => {
                let (Some(from), Some(to)) = (
                    normalize_point(Point::new(line.from_x, line.from_y)),
                    normalize_point(Point::new(line.to_x, line.to_y)),
                ) else {
                    log::warn!("dropping peer line with non-finite endpoint");
                    return;
                };
                if !line.line_width.is_finite() {
                    log::warn!("dropping peer line with non-finite width");
                    return;
                }
                let factors = self.viewport.factors();
                let from = factors.to_local(from);
                let to = factors.to_local(to);
                let width = factors.width_to_local(line.line_width);
                self.renderer
                    .draw_line(from.x, from.y, to.x, to.y, &line.color, width);
            }
            ServerMessage::Fill(fill) => {
                let Some(seed) = normalize_point(Point::new(fill.x, fill.y)) else {
                    log::warn!("dropping peer fill with non-finite seed");
                    return;
                };
                let seed = self.viewport.factors().to_local(seed);
                self.renderer.fill(seed.x, seed.y, &fill.color);
            }
            ServerMessage::Clear => self.renderer.clear(),
            ServerMessage::YourTurn(words) => {
                log::info!("turn prompt with {} candidate words", words.len());
                self.store.set_state(StatePatch {
                    allow_drawing: Some(false),
                    ..StatePatch::default()
                });
                self.presentation.show(Panel::WordDialog);
            }
            ServerMessage::NextTurn(_) => {
                self.store.set_state(StatePatch {
                    allow_drawing: Some(false),
                    ..StatePatch::default()
                });
                self.presentation.hide(Panel::Toolbox);
                self.presentation.show(Panel::PlayerList);
            }
            ServerMessage::Message(chat) => {
                log::debug!("chat from {}: {}", chat.author, chat.content);
            }
            ServerMessage::SystemMessage(text) => log::info!("system: {text}"),
        }
    }
}

//! One entry point per player intent.
//!
//! Each action runs to completion: it reads the session state once, gives the
//! local canvas immediate feedback in local pixels, and sends the canonical
//! form to the lobby. Actions never report failure to the caller; rejected
//! input is logged and dropped.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::cell::Cell;
use std::rc::Rc;

use scribble_shared::{Line, Point};

use crate::color::normalize_color;
use crate::geometry::{normalize_point, Viewport};
use crate::net::Transport;
use crate::panels::{ColorPicker, ComposeBox, Panel, Presentation};
use crate::render::Renderer;
use crate::state::{SessionStore, StatePatch};
use crate::tools::{resolve_color, Tool};

/// The external pieces an [`ActionDispatcher`] drives.
pub struct Collaborators {
    pub renderer: Box<dyn Renderer>,
    pub transport: Box<dyn Transport>,
    pub presentation: Box<dyn Presentation>,
    pub color_picker: Box<dyn ColorPicker>,
    pub compose_box: Box<dyn ComposeBox>,
}

pub struct ActionDispatcher {
    pub(crate) store: SessionStore,
    pub(crate) viewport: Rc<Viewport>,
    pub(crate) renderer: Box<dyn Renderer>,
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) presentation: Box<dyn Presentation>,
    color_picker: Box<dyn ColorPicker>,
    compose_box: Box<dyn ComposeBox>,
    gesture_id: Cell<u32>,
}

impl ActionDispatcher {
    pub fn new(store: SessionStore, viewport: Rc<Viewport>, collaborators: Collaborators) -> Self {
        let Collaborators {
            renderer,
            transport,
            presentation,
            color_picker,
            compose_box,
        } = collaborators;
        Self {
            store,
            viewport,
            renderer,
            transport,
            presentation,
            color_picker,
            compose_box,
            gesture_id: Cell::new(0),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn clear(&self) {
        log::debug!("clear");
        self.renderer.clear();
        self.transport.send_clear();
    }

    /// Start a new pointer gesture. Segments drawn until the next call share
    /// the returned id.
    pub fn begin_stroke(&self) -> u32 {
        let id = self.gesture_id.get().wrapping_add(1);
        self.gesture_id.set(id);
        id
    }

    /// Draw one segment of a stroke, given in local canvas pixels.
    pub fn draw(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (Some(from), Some(to)) = (
            normalize_point(Point::new(x1, y1)),
            normalize_point(Point::new(x2, y2)),
        ) else {
            log::warn!("dropping stroke with non-finite endpoint ({x1}, {y1}) -> ({x2}, {y2})");
            return;
        };
        let state = self.store.state();
        let color = resolve_color(state.local_tool, &state.local_color);

        self.renderer
            .draw_line(from.x, from.y, to.x, to.y, color, state.local_line_width);

        let factors = self.viewport.factors();
        let from = factors.to_canonical(from);
        let to = factors.to_canonical(to);
        self.transport.send_line(Line {
            from_x: from.x,
            from_y: from.y,
            to_x: to.x,
            to_y: to.y,
            color: color.to_string(),
            line_width: factors.width_to_canonical(state.local_line_width),
            gesture_id: self.gesture_id.get(),
        });
    }

    /// Flood-fill from a seed in local canvas pixels with the selected color.
    pub fn fill(&self, x: f64, y: f64) {
        let Some(seed) = normalize_point(Point::new(x, y)) else {
            log::warn!("dropping fill with non-finite seed ({x}, {y})");
            return;
        };
        let color = self.store.state().local_color;
        self.renderer.fill(seed.x, seed.y, &color);

        let seed = self.viewport.factors().to_canonical(seed);
        self.transport.send_fill(seed.x, seed.y, &color);
    }

    /// Select a drawing color. Without an explicit value the color picker's
    /// current value is used.
    pub fn set_color(&self, value: Option<&str>) {
        let raw = match value {
            Some(raw) => raw.to_string(),
            None => match self.color_picker.value() {
                Some(raw) => raw,
                None => {
                    log::warn!("color picker has no value; keeping current color");
                    return;
                }
            },
        };
        let color = match normalize_color(&raw) {
            Ok(color) => color,
            Err(error) => {
                log::warn!("ignoring color change: {error}");
                return;
            }
        };
        log::debug!("color set to {color}");
        self.color_picker.set_value(&color);
        self.store.set_state(StatePatch {
            local_color: Some(color),
            ..StatePatch::default()
        });
    }

    /// Set the stroke width in local units.
    pub fn set_line_width(&self, width: f64) {
        if !width.is_finite() {
            log::warn!("ignoring non-finite line width {width}");
            return;
        }
        let scaled = self.viewport.factors().width_to_local(width);
        self.store.set_state(StatePatch {
            local_line_width_unscaled: Some(width),
            local_line_width: Some(scaled),
            ..StatePatch::default()
        });
    }

    /// Switch tools. Unknown tool names are ignored.
    pub fn choose_tool(&self, value: &str) {
        match value.parse::<Tool>() {
            Ok(tool) => {
                log::debug!("tool set to {tool}");
                self.store.set_state(StatePatch {
                    local_tool: Some(tool),
                    ..StatePatch::default()
                });
            }
            Err(error) => log::debug!("{error}; tool unchanged"),
        }
    }

    /// Pick one of the offered words and start drawing. Only the first choice
    /// of a turn counts; later calls are dropped until the next turn prompt.
    pub fn choose_word(&self, index: usize) {
        if self.store.state().allow_drawing {
            log::warn!("word already chosen this turn; ignoring choice {index}");
            return;
        }
        self.transport.send_choose_word(index);

        self.presentation.hide(Panel::WordDialog);
        self.presentation.show(Panel::Toolbox);
        self.presentation.hide(Panel::PlayerList);

        self.store.set_state(StatePatch {
            allow_drawing: Some(true),
            ..StatePatch::default()
        });
    }

    pub fn kick(&self, player_id: &str) {
        log::debug!("vote to kick {player_id}");
        self.transport.send_kick_vote(player_id);
    }

    /// Send whatever is in the compose box, then empty it.
    pub fn send_chat(&self) {
        let text = self.compose_box.value();
        self.transport.send_message(&text);
        self.compose_box.clear();
    }
}

//! Local drawing configuration and turn permission for one game client.
//!
//! The store is shared by the action dispatcher, the inbound message handler
//! and whatever polls it for rendering UI. Actions run to completion on the
//! browser event loop, so updates never interleave; the store is not `Send`.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::tools::Tool;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Normalized lowercase `#rrggbb`.
    pub local_color: String,
    pub local_tool: Tool,
    /// Stroke width as chosen by the user, in local units.
    pub local_line_width_unscaled: f64,
    /// Stroke width derived at the last width change; not refreshed on resize.
    pub local_line_width: f64,
    pub allow_drawing: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

impl SessionState {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            local_color: config.default_color.clone(),
            local_tool: Tool::Pen,
            local_line_width_unscaled: config.default_line_width,
            local_line_width: config.default_line_width,
            allow_drawing: false,
        }
    }
}

/// Fields to overwrite in a [`SessionState`]; `None` leaves a field alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatePatch {
    pub local_color: Option<String>,
    pub local_tool: Option<Tool>,
    pub local_line_width_unscaled: Option<f64>,
    pub local_line_width: Option<f64>,
    pub allow_drawing: Option<bool>,
}

impl StatePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl SessionState {
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(color) = patch.local_color {
            self.local_color = color;
        }
        if let Some(tool) = patch.local_tool {
            self.local_tool = tool;
        }
        if let Some(width) = patch.local_line_width_unscaled {
            self.local_line_width_unscaled = width;
        }
        if let Some(width) = patch.local_line_width {
            self.local_line_width = width;
        }
        if let Some(allow) = patch.allow_drawing {
            self.allow_drawing = allow;
        }
    }
}

/// Cloneable handle to the session state of one client.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    inner: Rc<RefCell<SessionState>>,
}

impl SessionStore {
    pub fn new(initial: SessionState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(initial)),
        }
    }

    /// A snapshot of every field at once.
    pub fn state(&self) -> SessionState {
        self.inner.borrow().clone()
    }

    /// Shallow merge; last writer wins.
    pub fn set_state(&self, patch: StatePatch) {
        if patch.is_empty() {
            return;
        }
        self.inner.borrow_mut().apply(patch);
    }
}

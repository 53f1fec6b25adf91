//! Presentation-side collaborators: panels that can be shown or hidden and
//! the two input widgets actions read from.

/// Named panels of the game page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    WordDialog,
    Toolbox,
    PlayerList,
}

impl Panel {
    /// Element id of the panel on the page.
    pub fn element_id(self) -> &'static str {
        match self {
            Panel::WordDialog => "word-dialog",
            Panel::Toolbox => "cc-toolbox",
            Panel::PlayerList => "player-container",
        }
    }
}

pub trait Presentation {
    fn show(&self, panel: Panel);
    fn hide(&self, panel: Panel);
}

/// The palette control holding the current color.
pub trait ColorPicker {
    /// Current value, or `None` when the control has never been set.
    fn value(&self) -> Option<String>;
    fn set_value(&self, color: &str);
}

/// The chat input box.
pub trait ComposeBox {
    fn value(&self) -> String;
    fn clear(&self);
}

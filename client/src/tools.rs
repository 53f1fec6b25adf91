//! Drawing tools and the color each one actually paints with.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use std::fmt;
use std::str::FromStr;

use crate::color::BACKGROUND_COLOR;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Pen,
    /// Erases by painting the background color.
    Rubber,
    FillBucket,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Pen, Tool::Rubber, Tool::FillBucket];

    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Rubber => "rubber",
            Tool::FillBucket => "fill-bucket",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown tool: {0:?}")]
pub struct UnknownTool(pub String);

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.as_str() == value)
            .ok_or_else(|| UnknownTool(value.to_string()))
    }
}

/// The color a stroke made with `tool` is rendered and sent with.
pub fn resolve_color(tool: Tool, selected: &str) -> &str {
    match tool {
        Tool::Rubber => BACKGROUND_COLOR,
        Tool::Pen | Tool::FillBucket => selected,
    }
}

//! Color normalization for palette input.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Background color of the board; the eraser paints with it.
pub const BACKGROUND_COLOR: &str = "#ffffff";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("unrecognized color value: {0:?}")]
    Unrecognized(String),
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Parse CSS `rgb(r, g, b)` / `rgba(r, g, b, a)` into RGB channels. Alpha is
/// accepted and discarded.
pub fn parse_rgb_function(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim().to_ascii_lowercase();
    let (body, expected) = if let Some(body) = trimmed.strip_prefix("rgba(") {
        (body, 4)
    } else if let Some(body) = trimmed.strip_prefix("rgb(") {
        (body, 3)
    } else {
        return None;
    };
    let body = body.strip_suffix(')')?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return None;
    }
    let channel = |part: &str| {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse::<u8>().ok()
    };
    Some((channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
}

/// Normalize any supported color notation to canonical lowercase `#rrggbb`.
pub fn normalize_color(raw: &str) -> Result<String, ColorError> {
    let (r, g, b) = parse_hex_rgb(raw)
        .or_else(|| parse_rgb_function(raw))
        .ok_or_else(|| ColorError::Unrecognized(raw.to_string()))?;
    Ok(format!("#{r:02x}{g:02x}{b:02x}"))
}

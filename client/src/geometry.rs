//! Mapping between a viewer's local canvas pixels and the canonical board.
//!
//! Every participant renders the board at whatever size their window allows,
//! but all traffic on the wire uses the canonical board size. The two spaces
//! differ only by a uniform scale; line widths scale by the same factor as
//! coordinates.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::cell::Cell;

use scribble_shared::Point;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GeometryError {
    #[error("canvas width must be positive and finite, got {0}")]
    InvalidWidth(f64),
}

/// Conversion factors between local and canonical space.
///
/// `up` maps local to canonical and `down` maps canonical to local. They are
/// always computed together so that `up * down == 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    up: f64,
    down: f64,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self::identity()
    }
}

impl ScaleFactors {
    pub fn identity() -> Self {
        Self { up: 1.0, down: 1.0 }
    }

    pub fn from_widths(canonical_width: f64, local_width: f64) -> Result<Self, GeometryError> {
        if !(canonical_width.is_finite() && canonical_width > 0.0) {
            return Err(GeometryError::InvalidWidth(canonical_width));
        }
        if !(local_width.is_finite() && local_width > 0.0) {
            return Err(GeometryError::InvalidWidth(local_width));
        }
        Ok(Self {
            up: canonical_width / local_width,
            down: local_width / canonical_width,
        })
    }

    /// Build factors from a known local→canonical ratio.
    pub fn from_scale_up(up: f64) -> Result<Self, GeometryError> {
        if !(up.is_finite() && up > 0.0) {
            return Err(GeometryError::InvalidWidth(up));
        }
        Ok(Self { up, down: 1.0 / up })
    }

    pub fn scale_up(&self) -> f64 {
        self.up
    }

    pub fn scale_down(&self) -> f64 {
        self.down
    }

    pub fn to_canonical(&self, point: Point) -> Point {
        Point {
            x: point.x * self.up,
            y: point.y * self.up,
        }
    }

    pub fn to_local(&self, point: Point) -> Point {
        Point {
            x: point.x * self.down,
            y: point.y * self.down,
        }
    }

    pub fn width_to_canonical(&self, width: f64) -> f64 {
        width * self.up
    }

    pub fn width_to_local(&self, width: f64) -> f64 {
        width * self.down
    }
}

/// The current local canvas size relative to the canonical board.
///
/// The owner of the canvas element calls [`Viewport::resize`] whenever the
/// canvas changes size; actions only read the factors.
#[derive(Debug)]
pub struct Viewport {
    canonical_width: f64,
    factors: Cell<ScaleFactors>,
}

impl Viewport {
    pub fn new(canonical_width: f64) -> Self {
        Self {
            canonical_width,
            factors: Cell::new(ScaleFactors::identity()),
        }
    }

    pub fn with_factors(canonical_width: f64, factors: ScaleFactors) -> Self {
        Self {
            canonical_width,
            factors: Cell::new(factors),
        }
    }

    pub fn factors(&self) -> ScaleFactors {
        self.factors.get()
    }

    /// Recompute the factors for a new local canvas width. On error the
    /// previous factors stay in effect.
    pub fn resize(&self, local_width: f64) -> Result<ScaleFactors, GeometryError> {
        let factors = ScaleFactors::from_widths(self.canonical_width, local_width)?;
        log::debug!(
            "viewport resized to {local_width}px, scale up {}",
            factors.scale_up()
        );
        self.factors.set(factors);
        Ok(factors)
    }
}

pub fn normalize_point(point: Point) -> Option<Point> {
    if !point.is_finite() {
        return None;
    }
    Some(point)
}

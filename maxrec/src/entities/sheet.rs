use crate::entities::Orientation;
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// The rectangular stock material pieces are cut from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
}

impl Sheet {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.bbox().area()
    }

    /// Bounding rectangle of the sheet, top-left corner at the origin
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }
}

/// The rectangular unit that is repeatedly placed on the [`Sheet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub width: f64,
    pub height: f64,
}

impl Piece {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Footprint (width, height) of the piece when placed in `orientation`
    pub fn footprint(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Normal => (self.width, self.height),
            Orientation::Rotated => (self.height, self.width),
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Gap kept free between adjacent pieces, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Spacing {
    pub x: f64,
    pub y: f64,
}

impl Spacing {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn uniform(d: f64) -> Self {
        Self { x: d, y: d }
    }
}

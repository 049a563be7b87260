use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Orientation of the pieces in a layout.
/// `Rotated` swaps the width and height of the piece (a 90 degree turn).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Normal,
    Rotated,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Normal, Orientation::Rotated];

    pub fn is_rotated(&self) -> bool {
        matches!(self, Orientation::Rotated)
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Normal => write!(f, "normal"),
            Orientation::Rotated => write!(f, "rotated"),
        }
    }
}

/// Position and footprint of a single piece on the sheet.
/// (`x`, `y`) is the top-left corner, measured from the top-left corner of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

impl Placement {
    pub fn rect(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self.rotated {
            false => Orientation::Normal,
            true => Orientation::Rotated,
        }
    }
}

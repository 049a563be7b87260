use crate::entities::Orientation;
use serde::{Deserialize, Serialize};

/// External representation of a [`PackingInput`](crate::entities::PackingInput).
/// Optional fields fall back to their defaults on import.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtPackingInput {
    /// Name of the instance, only used to label output
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub sheet_width: f64,
    pub sheet_height: f64,
    pub piece_width: f64,
    pub piece_height: f64,
    /// Gap between horizontally adjacent pieces, 0 if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spacing_x: Option<f64>,
    /// Gap between vertically adjacent pieces, 0 if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spacing_y: Option<f64>,
    /// Free border along the sheet edges, 0 if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub margin: Option<f64>,
    /// Whether the piece may be turned by 90 degrees.
    /// Falls back to the engine configuration if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub allow_rotation: Option<bool>,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

/// External representation of a [`PackingResult`](crate::entities::PackingResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtPackingOutput {
    pub placements: Vec<ExtPlacement>,
    pub count: usize,
    pub orientation: Orientation,
    pub wasted_area: f64,
    /// Fraction of the sheet covered by pieces, in [0, 1]
    pub yield_ratio: f64,
    pub cols: u64,
    pub rows: u64,
}

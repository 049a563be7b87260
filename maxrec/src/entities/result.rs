use crate::entities::{Orientation, PackingInput, Placement};

/// Outcome of packing a single [`PackingInput`]: a uniform grid of `cols` x `rows` pieces in one orientation.
/// Derived on every call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PackingResult {
    /// The input this result was computed for
    pub input: PackingInput,
    /// Orientation shared by every placement
    pub orientation: Orientation,
    /// Number of pieces along the width of the sheet
    pub cols: u64,
    /// Number of pieces along the height of the sheet
    pub rows: u64,
    /// Placements in row-major order (top row first, left to right)
    pub placements: Vec<Placement>,
    /// Sheet area not covered by a piece
    pub wasted_area: f64,
    /// Fraction of the sheet area covered by pieces, in [0, 1]
    pub yield_ratio: f64,
}

impl PackingResult {
    /// Assembles a result and derives the area statistics from the placed count.
    pub fn new(
        input: PackingInput,
        orientation: Orientation,
        cols: u64,
        rows: u64,
        placements: Vec<Placement>,
    ) -> Self {
        let sheet_area = input.sheet.area();
        let used_area = placements.len() as f64 * input.piece.area();
        let yield_ratio = match placements.is_empty() {
            true => 0.0,
            false => used_area / sheet_area,
        };
        Self {
            input,
            orientation,
            cols,
            rows,
            placements,
            wasted_area: sheet_area - used_area,
            yield_ratio,
        }
    }

    /// An empty layout: nothing fits.
    pub fn empty(input: PackingInput) -> Self {
        Self::new(input, Orientation::Normal, 0, 0, vec![])
    }

    pub fn count(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Total area covered by the placed pieces
    pub fn used_area(&self) -> f64 {
        self.input.sheet.area() - self.wasted_area
    }
}

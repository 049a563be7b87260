use crate::entities::{Orientation, PackingInput, Placement};
use crate::geometry::fit_count;

/// The uniform grid a single orientation of the piece would produce, before any placement is materialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCandidate {
    pub orientation: Orientation,
    pub cols: u64,
    pub rows: u64,
}

impl GridCandidate {
    pub fn new(input: &PackingInput, orientation: Orientation) -> Self {
        let (pw, ph) = input.piece.footprint(orientation);
        let cols = fit_count(input.usable_width(), pw, input.spacing.x);
        let rows = fit_count(input.usable_height(), ph, input.spacing.y);
        Self {
            orientation,
            cols,
            rows,
        }
    }

    /// Number of pieces in the grid, saturating instead of overflowing
    pub fn count(&self) -> u64 {
        self.cols.saturating_mul(self.rows)
    }

    /// Generates all placements of the grid, row by row, starting at the top-left corner of the usable area.
    pub fn placements(&self, input: &PackingInput) -> Vec<Placement> {
        let (pw, ph) = input.piece.footprint(self.orientation);
        let (step_x, step_y) = (pw + input.spacing.x, ph + input.spacing.y);
        let rotated = self.orientation.is_rotated();

        let mut placements = Vec::with_capacity(self.count() as usize);
        for i in 0..self.rows {
            let y = input.margin + i as f64 * step_y;
            for j in 0..self.cols {
                placements.push(Placement {
                    x: input.margin + j as f64 * step_x,
                    y,
                    width: pw,
                    height: ph,
                    rotated,
                });
            }
        }
        placements
    }
}

use crate::entities::PackingResult;
use crate::io::ext_repr::{ExtPackingOutput, ExtPlacement};

/// Exports a [`PackingResult`] by composing an [`ExtPackingOutput`] from it.
pub fn export(result: &PackingResult) -> ExtPackingOutput {
    let placements = result
        .placements
        .iter()
        .map(|p| ExtPlacement {
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            rotated: p.rotated,
        })
        .collect();

    ExtPackingOutput {
        placements,
        count: result.count(),
        orientation: result.orientation,
        wasted_area: result.wasted_area,
        yield_ratio: result.yield_ratio,
        cols: result.cols,
        rows: result.rows,
    }
}

use crate::entities::PackingResult;
use crate::geometry::geo_traits::{AlmostContains, AlmostOverlapsWith};
use crate::util::FPA;
use itertools::Itertools;
use log::error;
//Various checks to verify correctness of a packing result
//Used in debug_assertion!() blocks and in tests

/// Every placement lies within the bounds of the sheet
pub fn placements_within_sheet(result: &PackingResult) -> bool {
    let sheet_bbox = result.input.sheet.bbox();
    match result
        .placements
        .iter()
        .find(|p| p.x < 0.0 || p.y < 0.0 || !sheet_bbox.almost_contains(&p.rect()))
    {
        None => true,
        Some(p) => {
            error!("placement {p:?} exceeds the sheet {:?}", result.input.sheet);
            false
        }
    }
}

/// No two placements have overlapping interiors. Pieces that share an edge are fine.
pub fn placements_disjoint(result: &PackingResult) -> bool {
    let overlapping = result
        .placements
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.rect().almost_overlaps_with(&b.rect()));

    match overlapping {
        None => true,
        Some((a, b)) => {
            error!("placements {a:?} and {b:?} overlap");
            false
        }
    }
}

/// The counts and area statistics agree with the placements
pub fn result_is_consistent(result: &PackingResult) -> bool {
    let count = result.count();
    if count as u64 != result.cols * result.rows && count != 0 {
        error!(
            "{} placements for a grid of {} x {}",
            count, result.cols, result.rows
        );
        return false;
    }
    if result
        .placements
        .iter()
        .any(|p| p.orientation() != result.orientation)
    {
        error!("placements do not all share orientation {}", result.orientation);
        return false;
    }

    let sheet_area = result.input.sheet.area();
    let expected_yield = count as f64 * result.input.piece.area() / sheet_area;
    let expected_waste = sheet_area - count as f64 * result.input.piece.area();

    //the yield stays below 1 as long as the pieces of the grid fit along both axes.
    //Checked per axis: the tolerance of both axes compounds in the area.
    let (w, h) = result.input.piece.footprint(result.orientation);
    let fits_along_axes = FPA(result.cols as f64 * w) <= FPA(result.input.sheet.width)
        && FPA(result.rows as f64 * h) <= FPA(result.input.sheet.height);
    if !fits_along_axes {
        error!(
            "grid of {} x {} {} pieces exceeds the sheet {:?}",
            result.cols, result.rows, result.orientation, result.input.sheet
        );
        return false;
    }

    FPA(result.yield_ratio) == FPA(expected_yield)
        && FPA(result.wasted_area) == FPA(expected_waste)
        && result.yield_ratio >= 0.0
}

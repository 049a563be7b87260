use crate::PackingError;
use crate::entities::{Orientation, PackingInput, PackingResult};
use crate::packing::{GridCandidate, PackingConfig};
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, trace};
use rayon::prelude::*;

/// Pairwise overlap checks in debug builds are skipped for layouts larger than this
const DISJOINT_CHECK_LIMIT: usize = 2_000;

/// Evaluates the grid of every orientation allowed by `config`, without materialising any placement.
/// The normal orientation always comes first. A square piece is only evaluated once, as turning it changes nothing.
pub fn evaluate(
    input: &PackingInput,
    config: &PackingConfig,
) -> Result<Vec<GridCandidate>, PackingError> {
    input.validate()?;

    let candidates = Orientation::ALL
        .into_iter()
        .filter(|o| match o {
            Orientation::Normal => true,
            Orientation::Rotated => config.allow_rotation && !input.piece.is_square(),
        })
        .map(|o| GridCandidate::new(input, o))
        .collect_vec();

    for c in &candidates {
        debug!(
            "[PACK] {} orientation: {} cols x {} rows = {} pieces",
            c.orientation,
            c.cols,
            c.rows,
            c.count()
        );
    }

    Ok(candidates)
}

/// Packs as many copies of the piece as possible on the sheet, as a uniform grid.
///
/// Both orientations are evaluated independently (the rotated one only if allowed by `config`)
/// and the one with the strictly higher count is kept, ties go to [`Orientation::Normal`].
/// Mixed layouts, e.g. filling the leftover strip with the other orientation, are never attempted.
pub fn pack(input: &PackingInput, config: &PackingConfig) -> Result<PackingResult, PackingError> {
    let candidates = evaluate(input, config)?;

    //the first candidate with the maximum count wins, which keeps normal on ties
    let best = candidates
        .into_iter()
        .reduce(|best, c| if c.count() > best.count() { c } else { best })
        .expect("the normal orientation is always evaluated");

    if let Some(limit) = config.max_pieces {
        if best.count() > limit {
            return Err(PackingError::TooManyPieces {
                count: best.count(),
                limit,
            });
        }
    }

    if best.count() == 0 {
        trace!("[PACK] no piece fits in any orientation");
        return Ok(PackingResult::empty(*input));
    }

    let placements = best.placements(input);
    let result = PackingResult::new(*input, best.orientation, best.cols, best.rows, placements);

    debug_assert!(assertions::placements_within_sheet(&result));
    debug_assert!(
        result.count() > DISJOINT_CHECK_LIMIT || assertions::placements_disjoint(&result)
    );
    debug_assert!(assertions::result_is_consistent(&result));

    Ok(result)
}

/// Packs every input independently on the rayon thread pool.
/// The i-th result belongs to the i-th input.
pub fn pack_batch(
    inputs: &[PackingInput],
    config: &PackingConfig,
) -> Vec<Result<PackingResult, PackingError>> {
    inputs.par_iter().map(|input| pack(input, config)).collect()
}

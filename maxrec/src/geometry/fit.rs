use crate::util::FPA;

/// Beyond this count, consecutive integers are no longer exactly representable as f64
const MAX_EXACT_COUNT: f64 = (1u64 << f64::MANTISSA_DIGITS) as f64;

/// Length occupied by `n` pieces of length `piece_length` placed in a row with `spacing` between neighbours.
/// Spacing only appears between pieces, never before the first or after the last one.
pub fn occupied_length(n: u64, piece_length: f64, spacing: f64) -> f64 {
    match n {
        0 => 0.0,
        n => n as f64 * piece_length + (n - 1) as f64 * spacing,
    }
}

/// Returns the largest `n` such that `n` pieces of `piece_length`, separated by `spacing`, fit within `axis_length`.
///
/// Exact multiples fit with zero slack: the final comparison is made with [`FPA`] so accumulated
/// floating point error does not drop the last piece. The tolerance is relative, so the count does not
/// depend on the unit of the lengths. Returns 0 when nothing fits,
/// including for non-positive or non-finite axis lengths.
/// `piece_length` must be strictly positive and `spacing` non-negative, see [`PackingInput::validate`](crate::entities::PackingInput::validate).
pub fn fit_count(axis_length: f64, piece_length: f64, spacing: f64) -> u64 {
    debug_assert!(piece_length > 0.0 && spacing >= 0.0);
    if !axis_length.is_finite() || axis_length <= 0.0 || FPA(piece_length) > FPA(axis_length) {
        return 0;
    }

    // n pieces need n*p + (n-1)*s <= L  <=>  n <= (L + s) / (p + s)
    let estimate = ((axis_length + spacing) / (piece_length + spacing)).floor();
    if !estimate.is_finite() || estimate >= u64::MAX as f64 {
        return u64::MAX;
    }
    if estimate >= MAX_EXACT_COUNT {
        return estimate as u64;
    }
    let mut n = estimate.max(0.0) as u64;

    //correct the estimate for rounding in the division, in both directions
    while n > 0 && FPA(occupied_length(n, piece_length, spacing)) > FPA(axis_length) {
        n -= 1;
    }
    while FPA(occupied_length(n + 1, piece_length, spacing)) <= FPA(axis_length) {
        n += 1;
    }
    n
}

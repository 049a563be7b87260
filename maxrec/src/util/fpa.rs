use std::cmp::Ordering;
use std::fmt::Display;

/// Tolerance relative to the magnitude of the compared values
const REL_TOLERANCE: f64 = 1e-9;

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they differ by at most 1e-9 times the larger of their magnitudes,
///or by a few ulps. The comparison is independent of the unit the values are expressed in.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        let epsilon = REL_TOLERANCE * f64::max(self.0.abs(), other.0.abs());
        match epsilon.is_finite() {
            true => float_cmp::approx_eq!(f64, self.0, other.0, epsilon = epsilon, ulps = 4),
            false => self.0 == other.0,
        }
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

//! Set of traits for geometric primitives.

/// Trait for types that can detect whether their interior overlaps with the interior of `other`, with a tolerance for floating point precision.
/// Shapes that only share (part of) a boundary do not overlap.
pub trait AlmostOverlapsWith<T> {
    fn almost_overlaps_with(&self, other: &T) -> bool;
}

/// Trait for types that can fully enclose `other`, with a tolerance for floating point precision.
pub trait AlmostContains<T> {
    fn almost_contains(&self, other: &T) -> bool;
}

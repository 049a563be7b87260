use thiserror::Error;

/// Errors returned by the packing engine.
/// Either a complete [`PackingResult`](crate::entities::PackingResult) is produced or one of these, never a partial layout.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PackingError {
    /// A sheet or piece dimension is not strictly positive, or a spacing/margin is negative.
    /// Non-finite values are rejected as well.
    #[error("invalid dimension for `{field}`: {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    /// The selected layout would contain more placements than the configured ceiling.
    /// Raised before any placement is allocated.
    #[error("layout of {count} pieces exceeds the limit of {limit}")]
    TooManyPieces { count: u64, limit: u64 },
}

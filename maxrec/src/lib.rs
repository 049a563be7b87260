//! `maxrec` computes how many identical rectangular pieces can be cut from a rectangular sheet,
//! laid out as a uniform grid in one of two orientations, and where each of them goes.

/// Geometric primitives and fit predicates
pub mod geometry;

/// Entities modelling a single sheet/piece packing problem and its result
pub mod entities;

/// The grid packing engine
pub mod packing;

/// Importing instances from and exporting results to their external representation
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::PackingError;

mod config;
mod engine;
mod grid;

#[doc(inline)]
pub use config::PackingConfig;
#[doc(inline)]
pub use config::DEFAULT_MAX_PIECES;
#[doc(inline)]
pub use engine::evaluate;
#[doc(inline)]
pub use engine::pack;
#[doc(inline)]
pub use engine::pack_batch;
#[doc(inline)]
pub use grid::GridCandidate;

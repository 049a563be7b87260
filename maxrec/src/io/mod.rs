/// External (serializable) representations of instances and results
pub mod ext_repr;

/// Rendering results as SVG documents
pub mod svg;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use import::ImportedInstance;

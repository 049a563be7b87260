mod instance;
mod placement;
mod result;
mod sheet;

#[doc(inline)]
pub use instance::PackingInput;
#[doc(inline)]
pub use placement::Orientation;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use result::PackingResult;
#[doc(inline)]
pub use sheet::Piece;
#[doc(inline)]
pub use sheet::Sheet;
#[doc(inline)]
pub use sheet::Spacing;

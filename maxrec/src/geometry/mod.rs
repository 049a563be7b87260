mod fit;
pub mod geo_traits;
mod rect;

#[doc(inline)]
pub use fit::fit_count;
#[doc(inline)]
pub use fit::occupied_length;
#[doc(inline)]
pub use rect::Rect;

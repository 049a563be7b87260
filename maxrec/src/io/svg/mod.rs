mod result_to_svg;
mod svg_util;

#[doc(inline)]
pub use result_to_svg::result_to_svg;
#[doc(inline)]
pub use svg_util::Color;
#[doc(inline)]
pub use svg_util::SvgDrawOptions;
#[doc(inline)]
pub use svg_util::SvgLayoutTheme;

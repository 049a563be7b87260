use maxrec::io::svg::SvgDrawOptions;
use maxrec::packing::PackingConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the gridfill binary
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct GridFillConfig {
    /// Configuration of the packing engine, instances may override `allow_rotation`
    #[serde(default)]
    pub packing: PackingConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

use crate::entities::{PackingInput, Piece, Sheet, Spacing};
use crate::io::ext_repr::ExtPackingInput;
use crate::packing::PackingConfig;

/// An imported instance together with the engine configuration that applies to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportedInstance {
    pub input: PackingInput,
    pub config: PackingConfig,
}

/// Converts an [`ExtPackingInput`] into its internal representation.
/// Missing spacing and margin default to 0, a per-instance `allowRotation` overrides the one in `config`.
/// Dimensions are not validated here, the engine rejects invalid ones.
pub fn import(ext_input: &ExtPackingInput, config: PackingConfig) -> ImportedInstance {
    let input = PackingInput::new(
        Sheet::new(ext_input.sheet_width, ext_input.sheet_height),
        Piece::new(ext_input.piece_width, ext_input.piece_height),
    )
    .with_spacing(Spacing::new(
        ext_input.spacing_x.unwrap_or(0.0),
        ext_input.spacing_y.unwrap_or(0.0),
    ))
    .with_margin(ext_input.margin.unwrap_or(0.0));

    let config = PackingConfig {
        allow_rotation: ext_input.allow_rotation.unwrap_or(config.allow_rotation),
        ..config
    };

    ImportedInstance { input, config }
}

use serde::{Deserialize, Serialize};

/// Default ceiling on the number of placements a single layout may contain.
pub const DEFAULT_MAX_PIECES: u64 = 100_000;

///Configuration of the packing engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PackingConfig {
    ///Also evaluate the piece turned by 90 degrees
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    ///Layouts with more placements are rejected before allocation. No limit if undefined
    #[serde(default = "default_max_pieces")]
    pub max_pieces: Option<u64>,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            allow_rotation: default_allow_rotation(),
            max_pieces: default_max_pieces(),
        }
    }
}

fn default_allow_rotation() -> bool {
    true
}

fn default_max_pieces() -> Option<u64> {
    Some(DEFAULT_MAX_PIECES)
}

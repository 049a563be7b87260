use crate::config::GridFillConfig;
use maxrec::io::ext_repr::{ExtPackingInput, ExtPackingOutput};
use serde::{Deserialize, Serialize};

/// Contents of an input file: one instance or a batch of them.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum ExtInputFile {
    Single(ExtPackingInput),
    Batch(Vec<ExtPackingInput>),
}

impl ExtInputFile {
    pub fn into_instances(self) -> Vec<ExtPackingInput> {
        match self {
            ExtInputFile::Single(instance) => vec![instance],
            ExtInputFile::Batch(instances) => instances,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GridFillOutput {
    pub instance: ExtPackingInput,
    pub solution: ExtPackingOutput,
    pub config: GridFillConfig,
}

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Engineering constants of the RPC interface, emitted as a flat JSON
/// document. Written once per run; nothing downstream reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceMetadata {
    pub num_channels: u32,
    pub phase_fidelity_range: [f64; 2],
    pub min_energy_recovery: f64,
    #[serde(rename = "wdm_crosstalk_bound_dB")]
    pub wdm_crosstalk_bound_db: f64,
    pub wdm_enabled: bool,
    pub ring_radius_um: f64,
    pub notes: String,
}

impl Default for InterfaceMetadata {
    fn default() -> Self {
        Self {
            num_channels: 8,
            phase_fidelity_range: [0.98, 0.995],
            min_energy_recovery: 0.95,
            wdm_crosstalk_bound_db: -25.0,
            wdm_enabled: true,
            ring_radius_um: 10.0,
            notes: "Generated from Lean4 invariants".to_string(),
        }
    }
}

/// Write the metadata document as pretty-printed JSON (2-space indent),
/// overwriting any existing file at `path`.
pub fn write_metadata<P: AsRef<Path>>(
    metadata: &InterfaceMetadata,
    path: P,
) -> Result<(), MetadataError> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(BufWriter::new(file), metadata)?;
    log::info!("wrote metadata to {}", path.as_ref().display());
    Ok(())
}

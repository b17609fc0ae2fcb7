use crate::error::{CliError, Result};
use moldesc::workflows::featurize::{MoleculeDescriptors, MoleculeInput};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MoleculeBatch {
    #[serde(rename = "molecule", default)]
    molecules: Vec<MoleculeInput>,
}

#[derive(Serialize)]
struct DescriptorReport<'a> {
    #[serde(rename = "molecule")]
    molecules: &'a [MoleculeDescriptors],
}

/// Reads a TOML file of `[[molecule]]` tables.
pub fn read_molecules(path: &Path) -> Result<Vec<MoleculeInput>> {
    debug!("Reading molecules from {:?}", path);
    let content = std::fs::read_to_string(path)?;
    let batch: MoleculeBatch = toml::from_str(&content).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    Ok(batch.molecules)
}

/// Writes descriptors as a TOML file of `[[molecule]]` tables, one per input molecule.
pub fn write_descriptors(path: &Path, descriptors: &[MoleculeDescriptors]) -> Result<()> {
    let report = DescriptorReport {
        molecules: descriptors,
    };
    let content = toml::to_string(&report).map_err(|e| CliError::FileWriting {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    std::fs::write(path, content)?;
    debug!("Wrote {} descriptor set(s) to {:?}", descriptors.len(), path);
    Ok(())
}

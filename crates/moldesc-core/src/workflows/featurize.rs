use crate::core::bonding::classifier::BondClassifier;
use crate::core::graph::distance::hop_distances_n;
use crate::core::graph::mask::depth_mask_from_distances;
use crate::core::models::lattice::UnitCell;
use crate::core::models::state::{LazyValues, StateError};
use crate::core::models::topology::{BondOrder, ConnectivityGraph, add_bond};
use crate::core::utils::chains::element_pairs;
use crate::core::utils::geometry::coulomb_matrix;
use crate::engine::config::FeaturizeConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use itertools::Itertools;
use nalgebra::{DMatrix, Point3, Scalar};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// One molecule as supplied by the caller. Either `elements` or `numbers` must be
/// present; `bonds` and `unit-cell` are optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MoleculeInput {
    pub name: String,
    pub elements: Option<Vec<String>>,
    pub numbers: Option<Vec<u8>>,
    pub coordinates: Vec<[f64; 3]>,
    /// Explicit bonds as `(i, j, label)`; bonds are inferred from geometry when absent.
    pub bonds: Option<Vec<(usize, usize, String)>>,
    /// Lattice vectors as rows.
    pub unit_cell: Option<[[f64; 3]; 3]>,
}

impl MoleculeInput {
    fn invalid(&self, reason: String) -> EngineError {
        EngineError::InvalidInput {
            name: self.name.clone(),
            reason,
        }
    }

    fn explicit_connections(&self, bonds: &[(usize, usize, String)]) -> Result<ConnectivityGraph, EngineError> {
        let atom_count = self.coordinates.len();
        let mut graph: ConnectivityGraph = (0..atom_count).map(|i| (i, BTreeMap::new())).collect();
        for (i, j, label) in bonds {
            if *i >= atom_count || *j >= atom_count {
                return Err(self.invalid(format!(
                    "bond ({}, {}) references an atom outside 0..{}",
                    i, j, atom_count
                )));
            }
            if i == j {
                return Err(self.invalid(format!("bond ({}, {}) connects an atom to itself", i, j)));
            }
            let order: BondOrder = label.parse().map_err(|e| self.invalid(format!("{}", e)))?;
            add_bond(&mut graph, *i, *j, order);
        }
        Ok(graph)
    }

    /// Builds the lazy state for this molecule.
    pub fn to_state(&self, classifier: BondClassifier) -> Result<LazyValues, EngineError> {
        let mut values = LazyValues::new()
            .with_classifier(classifier)
            .with_coordinates(
                self.coordinates
                    .iter()
                    .map(|&p| Point3::from(p))
                    .collect::<Vec<_>>(),
            );
        if let Some(elements) = &self.elements {
            values = values.with_elements(elements.iter().cloned());
        }
        if let Some(numbers) = &self.numbers {
            values = values.with_numbers(numbers.clone());
        }
        if let Some(bonds) = &self.bonds {
            values = values.with_connections(self.explicit_connections(bonds)?);
        }
        if let Some(rows) = self.unit_cell {
            values = values.with_unit_cell(UnitCell::from_rows(rows));
        }
        Ok(values)
    }
}

/// Descriptors computed for one molecule. Matrices are stored row by row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MoleculeDescriptors {
    pub name: String,
    pub elements: Vec<String>,
    pub numbers: Vec<u8>,
    /// Each bond once as `(i, j, label)` with `i < j`.
    pub bonds: Vec<(usize, usize, String)>,
    pub hop_distances: Vec<Vec<f64>>,
    pub depth_mask: Vec<Vec<bool>>,
    pub coulomb_matrix: Vec<Vec<f64>>,
    pub element_pairs: Vec<(String, String)>,
    pub warnings: Vec<String>,
}

fn rows<T: Scalar>(matrix: &DMatrix<T>) -> Vec<Vec<T>> {
    matrix
        .row_iter()
        .map(|row| row.iter().cloned().collect())
        .collect()
}

fn bond_list(graph: &ConnectivityGraph) -> Vec<(usize, usize, String)> {
    let mut unique = BTreeMap::new();
    for (&a, neighbors) in graph {
        for (&b, order) in neighbors {
            if a != b {
                unique.entry((a.min(b), a.max(b))).or_insert(*order);
            }
        }
    }
    unique
        .into_iter()
        .map(|((i, j), order)| (i, j, order.label().to_string()))
        .collect()
}

fn describe(
    name: &str,
    values: &mut LazyValues,
    config: &FeaturizeConfig,
) -> Result<MoleculeDescriptors, StateError> {
    let atom_count = values.atom_count()?;
    let graph = values.connections()?.clone();
    let elements = values.elements()?.to_vec();
    let numbers = values.numbers()?.to_vec();

    let distances = hop_distances_n(&graph, atom_count);
    let mask = depth_mask_from_distances(&distances, config.depth.min_depth, config.depth.max_depth);
    let coulomb = coulomb_matrix(
        &numbers,
        values.coordinates()?,
        config.coulomb.alpha,
        config.coulomb.use_decay,
    )?;

    Ok(MoleculeDescriptors {
        name: name.to_string(),
        bonds: bond_list(&graph),
        hop_distances: rows(&distances),
        depth_mask: rows(&mask),
        coulomb_matrix: rows(&coulomb),
        element_pairs: element_pairs(&elements).into_iter().collect(),
        warnings: values
            .warnings()
            .iter()
            .unique_by(|w| w.symbols.iter().cloned().sorted().collect::<Vec<_>>())
            .map(ToString::to_string)
            .collect(),
        elements,
        numbers,
    })
}

/// Featurizes a single molecule with an already-built classifier.
pub fn featurize_molecule(
    input: &MoleculeInput,
    classifier: &BondClassifier,
    config: &FeaturizeConfig,
) -> Result<MoleculeDescriptors, EngineError> {
    let mut values = input.to_state(classifier.clone())?;
    let wrap = |source| EngineError::Molecule {
        name: input.name.clone(),
        source,
    };

    match (config.crystal, input.unit_cell.is_some()) {
        (Some(replication), true) => {
            values.fill_in_crystal(replication).map_err(wrap)?;
        }
        (Some(_), false) => {
            debug!(molecule = %input.name, "no unit cell; skipping crystal replication");
        }
        _ => {}
    }

    describe(&input.name, &mut values, config).map_err(wrap)
}

/// Featurizes a batch of molecules in parallel, preserving input order.
///
/// The first molecule that fails aborts the batch.
#[instrument(skip_all, name = "featurize_workflow", fields(molecules = inputs.len()))]
pub fn run(
    inputs: &[MoleculeInput],
    config: &FeaturizeConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<MoleculeDescriptors>, EngineError> {
    reporter.report(Progress::PhaseStart { name: "Preparation" });
    let classifier = config.bonding.classifier()?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Featurization" });
    reporter.report(Progress::BatchStart {
        molecules: inputs.len() as u64,
    });
    let results = inputs
        .par_iter()
        .map(|input| {
            let descriptors = featurize_molecule(input, &classifier, config)?;
            reporter.report(Progress::MoleculeDone {
                name: input.name.clone(),
                atoms: descriptors.numbers.len(),
            });
            Ok(descriptors)
        })
        .collect::<Result<Vec<_>, EngineError>>()?;
    reporter.report(Progress::BatchFinish);
    reporter.report(Progress::PhaseFinish);

    let warned = results.iter().filter(|d| !d.warnings.is_empty()).count();
    if warned > 0 {
        reporter.report(Progress::Message(format!(
            "{} molecule(s) contained elements without bonding radii",
            warned
        )));
    }
    info!("Featurized {} molecule(s).", results.len());
    Ok(results)
}

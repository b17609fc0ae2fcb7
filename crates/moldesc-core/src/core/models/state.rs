use super::element::{ElementError, numbers_to_symbols, symbols_to_numbers};
use super::lattice::{Replication, ReplicationError, UnitCell, translations};
use super::topology::{ConnectivityGraph, add_directed_bond};
use crate::core::bonding::classifier::{BondClassifier, UnknownElementWarning};
use crate::core::bonding::connectivity::{ConnectivityError, build_connections, build_cross_connections};
use crate::core::utils::geometry::{GeometryError, min_distance};
use nalgebra::Point3;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, instrument};

/// Slack added to the replication radius so images lying exactly on the sphere survive.
const RADIUS_EPSILON: f64 = 1e-8;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Cannot resolve elements without elements or numbers")]
    MissingElements,
    #[error("Cannot resolve numbers without elements or numbers")]
    MissingNumbers,
    #[error("Coordinates were not provided and cannot be derived")]
    MissingCoordinates,
    #[error("Unit cell was not provided; periodicity cannot be inferred")]
    MissingUnitCell,
    #[error("{field} has {actual} entries but the molecule has {expected} atoms")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("Invalid crystal replication: {0}")]
    Replication(#[from] ReplicationError),
}

/// One translated copy of the home cell after replication.
struct Image {
    /// Indices into the original atom list of the atoms kept in this copy.
    atoms: Vec<usize>,
    positions: Vec<Point3<f64>>,
    /// Global index of this copy's first atom.
    base: usize,
}

/// Molecular state that derives missing representations on first access.
///
/// Callers supply whichever of elements, atomic numbers, coordinates,
/// connectivity and unit cell they have. Each accessor returns the supplied
/// value, or derives it from the others once and caches the result:
///
/// - elements ⇄ numbers through the periodic table,
/// - connections from elements and coordinates through the bond classifier.
///
/// Coordinates and the unit cell are never derived. Accessors take `&mut self`
/// because derivation fills the cache; the container is meant to be owned by a
/// single caller.
#[derive(Debug, Clone, Default)]
pub struct LazyValues {
    elements: Option<Vec<String>>,
    numbers: Option<Vec<u8>>,
    coordinates: Option<Vec<Point3<f64>>>,
    connections: Option<ConnectivityGraph>,
    unit_cell: Option<UnitCell>,
    classifier: BondClassifier,
    warnings: Vec<UnknownElementWarning>,
}

impl LazyValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements<S: Into<String>>(mut self, elements: impl IntoIterator<Item = S>) -> Self {
        self.elements = Some(elements.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_numbers(mut self, numbers: impl Into<Vec<u8>>) -> Self {
        self.numbers = Some(numbers.into());
        self
    }

    pub fn with_coordinates(mut self, coordinates: impl Into<Vec<Point3<f64>>>) -> Self {
        self.coordinates = Some(coordinates.into());
        self
    }

    pub fn with_connections(mut self, connections: ConnectivityGraph) -> Self {
        self.connections = Some(connections);
        self
    }

    pub fn with_unit_cell(mut self, unit_cell: UnitCell) -> Self {
        self.unit_cell = Some(unit_cell);
        self
    }

    /// Replaces the classifier used to derive connections.
    pub fn with_classifier(mut self, classifier: BondClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Unknown-element diagnostics collected while deriving connections.
    pub fn warnings(&self) -> &[UnknownElementWarning] {
        &self.warnings
    }

    /// Atom count taken from the first available per-atom field.
    pub fn len(&self) -> Option<usize> {
        self.elements
            .as_ref()
            .map(Vec::len)
            .or_else(|| self.numbers.as_ref().map(Vec::len))
            .or_else(|| self.coordinates.as_ref().map(Vec::len))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    pub fn elements(&mut self) -> Result<&[String], StateError> {
        if self.elements.is_none() {
            let numbers = self.numbers.as_deref().ok_or(StateError::MissingElements)?;
            self.elements = Some(numbers_to_symbols(numbers)?);
        }
        self.elements.as_deref().ok_or(StateError::MissingElements)
    }

    pub fn numbers(&mut self) -> Result<&[u8], StateError> {
        if self.numbers.is_none() {
            let elements = self.elements.as_deref().ok_or(StateError::MissingNumbers)?;
            self.numbers = Some(symbols_to_numbers(elements)?);
        }
        self.numbers.as_deref().ok_or(StateError::MissingNumbers)
    }

    pub fn coordinates(&self) -> Result<&[Point3<f64>], StateError> {
        self.coordinates.as_deref().ok_or(StateError::MissingCoordinates)
    }

    pub fn unit_cell(&self) -> Result<&UnitCell, StateError> {
        self.unit_cell.as_ref().ok_or(StateError::MissingUnitCell)
    }

    /// Supplied connectivity, or the single-set bond graph derived from the
    /// resolved elements and coordinates.
    pub fn connections(&mut self) -> Result<&ConnectivityGraph, StateError> {
        if self.connections.is_none() {
            self.elements()?;
            let elements = self.elements.as_deref().ok_or(StateError::MissingElements)?;
            let coordinates = self.coordinates.as_deref().ok_or(StateError::MissingCoordinates)?;
            let derived = build_connections(&self.classifier, elements, coordinates)?;
            debug!(
                atoms = elements.len(),
                warnings = derived.warnings.len(),
                "derived connectivity from geometry"
            );
            self.warnings.extend(derived.warnings);
            self.connections = Some(derived.graph);
        }
        self.connections.as_ref().ok_or(StateError::MissingCoordinates)
    }

    /// Expands the system across neighboring unit cells.
    ///
    /// Elements, numbers, coordinates and connections are replaced by those of the
    /// expanded system. The home cell comes first so original atom indices are
    /// preserved; the other images follow in lexicographic translation order. Each
    /// image inherits the home cell's internal bonds, and every ordered pair of
    /// distinct images is linked through directed cross connectivity, so the
    /// merged graph stays symmetric.
    ///
    /// With [`Replication::Radius`], image atoms farther than the radius from every
    /// original atom are dropped.
    ///
    /// # Errors
    ///
    /// Fails before touching any state if the unit cell, elements, numbers,
    /// coordinates or connections cannot be resolved, or if the replication cannot
    /// be applied to this cell.
    #[instrument(level = "debug", skip(self))]
    pub fn fill_in_crystal(&mut self, replication: Replication) -> Result<(), StateError> {
        let cell = *self.unit_cell()?;
        self.atom_count()?;
        let elements = self.elements()?.to_vec();
        let numbers = self.numbers()?.to_vec();
        let coordinates = self.coordinates()?.to_vec();
        let home_connections = self.connections()?.clone();

        let half_widths = replication.half_widths(&cell)?;
        let cutoff = replication.cutoff_radius();

        let mut images = Vec::new();
        let mut total = 0;
        for translation in translations(half_widths) {
            let offset = cell.offset(translation);
            let (atoms, positions): (Vec<usize>, Vec<Point3<f64>>) = coordinates
                .iter()
                .map(|p| p + offset)
                .enumerate()
                .filter(|(_, p)| cutoff.is_none_or(|r| min_distance(p, &coordinates) <= r + RADIUS_EPSILON))
                .unzip();
            if atoms.is_empty() {
                continue;
            }
            let count = atoms.len();
            images.push(Image {
                atoms,
                positions,
                base: total,
            });
            total += count;
        }
        debug!(
            ?half_widths,
            images = images.len(),
            atoms = total,
            "replicated unit cell"
        );

        let mut graph: ConnectivityGraph = (0..total).map(|i| (i, BTreeMap::new())).collect();
        for image in &images {
            let local: BTreeMap<usize, usize> = image
                .atoms
                .iter()
                .enumerate()
                .map(|(pos, &orig)| (orig, image.base + pos))
                .collect();
            for (from, neighbors) in &home_connections {
                let Some(&global_from) = local.get(from) else {
                    continue;
                };
                for (to, order) in neighbors {
                    if let Some(&global_to) = local.get(to) {
                        add_directed_bond(&mut graph, global_from, global_to, *order);
                    }
                }
            }
        }

        let image_elements: Vec<Vec<&str>> = images
            .iter()
            .map(|image| image.atoms.iter().map(|&i| elements[i].as_str()).collect())
            .collect();
        for (a, image_a) in images.iter().enumerate() {
            for (b, image_b) in images.iter().enumerate() {
                if a == b {
                    continue;
                }
                let cross = build_cross_connections(
                    &self.classifier,
                    &image_elements[a],
                    &image_a.positions,
                    &image_elements[b],
                    &image_b.positions,
                )?;
                self.warnings.extend(cross.warnings);
                for (i, neighbors) in cross.graph {
                    for (j, order) in neighbors {
                        add_directed_bond(&mut graph, image_a.base + i, image_b.base + j, order);
                    }
                }
            }
        }

        let mut new_elements = Vec::with_capacity(total);
        let mut new_numbers = Vec::with_capacity(total);
        let mut new_coordinates = Vec::with_capacity(total);
        for image in images {
            new_elements.extend(image.atoms.iter().map(|&i| elements[i].clone()));
            new_numbers.extend(image.atoms.iter().map(|&i| numbers[i]));
            new_coordinates.extend(image.positions);
        }

        self.elements = Some(new_elements);
        self.numbers = Some(new_numbers);
        self.coordinates = Some(new_coordinates);
        self.connections = Some(graph);
        Ok(())
    }

    /// Resolves elements, numbers and coordinates and checks they describe the
    /// same number of atoms.
    pub fn atom_count(&mut self) -> Result<usize, StateError> {
        let expected = self.elements()?.len();
        for (field, actual) in [
            ("numbers", self.numbers()?.len()),
            ("coordinates", self.coordinates()?.len()),
        ] {
            if actual != expected {
                return Err(StateError::LengthMismatch {
                    field,
                    expected,
                    actual,
                });
            }
        }
        Ok(expected)
    }
}

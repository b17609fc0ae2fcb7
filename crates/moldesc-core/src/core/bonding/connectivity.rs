use super::classifier::{BondClassifier, UnknownElementWarning};
use crate::core::models::topology::{ConnectivityGraph, add_directed_bond};
use crate::core::utils::geometry::cross_distances;
use nalgebra::Point3;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectivityError {
    #[error("Atom set has {elements} element(s) but {coordinates} coordinate(s)")]
    LengthMismatch { elements: usize, coordinates: usize },
}

/// A derived connectivity graph together with the diagnostics raised while building it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Connectivity {
    pub graph: ConnectivityGraph,
    pub warnings: Vec<UnknownElementWarning>,
}

fn check_lengths<S>(elements: &[S], coordinates: &[Point3<f64>]) -> Result<(), ConnectivityError> {
    if elements.len() != coordinates.len() {
        return Err(ConnectivityError::LengthMismatch {
            elements: elements.len(),
            coordinates: coordinates.len(),
        });
    }
    Ok(())
}

/// Bonds every pair of atoms within one set whose classification is not "no bond".
///
/// The result is symmetric and every atom index appears as a key, including
/// atoms without neighbors.
pub fn build_connections<S: AsRef<str>>(
    classifier: &BondClassifier,
    elements: &[S],
    coordinates: &[Point3<f64>],
) -> Result<Connectivity, ConnectivityError> {
    check_lengths(elements, coordinates)?;

    let distances = cross_distances(coordinates, coordinates);
    let mut graph: ConnectivityGraph = (0..elements.len()).map(|i| (i, BTreeMap::new())).collect();
    let mut warnings = Vec::new();

    for i in 0..elements.len() {
        for j in (i + 1)..elements.len() {
            let result = classifier.classify(elements[i].as_ref(), elements[j].as_ref(), distances[(i, j)]);
            warnings.extend(result.warning);
            if let Some(order) = result.order {
                trace!(i, j, %order, distance = distances[(i, j)], "bond detected");
                add_directed_bond(&mut graph, i, j, order);
                add_directed_bond(&mut graph, j, i, order);
            }
        }
    }

    Ok(Connectivity { graph, warnings })
}

/// Links atoms of set `a` to atoms of set `b`.
///
/// Only directed edges `a -> b` are recorded, indexed locally within each set;
/// every index of `a` appears as a key. Callers merging several such graphs are
/// responsible for shifting indices into a shared index space.
pub fn build_cross_connections<S: AsRef<str>, T: AsRef<str>>(
    classifier: &BondClassifier,
    elements_a: &[S],
    coordinates_a: &[Point3<f64>],
    elements_b: &[T],
    coordinates_b: &[Point3<f64>],
) -> Result<Connectivity, ConnectivityError> {
    check_lengths(elements_a, coordinates_a)?;
    check_lengths(elements_b, coordinates_b)?;

    let distances = cross_distances(coordinates_a, coordinates_b);
    let mut graph: ConnectivityGraph = (0..elements_a.len()).map(|i| (i, BTreeMap::new())).collect();
    let mut warnings = Vec::new();

    for (i, element_a) in elements_a.iter().enumerate() {
        for (j, element_b) in elements_b.iter().enumerate() {
            let result = classifier.classify(element_a.as_ref(), element_b.as_ref(), distances[(i, j)]);
            warnings.extend(result.warning);
            if let Some(order) = result.order {
                add_directed_bond(&mut graph, i, j, order);
            }
        }
    }

    Ok(Connectivity { graph, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::topology::{BondOrder, is_symmetric};

    fn methane() -> (Vec<&'static str>, Vec<Point3<f64>>) {
        (
            vec!["C", "H", "H", "H", "H"],
            vec![
                Point3::new(0.99826008, -0.00246000, -0.00436000),
                Point3::new(2.09021016, -0.00243000, 0.00414000),
                Point3::new(0.63379005, 1.02686007, 0.00414000),
                Point3::new(0.62704006, -0.52773003, 0.87811010),
                Point3::new(0.64136006, -0.50747003, -0.90540005),
            ],
        )
    }

    #[test]
    fn methane_is_a_symmetric_star() {
        let (elements, coords) = methane();
        let conn = build_connections(&BondClassifier::default(), &elements, &coords).unwrap();

        assert!(conn.warnings.is_empty());
        assert_eq!(conn.graph.len(), 5);
        assert_eq!(conn.graph[&0].len(), 4);
        for h in 1..5 {
            assert_eq!(conn.graph[&0][&h], BondOrder::Single);
            assert_eq!(conn.graph[&h].len(), 1);
            assert_eq!(conn.graph[&h][&0], BondOrder::Single);
        }
        assert!(is_symmetric(&conn.graph));
    }

    #[test]
    fn self_loops_are_never_recorded() {
        let (elements, coords) = methane();
        let conn = build_connections(&BondClassifier::default(), &elements, &coords).unwrap();
        for (atom, neighbors) in &conn.graph {
            assert!(!neighbors.contains_key(atom));
        }
    }

    #[test]
    fn isolated_atoms_are_still_registered() {
        let elements = ["H", "H"];
        let coords = [Point3::origin(), Point3::new(10.0, 0.0, 0.0)];
        let conn = build_connections(&BondClassifier::default(), &elements, &coords).unwrap();
        assert_eq!(conn.graph.len(), 2);
        assert!(conn.graph.values().all(|n| n.is_empty()));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let elements = ["H", "H"];
        let coords = [Point3::origin()];
        let result = build_connections(&BondClassifier::default(), &elements, &coords);
        assert_eq!(
            result,
            Err(ConnectivityError::LengthMismatch {
                elements: 2,
                coordinates: 1
            })
        );
    }

    #[test]
    fn unknown_elements_produce_one_warning_per_pair_and_continue() {
        let elements = ["Xx", "C", "H"];
        let coords = [
            Point3::origin(),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(6.09, 0.0, 0.0),
        ];
        let conn = build_connections(&BondClassifier::default(), &elements, &coords).unwrap();
        assert_eq!(conn.warnings.len(), 2);
        assert_eq!(conn.graph[&1][&2], BondOrder::Single);
        assert!(conn.graph[&0].is_empty());
    }

    #[test]
    fn cross_connections_are_directed_from_a_to_b() {
        let a = ["H"];
        let coords_a = [Point3::origin()];
        let b = ["H", "H"];
        let coords_b = [Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 3.0, 0.0)];
        let conn =
            build_cross_connections(&BondClassifier::default(), &a, &coords_a, &b, &coords_b)
                .unwrap();

        assert_eq!(conn.graph.len(), 1);
        assert_eq!(conn.graph[&0].len(), 1);
        assert_eq!(conn.graph[&0][&0], BondOrder::Single);
        assert!(!conn.graph[&0].contains_key(&1));
    }

    #[test]
    fn cross_connections_check_both_sets() {
        let result = build_cross_connections(
            &BondClassifier::default(),
            &["H"],
            &[Point3::origin()],
            &["H", "H"],
            &[Point3::origin()],
        );
        assert!(matches!(
            result,
            Err(ConnectivityError::LengthMismatch { elements: 2, .. })
        ));
    }
}

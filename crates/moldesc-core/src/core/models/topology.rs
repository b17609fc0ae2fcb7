use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bond order assigned to an edge of the connectivity graph.
///
/// Orders are labelled the way downstream featurizers key them: `"1"`, `"Ar"`,
/// `"2"`, `"3"`, with `"?"` marking a bond whose order could not be assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BondOrder {
    Single,
    Aromatic,
    Double,
    Triple,
    Unknown,
}

impl Default for BondOrder {
    fn default() -> Self {
        BondOrder::Single
    }
}

impl BondOrder {
    /// Orders tried by the classifier, strongest (shortest) bond first.
    pub const PRECEDENCE: [BondOrder; 4] = [
        BondOrder::Triple,
        BondOrder::Double,
        BondOrder::Aromatic,
        BondOrder::Single,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "1",
            Self::Aromatic => "Ar",
            Self::Double => "2",
            Self::Triple => "3",
            Self::Unknown => "?",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid bond order label: '{0}'")]
pub struct ParseBondOrderError(pub String);

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            "ar" | "aromatic" => Ok(Self::Aromatic),
            "?" | "unknown" => Ok(Self::Unknown),
            _ => Err(ParseBondOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Adjacency map from atom index to its bonded neighbors and their bond orders.
///
/// Graphs built within a single atom set are symmetric; graphs linking two
/// disjoint sets only carry edges pointing from the first set to the second.
pub type ConnectivityGraph = BTreeMap<usize, BTreeMap<usize, BondOrder>>;

/// Records `from -> to` in the graph, overwriting any previous order on that edge.
pub fn add_directed_bond(graph: &mut ConnectivityGraph, from: usize, to: usize, order: BondOrder) {
    graph.entry(from).or_default().insert(to, order);
}

/// Records a bond in both directions.
pub fn add_bond(graph: &mut ConnectivityGraph, a: usize, b: usize, order: BondOrder) {
    add_directed_bond(graph, a, b, order);
    add_directed_bond(graph, b, a, order);
}

/// Builds an undirected graph from a bond list, registering every index below
/// `atom_count` even if it has no bonds.
pub fn graph_from_bonds(atom_count: usize, bonds: &[(usize, usize, BondOrder)]) -> ConnectivityGraph {
    let mut graph: ConnectivityGraph = (0..atom_count).map(|i| (i, BTreeMap::new())).collect();
    for &(a, b, order) in bonds {
        if a != b {
            add_bond(&mut graph, a, b, order);
        }
    }
    graph
}

pub fn is_symmetric(graph: &ConnectivityGraph) -> bool {
    graph.iter().all(|(&from, neighbors)| {
        neighbors.iter().all(|(to, order)| {
            graph
                .get(to)
                .and_then(|back| back.get(&from))
                .is_some_and(|back_order| back_order == order)
        })
    })
}

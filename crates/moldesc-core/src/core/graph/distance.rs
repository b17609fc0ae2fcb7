use crate::core::models::topology::ConnectivityGraph;
use nalgebra::DMatrix;
use std::collections::VecDeque;

/// Hop-count distances between atoms; unreachable pairs hold `f64::INFINITY`.
pub type DistanceMatrix = DMatrix<f64>;

/// Number of atoms spanned by a graph: one past the largest index seen as a key or neighbor.
pub fn node_count(graph: &ConnectivityGraph) -> usize {
    graph
        .iter()
        .flat_map(|(&atom, neighbors)| std::iter::once(atom).chain(neighbors.keys().copied()))
        .max()
        .map_or(0, |max| max + 1)
}

/// All-pairs shortest path lengths over the graph, counting every bond as one hop.
pub fn hop_distances(graph: &ConnectivityGraph) -> DistanceMatrix {
    hop_distances_n(graph, node_count(graph))
}

/// Like [`hop_distances`] but over exactly `n` atoms, so atoms with no bonds beyond
/// the largest graph index are still represented.
///
/// Edges are traversed in both directions, so the result is symmetric even for
/// graphs that only carry one direction of a bond. Edges touching an index
/// `>= n` are ignored.
pub fn hop_distances_n(graph: &ConnectivityGraph, n: usize) -> DistanceMatrix {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (&atom, neighbors) in graph {
        for &neighbor in neighbors.keys() {
            if atom < n && neighbor < n && atom != neighbor {
                adjacency[atom].push(neighbor);
                adjacency[neighbor].push(atom);
            }
        }
    }
    for list in &mut adjacency {
        list.sort_unstable();
        list.dedup();
    }

    let mut distances = DMatrix::from_element(n, n, f64::INFINITY);
    let mut hops: Vec<Option<u32>> = vec![None; n];
    let mut queue = VecDeque::new();

    for start in 0..n {
        hops.fill(None);
        hops[start] = Some(0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let next = hops[current].map_or(0, |h| h + 1);
            for &neighbor in &adjacency[current] {
                if hops[neighbor].is_none() {
                    hops[neighbor] = Some(next);
                    queue.push_back(neighbor);
                }
            }
        }

        for (target, h) in hops.iter().enumerate() {
            if let Some(h) = h {
                distances[(start, target)] = *h as f64;
            }
        }
    }

    distances
}

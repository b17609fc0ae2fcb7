use super::distance::{DistanceMatrix, hop_distances};
use crate::core::models::topology::ConnectivityGraph;
use nalgebra::DMatrix;

pub type DepthMask = DMatrix<bool>;

/// Selects atom pairs whose hop distance lies in `[min_depth, max_depth]`.
///
/// A `max_depth` of zero removes the upper bound, selecting the whole molecule.
/// Passing `f64::INFINITY` as `min_depth` selects only pairs in different
/// connected components.
pub fn depth_mask(graph: &ConnectivityGraph, min_depth: f64, max_depth: f64) -> DepthMask {
    depth_mask_from_distances(&hop_distances(graph), min_depth, max_depth)
}

pub fn depth_mask_from_distances(distances: &DistanceMatrix, min_depth: f64, max_depth: f64) -> DepthMask {
    let unbounded = max_depth == 0.0;
    distances.map(|d| d >= min_depth && (unbounded || d <= max_depth))
}

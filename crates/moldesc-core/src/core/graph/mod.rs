//! # Graph Module
//!
//! Topological measures over a [`ConnectivityGraph`](crate::core::models::topology::ConnectivityGraph).
//!
//! - [`distance`] - All-pairs hop distances by breadth-first search
//! - [`mask`] - Boolean atom-pair selection by hop-distance window

pub mod distance;
pub mod mask;

//! # Core Module
//!
//! Stateless building blocks for molecular descriptor computation.
//!
//! ## Overview
//!
//! The core module holds the molecular data model and the pure algorithms that act
//! on it. Nothing here performs I/O beyond loading a radius table, and nothing here
//! spawns threads; batching and orchestration live in the `engine` and `workflows`
//! layers.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Elements, bond topology, unit cells and the lazy state container
//! - **Bond Perception** ([`bonding`]) - Covalent radius tables and distance-based bond classification
//! - **Graph Measures** ([`graph`]) - Hop distances and depth-window masks over the bond graph
//! - **Numerical Helpers** ([`utils`]) - Distance and Coulomb matrices, element pair and chain utilities

pub mod bonding;
pub mod graph;
pub mod models;
pub mod utils;

//! # Core Models Module
//!
//! Data structures describing a molecule: which atoms it holds, where they sit,
//! how they are bonded and, for crystals, which lattice they repeat on.
//!
//! ## Overview
//!
//! - [`element`] - Periodic table lookups between element symbols and atomic numbers
//! - [`topology`] - Bond orders and the adjacency map used as the connectivity graph
//! - [`lattice`] - Unit cells and the replication extent used to build crystal supercells
//! - [`state`] - [`LazyValues`](state::LazyValues), a molecular state container that
//!   derives missing representations on demand
//!
//! ## Usage
//!
//! ```ignore
//! use moldesc::core::models::state::LazyValues;
//!
//! let mut values = LazyValues::new()
//!     .with_elements(["C", "H", "H", "H", "H"])
//!     .with_coordinates(coordinates);
//! let numbers = values.numbers()?.to_vec();
//! let graph = values.connections()?;
//! ```

pub mod element;
pub mod lattice;
pub mod state;
pub mod topology;

//! # moldesc Core Library
//!
//! Molecular descriptor primitives: element lookup, distance-based bond perception,
//! bond-graph hop distances, depth-window masks and a lazily derived molecular state
//! that can be expanded into a crystal supercell.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`LazyValues`, `ConnectivityGraph`,
//!   `UnitCell`) and the pure algorithms acting on them (bond classification, breadth-first
//!   hop distances, Coulomb matrices).
//!
//! - **[`engine`]: The Plumbing.** Validated configuration, progress reporting and
//!   workflow-level errors.
//!
//! - **[`workflows`]: The Public API.** Batch featurization that ties `engine` and `core`
//!   together and returns serializable descriptors.

pub mod core;
pub mod engine;
pub mod workflows;

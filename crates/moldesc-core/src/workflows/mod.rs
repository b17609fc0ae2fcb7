//! # Workflows Module
//!
//! High-level entry points that run the complete descriptor pipeline.
//!
//! ## Overview
//!
//! A workflow takes plain molecule inputs and a [`FeaturizeConfig`](crate::engine::config::FeaturizeConfig),
//! builds the lazy state for every molecule, optionally expands periodic inputs into a
//! supercell, and collects bond graphs, hop distances, depth masks, Coulomb matrices and
//! element pairs into serializable results.
//!
//! - **Featurization Workflow** ([`featurize`]) - Parallel batch featurization with progress reporting

pub mod featurize;

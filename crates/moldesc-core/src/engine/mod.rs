//! # Engine Module
//!
//! Runtime plumbing shared by the featurization workflows.
//!
//! ## Overview
//!
//! The engine layer turns user-facing settings into the objects the core algorithms
//! need, and defines how workflows report failures and progress.
//!
//! - **Configuration** ([`config`]) - Bonding, depth window, Coulomb and crystal settings with a validating builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for front ends
//! - **Error Handling** ([`error`]) - Workflow errors tagged with the failing molecule

pub mod config;
pub mod error;
pub mod progress;

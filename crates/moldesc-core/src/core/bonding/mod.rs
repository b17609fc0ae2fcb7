//! # Bonding Module
//!
//! Derives bond topology from element identities and 3D geometry.
//!
//! ## Overview
//!
//! Bonds are inferred purely from interatomic distance: two atoms are bonded with a
//! given order when they sit no farther apart than the sum of their covalent radii
//! for that order, optionally widened by a relative tolerance.
//!
//! - [`radii`] - Built-in and user-supplied covalent radius tables per bond order
//! - [`classifier`] - Pairwise bond-order classification with unknown-element diagnostics
//! - [`connectivity`] - Whole-molecule and cross-set connectivity graphs

pub mod classifier;
pub mod connectivity;
pub mod radii;

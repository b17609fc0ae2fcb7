use itertools::iproduct;
use nalgebra::{Matrix3, Vector3};
use thiserror::Error;

/// Lattice basis of a periodic system; each row is one basis vector in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCell {
    basis: Matrix3<f64>,
}

impl UnitCell {
    pub fn new(basis: Matrix3<f64>) -> Self {
        Self { basis }
    }

    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self::new(Matrix3::from_fn(|i, j| rows[i][j]))
    }

    pub fn basis(&self) -> &Matrix3<f64> {
        &self.basis
    }

    pub fn axis(&self, idx: usize) -> Vector3<f64> {
        self.basis.row(idx).transpose()
    }

    pub fn axis_lengths(&self) -> [f64; 3] {
        [0, 1, 2].map(|idx| self.axis(idx).norm())
    }

    /// Cartesian displacement of the lattice translation `(i, j, k)`.
    pub fn offset(&self, translation: [i32; 3]) -> Vector3<f64> {
        let t = Vector3::new(
            translation[0] as f64,
            translation[1] as f64,
            translation[2] as f64,
        );
        (t.transpose() * self.basis).transpose()
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReplicationError {
    #[error("Replication units must hold exactly 1 or 3 values, got {0}")]
    InvalidUnitsLength(usize),
    #[error("Replication units must be non-negative, got {0}")]
    NegativeUnits(i64),
    #[error("Only one of radius or units may be given")]
    Ambiguous,
    #[error("Either a radius or replication units are required")]
    Missing,
    #[error("Replication radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    #[error("Lattice vector {0} has zero length")]
    DegenerateAxis(usize),
    #[error("Replication needs {0} cells on one side, more than a lattice index can hold")]
    TooManyUnits(u64),
}

/// How far a periodic system is replicated by `fill_in_crystal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Replication {
    /// Cover a sphere of this radius around every original atom, then drop
    /// image atoms lying outside it.
    Radius(f64),
    /// Replicate `[-k, +k]` cells along each lattice vector.
    Units([u32; 3]),
}

impl Replication {
    /// Resolves the two mutually exclusive ways of specifying replication.
    pub fn new(radius: Option<f64>, units: Option<&[i64]>) -> Result<Self, ReplicationError> {
        match (radius, units) {
            (Some(_), Some(_)) => Err(ReplicationError::Ambiguous),
            (Some(r), None) => Self::from_radius(r),
            (None, Some(u)) => Self::from_units(u),
            (None, None) => Err(ReplicationError::Missing),
        }
    }

    pub fn from_radius(radius: f64) -> Result<Self, ReplicationError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ReplicationError::InvalidRadius(radius));
        }
        Ok(Self::Radius(radius))
    }

    /// A single value applies to all three axes; three values apply per axis.
    pub fn from_units(units: &[i64]) -> Result<Self, ReplicationError> {
        let per_axis = match units {
            [k] => [*k, *k, *k],
            [a, b, c] => [*a, *b, *c],
            _ => return Err(ReplicationError::InvalidUnitsLength(units.len())),
        };
        let mut resolved = [0u32; 3];
        for (slot, k) in resolved.iter_mut().zip(per_axis) {
            *slot = u32::try_from(k).map_err(|_| ReplicationError::NegativeUnits(k))?;
            lattice_index(*slot)?;
        }
        Ok(Self::Units(resolved))
    }

    pub fn cutoff_radius(&self) -> Option<f64> {
        match self {
            Self::Radius(r) => Some(*r),
            Self::Units(_) => None,
        }
    }

    /// Number of cells to add on each side of the home cell, per lattice vector.
    pub fn half_widths(&self, cell: &UnitCell) -> Result<[i32; 3], ReplicationError> {
        let mut widths = [0i32; 3];
        match self {
            Self::Units(units) => {
                for (width, k) in widths.iter_mut().zip(units) {
                    *width = lattice_index(*k)?;
                }
            }
            Self::Radius(radius) => {
                let lengths = cell.axis_lengths();
                for (axis, (width, length)) in widths.iter_mut().zip(lengths).enumerate() {
                    if length <= f64::EPSILON {
                        return Err(ReplicationError::DegenerateAxis(axis));
                    }
                    let cells = (radius / length).ceil();
                    if cells > i32::MAX as f64 {
                        return Err(ReplicationError::TooManyUnits(cells as u64));
                    }
                    *width = cells as i32;
                }
            }
        }
        Ok(widths)
    }
}

fn lattice_index(k: u32) -> Result<i32, ReplicationError> {
    i32::try_from(k).map_err(|_| ReplicationError::TooManyUnits(u64::from(k)))
}

/// Every lattice translation inside the `[-k, +k]` box, zero translation first and
/// the rest in lexicographic `(i, j, k)` order.
/// Negative widths are treated as zero.
pub fn translations(half_widths: [i32; 3]) -> Vec<[i32; 3]> {
    let [a, b, c] = half_widths.map(|k| k.max(0));
    std::iter::once([0, 0, 0])
        .chain(
            iproduct!(-a..=a, -b..=b, -c..=c)
                .map(|(i, j, k)| [i, j, k])
                .filter(|t| *t != [0, 0, 0]),
        )
        .collect()
}

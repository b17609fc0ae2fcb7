use nalgebra::{DMatrix, Point3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Got {numbers} atomic number(s) but {coordinates} coordinate(s)")]
    LengthMismatch { numbers: usize, coordinates: usize },
}

/// Euclidean distances between every point of `a` (rows) and every point of `b` (columns).
pub fn cross_distances(a: &[Point3<f64>], b: &[Point3<f64>]) -> DMatrix<f64> {
    DMatrix::from_fn(a.len(), b.len(), |i, j| nalgebra::distance(&a[i], &b[j]))
}

/// Pairwise distances within one point set, each raised to `power`.
pub fn distance_matrix(coords: &[Point3<f64>], power: f64) -> DMatrix<f64> {
    let mut distances = cross_distances(coords, coords);
    if power != 1.0 {
        distances.apply(|d| *d = d.powf(power));
    }
    distances
}

/// Smallest distance from `point` to any of `targets`, or infinity when `targets` is empty.
pub fn min_distance(point: &Point3<f64>, targets: &[Point3<f64>]) -> f64 {
    targets
        .iter()
        .map(|t| nalgebra::distance(point, t))
        .fold(f64::INFINITY, f64::min)
}

/// Coulomb matrix of a molecule.
///
/// Diagonal entries are `0.5 * Z^2.4`; off-diagonal entries are
/// `Z_i * Z_j / r_ij` with `r_ij = d_ij^alpha`. With `use_decay`, the distances of
/// both atoms to the first atom are added to `r_ij`, damping interactions far from
/// it. A vanishing `r_ij` is replaced by 1.
///
/// # Errors
///
/// Returns [`GeometryError::LengthMismatch`] if `numbers` and `coords` differ in length.
pub fn coulomb_matrix(
    numbers: &[u8],
    coords: &[Point3<f64>],
    alpha: f64,
    use_decay: bool,
) -> Result<DMatrix<f64>, GeometryError> {
    if numbers.len() != coords.len() {
        return Err(GeometryError::LengthMismatch {
            numbers: numbers.len(),
            coordinates: coords.len(),
        });
    }
    let n = numbers.len();
    let mut r = distance_matrix(coords, alpha);

    if use_decay && n > 0 {
        let from_first: Vec<f64> = coords.iter().map(|p| nalgebra::distance(&coords[0], p)).collect();
        for i in 0..n {
            for j in 0..n {
                r[(i, j)] += from_first[i] + from_first[j];
            }
        }
    }

    Ok(DMatrix::from_fn(n, n, |i, j| {
        let zi = numbers[i] as f64;
        if i == j {
            return 0.5 * zi.powf(2.4);
        }
        let denom = if r[(i, j)] == 0.0 { 1.0 } else { r[(i, j)] };
        zi * numbers[j] as f64 / denom
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn assert_matrix_close(actual: &DMatrix<f64>, expected: &[&[f64]]) {
        assert_eq!(actual.nrows(), expected.len());
        for (i, row) in expected.iter().enumerate() {
            assert_eq!(actual.ncols(), row.len());
            for (j, value) in row.iter().enumerate() {
                assert!(
                    (actual[(i, j)] - value).abs() < TOLERANCE,
                    "entry ({}, {}) = {} but expected {}",
                    i,
                    j,
                    actual[(i, j)],
                    value
                );
            }
        }
    }

    #[test]
    fn cross_distances_has_rows_for_a_and_columns_for_b() {
        let a = [Point3::origin()];
        let b = [Point3::new(3.0, 4.0, 0.0), Point3::new(0.0, 0.0, 2.0)];
        let d = cross_distances(&a, &b);
        assert_eq!(d.shape(), (1, 2));
        assert_matrix_close(&d, &[&[5.0, 2.0]]);
    }

    #[test]
    fn distance_matrix_applies_power() {
        let coords = [Point3::origin(), Point3::new(0.0, 0.0, 3.0)];
        assert_matrix_close(&distance_matrix(&coords, 1.0), &[&[0.0, 3.0], &[3.0, 0.0]]);
        assert_matrix_close(&distance_matrix(&coords, 2.0), &[&[0.0, 9.0], &[9.0, 0.0]]);
    }

    #[test]
    fn min_distance_picks_closest_target() {
        let targets = [Point3::new(2.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        assert!((min_distance(&Point3::origin(), &targets) - 1.0).abs() < TOLERANCE);
        assert_eq!(min_distance(&Point3::origin(), &[]), f64::INFINITY);
    }

    #[test]
    fn coulomb_matrix_for_hydrogen_molecule() {
        let coords = [Point3::origin(), Point3::new(0.0, 0.0, 1.0)];
        let m = coulomb_matrix(&[1, 1], &coords, 1.0, false).unwrap();
        assert_matrix_close(&m, &[&[0.5, 1.0], &[1.0, 0.5]]);
    }

    #[test]
    fn coulomb_matrix_with_alpha() {
        let coords = [Point3::origin(), Point3::new(0.0, 0.0, 0.5)];
        let m = coulomb_matrix(&[1, 1], &coords, 2.0, false).unwrap();
        assert_matrix_close(&m, &[&[0.5, 4.0], &[4.0, 0.5]]);
    }

    #[test]
    fn coulomb_matrix_with_decay() {
        let coords = [
            Point3::origin(),
            Point3::new(0.0, 0.0, 0.5),
            Point3::new(0.0, 0.5, 0.0),
        ];
        let m = coulomb_matrix(&[1, 1, 1], &coords, 1.0, true).unwrap();
        assert_matrix_close(
            &m,
            &[
                &[0.5, 1.0, 1.0],
                &[1.0, 0.5, 0.585786],
                &[1.0, 0.585786, 0.5],
            ],
        );
    }

    #[test]
    fn coulomb_matrix_diagonal_scales_with_atomic_number() {
        let coords = [Point3::origin(), Point3::new(0.0, 0.0, 0.0)];
        let m = coulomb_matrix(&[6, 1], &coords, 1.0, false).unwrap();
        assert!((m[(0, 0)] - 0.5 * 6f64.powf(2.4)).abs() < TOLERANCE);
        // Coincident atoms fall back to a unit denominator.
        assert!((m[(0, 1)] - 6.0).abs() < TOLERANCE);
    }

    #[test]
    fn coulomb_matrix_rejects_mismatched_lengths() {
        let coords = [Point3::origin()];
        assert_eq!(
            coulomb_matrix(&[1, 1], &coords, 1.0, false),
            Err(GeometryError::LengthMismatch {
                numbers: 2,
                coordinates: 1
            })
        );
    }
}

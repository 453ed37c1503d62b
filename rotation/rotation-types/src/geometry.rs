//! Fail-safe vector and matrix helpers on top of nalgebra.
//!
//! Dot, cross, norm, matrix products and transposes come straight from
//! [`nalgebra`]. This module only adds the pieces whose degenerate behavior
//! has to be pinned down: normalizing a near-zero vector and checking that a
//! matrix is a proper rotation.

use nalgebra::{Matrix3, Vector3};

/// Norm below which a vector is treated as zero.
pub const NORMALIZE_EPSILON: f64 = 1e-12;

/// Normalize a vector, returning the zero vector when its norm is below
/// [`NORMALIZE_EPSILON`].
///
/// Every rotation routine uses this same fallback, so a zero axis never
/// produces NaN anywhere in the engine.
///
/// # Example
///
/// ```
/// use rotation_types::{Vector3, normalize_or_zero};
///
/// let unit = normalize_or_zero(Vector3::new(0.0, 3.0, 4.0));
/// assert!((unit.norm() - 1.0).abs() < 1e-12);
///
/// let zero = normalize_or_zero(Vector3::zeros());
/// assert_eq!(zero, Vector3::zeros());
/// ```
#[must_use]
pub fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(NORMALIZE_EPSILON)
        .unwrap_or_else(Vector3::zeros)
}

/// Check that `m` is a proper rotation: `M·Mᵀ ≈ I` and `det(M) ≈ 1`.
///
/// Every entry of `M·Mᵀ - I` and the determinant's distance from one must be
/// within `tolerance`.
///
/// # Example
///
/// ```
/// use rotation_types::{Matrix3, is_rotation_matrix};
///
/// assert!(is_rotation_matrix(&Matrix3::identity(), 1e-12));
/// // A reflection is orthogonal but has determinant -1.
/// assert!(!is_rotation_matrix(&Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0), 1e-12));
/// ```
#[must_use]
pub fn is_rotation_matrix(m: &Matrix3<f64>, tolerance: f64) -> bool {
    let gram = m * m.transpose() - Matrix3::identity();
    gram.iter().all(|e| e.abs() <= tolerance) && (m.determinant() - 1.0).abs() <= tolerance
}

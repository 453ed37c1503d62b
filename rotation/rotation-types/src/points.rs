//! Ordered point sets.

use nalgebra::{Matrix3, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of 3D points.
///
/// Insertion order is the vertex index, which downstream edge lists rely on.
/// Rotation routines never mutate a `PointSet`; they build a new one.
///
/// # Example
///
/// ```
/// use rotation_types::{Matrix3, PointSet};
///
/// let points = PointSet::from_coords(&[[1.0, 0.0, 0.0], [0.0, 2.0, 0.0]]);
/// let doubled = points.transformed(&(Matrix3::identity() * 2.0));
///
/// assert_eq!(doubled.len(), 2);
/// assert!((doubled[1].y - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointSet {
    points: Vec<Point3<f64>>,
}

impl PointSet {
    /// Create a point set from points.
    #[must_use]
    pub const fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// Create an empty point set with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a point set from raw `[x, y, z]` coordinates.
    #[must_use]
    pub fn from_coords(coords: &[[f64; 3]]) -> Self {
        coords
            .iter()
            .map(|&[x, y, z]| Point3::new(x, y, z))
            .collect()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point3<f64>> {
        self.points.get(index)
    }

    /// Iterate over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3<f64>> {
        self.points.iter()
    }

    /// The points as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Append a point.
    pub fn push(&mut self, point: Point3<f64>) {
        self.points.push(point);
    }

    /// Consume the set and return the underlying points.
    #[must_use]
    pub fn into_inner(self) -> Vec<Point3<f64>> {
        self.points
    }

    /// Apply one linear map to every point, about the origin.
    ///
    /// Equivalent to the row-vector product `points · Mᵀ`.
    #[must_use]
    pub fn transformed(&self, m: &Matrix3<f64>) -> Self {
        self.points
            .iter()
            .map(|p| Point3::from(m * p.coords))
            .collect()
    }

    /// Largest Euclidean distance between corresponding points.
    ///
    /// Returns `None` when the sets have different lengths, and `Some(0.0)`
    /// for two empty sets.
    #[must_use]
    pub fn max_deviation(&self, other: &Self) -> Option<f64> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.points
                .iter()
                .zip(&other.points)
                .map(|(a, b)| (a - b).norm())
                .fold(0.0, f64::max),
        )
    }

    /// Whether every point lies within `tolerance` of its counterpart.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.max_deviation(other).is_some_and(|d| d <= tolerance)
    }
}

impl FromIterator<Point3<f64>> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Point3<f64>>> for PointSet {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self::new(points)
    }
}

impl std::ops::Index<usize> for PointSet {
    type Output = Point3<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point3<f64>;
    type IntoIter = std::slice::Iter<'a, Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

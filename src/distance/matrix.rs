//! Dense distance matrix.

use crate::models::{haversine_km, GeoPoint};

/// A dense n×n distance matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::GeoPoint;
/// use u_mdvrp::distance::DistanceMatrix;
///
/// let points = vec![
///     GeoPoint::new(0.0, 0.0).unwrap(),
///     GeoPoint::new(0.0, 1.0).unwrap(),
///     GeoPoint::new(0.0, 2.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert!((dm.get(0, 2) - 2.0 * dm.get(0, 1)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a great-circle distance matrix from geographic points.
    pub fn from_points(points: &[GeoPoint]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(&points[i], &points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.size && to < self.size,
            "location index out of bounds"
        );
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

//! Planes `a·x + b·y + c·z = d`: exact through three points, or least-squares fit.
//!
//! Invariants
//! - Coefficients are not normalized; `(a, b, c)` is the (unscaled) normal.
//! - A plane is valid iff its normal is non-zero; an invalid plane means the
//!   three defining points were collinear.

use nalgebra::{Matrix3, Vector3};

use crate::error::OctaError;
use crate::octa::cfg::ZERO_NORM_EPS;

/// Grid spacing used by `Plane::mesh` (same unit as the coordinates).
const MESH_STEP: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Plane {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Plane through `p1, p2, p3` with normal `(p3−p1)×(p2−p1)` and `d = n·p3`.
    pub fn from_three(p1: Vector3<f64>, p2: Vector3<f64>, p3: Vector3<f64>) -> Self {
        let n = (p3 - p1).cross(&(p2 - p1));
        Self::new(n.x, n.y, n.z, n.dot(&p3))
    }

    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        Vector3::new(self.a, self.b, self.c)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.normal().norm() > ZERO_NORM_EPS
    }

    /// `n·p − d`; zero on the plane, sign tells the side.
    #[inline]
    pub fn residual(&self, p: Vector3<f64>) -> f64 {
        self.normal().dot(&p) - self.d
    }

    /// Sample the plane over the x/y bounding box of `points` for plotting.
    ///
    /// Only meaningful for planes that are not vertical (`c ≠ 0`); vertical
    /// planes yield `DegeneratePlane`.
    pub fn mesh(&self, points: &[Vector3<f64>]) -> Result<Vec<Vector3<f64>>, OctaError> {
        if self.c.abs() <= ZERO_NORM_EPS || points.is_empty() {
            return Err(OctaError::DegeneratePlane);
        }
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        let nx = ((x_max - x_min) / MESH_STEP).ceil() as usize + 1;
        let ny = ((y_max - y_min) / MESH_STEP).ceil() as usize + 1;
        let mut out = Vec::with_capacity(nx * ny);
        for i in 0..nx {
            let x = x_min + i as f64 * MESH_STEP;
            for j in 0..ny {
                let y = y_min + j as f64 * MESH_STEP;
                let z = (self.d - self.a * x - self.b * y) / self.c;
                out.push(Vector3::new(x, y, z));
            }
        }
        Ok(out)
    }
}

/// Free-function form of `Plane::from_three`.
#[inline]
pub fn plane_from_three(p1: Vector3<f64>, p2: Vector3<f64>, p3: Vector3<f64>) -> Plane {
    Plane::from_three(p1, p2, p3)
}

/// Least-squares plane `z = α·x + β·y + γ` through `points`.
///
/// The objective `Σ (α xᵢ + β yᵢ + γ − zᵢ)²` is quadratic, so its minimizer
/// (from any start, including the zero guess) solves the 3×3 normal
/// equations. Returned as `α·x + β·y − z = −γ`.
pub fn best_fit_plane(points: &[Vector3<f64>]) -> Result<Plane, OctaError> {
    if points.len() < 3 {
        return Err(OctaError::bad_shape(format!(
            "plane fit needs at least 3 points, got {}",
            points.len()
        )));
    }
    let mut ata = Matrix3::<f64>::zeros();
    let mut atz = Vector3::<f64>::zeros();
    for p in points {
        let row = Vector3::new(p.x, p.y, 1.0);
        ata += row * row.transpose();
        atz += row * p.z;
    }
    let sol = ata.lu().solve(&atz).ok_or(OctaError::DegeneratePlane)?;
    if !sol.iter().all(|v| v.is_finite()) {
        return Err(OctaError::DegeneratePlane);
    }
    Ok(Plane::new(sol.x, sol.y, -1.0, -sol.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn three_point_plane_matches_cross_product_convention() {
        let p1 = vector![0.0, 0.0, 1.0];
        let p2 = vector![1.0, 0.0, 1.0];
        let p3 = vector![0.0, 1.0, 1.0];
        let pl = Plane::from_three(p1, p2, p3);
        // (p3-p1) x (p2-p1) = (0,1,0) x (1,0,0) = (0,0,-1)
        assert_eq!(pl.normal(), vector![0.0, 0.0, -1.0]);
        assert!((pl.d + 1.0).abs() < 1e-12);
        for p in [p1, p2, p3] {
            assert!(pl.residual(p).abs() < 1e-12);
        }
        assert!(pl.is_valid());
    }

    #[test]
    fn collinear_points_give_invalid_plane() {
        let pl = plane_from_three(
            vector![0.0, 0.0, 0.0],
            vector![1.0, 1.0, 1.0],
            vector![2.0, 2.0, 2.0],
        );
        assert!(!pl.is_valid());
    }

    #[test]
    fn best_fit_recovers_exact_plane() {
        // z = 0.5 x - 0.25 y + 2
        let pts: Vec<_> = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (2.0, 3.0), (-1.0, 0.5)]
            .iter()
            .map(|&(x, y)| vector![x, y, 0.5 * x - 0.25 * y + 2.0])
            .collect();
        let pl = best_fit_plane(&pts).unwrap();
        assert!((pl.a - 0.5).abs() < 1e-10);
        assert!((pl.b + 0.25).abs() < 1e-10);
        assert_eq!(pl.c, -1.0);
        assert!((pl.d + 2.0).abs() < 1e-10);
        for p in &pts {
            assert!(pl.residual(*p).abs() < 1e-9);
        }
        let mesh = pl.mesh(&pts).unwrap();
        assert!(!mesh.is_empty());
        assert!(mesh.iter().all(|m| pl.residual(*m).abs() < 1e-9));
    }

    #[test]
    fn best_fit_rejects_too_few_or_vertical_sets() {
        assert!(matches!(
            best_fit_plane(&[vector![0.0, 0.0, 0.0], vector![1.0, 0.0, 0.0]]),
            Err(OctaError::BadShape { .. })
        ));
        // All points share x and y: the normal equations are singular.
        let column = [
            vector![1.0, 1.0, 0.0],
            vector![1.0, 1.0, 1.0],
            vector![1.0, 1.0, 2.0],
        ];
        assert_eq!(best_fit_plane(&column), Err(OctaError::DegeneratePlane));
    }
}

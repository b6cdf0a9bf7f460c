//! Linear primitives on 3D vectors: distances, unit vectors, angles, areas.
//!
//! Conventions
//! - All angles are in degrees.
//! - Lengths carry the input unit (Å in practice).
//! - Cosines are clipped to [-1, 1] before `acos`, so exact orthogonality and
//!   collinearity never produce NaN from rounding.

use nalgebra::{Matrix3, Vector3};

use crate::error::OctaError;
use crate::octa::cfg::ZERO_NORM_EPS;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: Vector3<f64>, q: Vector3<f64>) -> f64 {
    (p - q).norm()
}

/// `v / ‖v‖`, or `ZeroVector` for a (numerically) zero vector.
#[inline]
pub fn unit(v: Vector3<f64>) -> Result<Vector3<f64>, OctaError> {
    let n = v.norm();
    if !(n > ZERO_NORM_EPS) {
        return Err(OctaError::ZeroVector);
    }
    Ok(v / n)
}

/// Unsigned angle between `v1` and `v2` in [0, 180].
pub fn angle_unsigned(v1: Vector3<f64>, v2: Vector3<f64>) -> Result<f64, OctaError> {
    let n1 = v1.norm();
    let n2 = v2.norm();
    if !(n1 > ZERO_NORM_EPS && n2 > ZERO_NORM_EPS) {
        return Err(OctaError::ZeroVector);
    }
    let cos = (v1.dot(&v2) / (n1 * n2)).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Signed angle from `v1` to `v2`, oriented by `reference`.
///
/// The unsigned angle is negated iff `det([v1; v2; reference]) < 0`. A zero
/// determinant (coplanar reference) keeps the unsigned value.
pub fn angle_signed(
    v1: Vector3<f64>,
    v2: Vector3<f64>,
    reference: Vector3<f64>,
) -> Result<f64, OctaError> {
    let angle = angle_unsigned(v1, v2)?;
    let m = Matrix3::from_rows(&[v1.transpose(), v2.transpose(), reference.transpose()]);
    if m.determinant() < 0.0 {
        Ok(-angle)
    } else {
        Ok(angle)
    }
}

/// Angle between two planes given by their normals, in [0, 180].
#[inline]
pub fn angle_between_planes(n1: Vector3<f64>, n2: Vector3<f64>) -> Result<f64, OctaError> {
    angle_unsigned(n1, n2)
}

/// Angle `a–vertex–b` (e.g. ligand–metal–ligand).
#[inline]
pub fn angle_at(a: Vector3<f64>, vertex: Vector3<f64>, b: Vector3<f64>) -> Result<f64, OctaError> {
    angle_unsigned(a - vertex, b - vertex)
}

/// Area of the triangle `abc`: ½‖(b−a)×(c−a)‖.
#[inline]
pub fn triangle_area(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> f64 {
    0.5 * (b - a).cross(&(c - a)).norm()
}

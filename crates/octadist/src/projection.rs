//! Orthogonal projections onto planes and lines.

use nalgebra::Vector3;

use crate::error::OctaError;
use crate::octa::cfg::ZERO_NORM_EPS;
use crate::plane::Plane;

/// `p + λ·n` with `λ = (d − n·p) / (n·n)`.
pub fn project_point_on_plane(p: Vector3<f64>, plane: &Plane) -> Result<Vector3<f64>, OctaError> {
    let n = plane.normal();
    let nn = n.dot(&n);
    if !(nn.sqrt() > ZERO_NORM_EPS) {
        return Err(OctaError::DegeneratePlane);
    }
    let lambda = (plane.d - n.dot(&p)) / nn;
    Ok(p + n * lambda)
}

/// Foot of the perpendicular from `p` onto the line through `a` and `b`.
pub fn project_point_on_line(
    p: Vector3<f64>,
    a: Vector3<f64>,
    b: Vector3<f64>,
) -> Result<Vector3<f64>, OctaError> {
    let ab = b - a;
    let len2 = ab.dot(&ab);
    if !(len2.sqrt() > ZERO_NORM_EPS) {
        return Err(OctaError::ZeroVector);
    }
    Ok(a + ab * ((p - a).dot(&ab) / len2))
}

//! Jahn–Teller angular distortion between two ligand groups.
//!
//! The caller picks two groups of atoms (typically the ligand atoms bound on
//! either side of the metal). Each group gets a least-squares plane; a tilt
//! between the planes, or a bend of the centroid–metal–centroid axis, measures
//! the angular part of a Jahn–Teller distortion.
//!
//! Conventions
//! - `plane_angle` is folded into [0, 90]: 0 means parallel planes.
//! - `axial_angle` is ∠(centroid_A, M, centroid_B); `axial_deviation` is
//!   `180 − axial_angle`.

use nalgebra::Vector3;

use crate::error::OctaError;
use crate::linear::{angle_at, angle_between_planes};
use crate::plane::{best_fit_plane, Plane};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JahnTeller {
    pub plane_a: Plane,
    pub plane_b: Plane,
    pub plane_angle: f64,
    pub axial_angle: f64,
    pub axial_deviation: f64,
}

/// Fit both planes and measure tilt and axial bend around `center`.
///
/// Each group needs at least three points (`BadShape`); a group whose fit is
/// singular gives `DegeneratePlane`.
pub fn jahn_teller(
    center: Vector3<f64>,
    group_a: &[Vector3<f64>],
    group_b: &[Vector3<f64>],
) -> Result<JahnTeller, OctaError> {
    let plane_a = best_fit_plane(group_a)?;
    let plane_b = best_fit_plane(group_b)?;
    let raw = angle_between_planes(plane_a.normal(), plane_b.normal())?;
    let plane_angle = if raw > 90.0 { 180.0 - raw } else { raw };

    let axial_angle = angle_at(centroid(group_a), center, centroid(group_b))?;
    Ok(JahnTeller {
        plane_a,
        plane_b,
        plane_angle,
        axial_angle,
        axial_deviation: 180.0 - axial_angle,
    })
}

fn centroid(points: &[Vector3<f64>]) -> Vector3<f64> {
    let sum: Vector3<f64> = points.iter().sum();
    sum / points.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn upper() -> Vec<Vector3<f64>> {
        vec![vector![1.0, 0.0, 1.0], vector![0.0, 1.0, 1.0], vector![-1.0, -1.0, 1.0]]
    }

    #[test]
    fn parallel_groups_are_undistorted() {
        let lower: Vec<_> = upper().iter().map(|p| vector![p.x, p.y, -1.0]).collect();
        let jt = jahn_teller(Vector3::zeros(), &upper(), &lower).unwrap();
        assert!(jt.plane_angle.abs() < 1e-9);
        assert!(jt.axial_deviation.abs() < 1e-9);
    }

    #[test]
    fn tilted_group_reports_tilt_angle() {
        // z = -1 + 0.1·x: normals differ by atan(0.1).
        let lower: Vec<_> = upper()
            .iter()
            .map(|p| vector![p.x, p.y, -1.0 + 0.1 * p.x])
            .collect();
        let jt = jahn_teller(Vector3::zeros(), &upper(), &lower).unwrap();
        assert!((jt.plane_angle - 0.1f64.atan().to_degrees()).abs() < 1e-9);
        assert!(jt.plane_angle <= 90.0);
    }

    #[test]
    fn shifted_group_bends_the_axis() {
        let lower: Vec<_> = upper().iter().map(|p| vector![p.x + 1.0, p.y, -1.0]).collect();
        let jt = jahn_teller(Vector3::zeros(), &upper(), &lower).unwrap();
        // Centroids (0,0,1) and (1,0,-1): 180 − 45 = 135.
        assert!((jt.axial_angle - 135.0).abs() < 1e-9);
        assert!((jt.axial_deviation - 45.0).abs() < 1e-9);
    }

    #[test]
    fn small_groups_are_rejected() {
        let two = vec![vector![1.0, 0.0, 0.0], vector![0.0, 1.0, 0.0]];
        assert!(matches!(
            jahn_teller(Vector3::zeros(), &two, &upper()),
            Err(OctaError::BadShape { .. })
        ));
    }
}

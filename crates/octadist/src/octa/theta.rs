//! Θ: trigonal twist measured by sweeping all eight faces.
//!
//! For each face (N1, N2, N3) the center and the opposite ligands
//! (N4, N5, N6) are projected onto the face plane. The six in-plane vectors
//! from the projected center are walked as N1 → N4 → N2 → N5 → N3 → N6 → N1,
//! and each signed step angle contributes |θ − 60|. A regular octahedron
//! gives exactly 60 everywhere.
//!
//! Schedule
//! - Running slots start from the trans-aligned order (N1↔N5, N2↔N6, N3↔N4).
//! - After each face: (N2, N3, N4, N5, N6) ← (N3, N6, N2, N5, N4), which
//!   visits the four faces around N1 and keeps the trans layout.
//! - After the fourth face the hemisphere flips: swap (N1,N5), (N2,N6), (N3,N4).
//! - Every oriented step angle is seen from two complementary faces, hence
//!   Θ = ΣΦ / 2.

use nalgebra::Vector3;

use crate::error::OctaError;
use crate::linear::{angle_signed, angle_unsigned};
use crate::octa::types::Face;
use crate::octa::util::extreme_sums;
use crate::plane::Plane;
use crate::projection::project_point_on_plane;

/// Per-face detail of the sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceTwist {
    /// Face as input ligand indices.
    pub face: Face,
    /// The six signed step angles, in walk order.
    pub angles: [f64; 6],
    /// Φ = Σ |θᵢ − 60|.
    pub contribution: f64,
}

/// Θ and its per-face breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct ThetaSweep {
    pub faces: [FaceTwist; 8],
    pub theta: f64,
    pub theta_min: f64,
    pub theta_max: f64,
}

impl ThetaSweep {
    pub fn contributions(&self) -> [f64; 8] {
        self.faces.map(|f| f.contribution)
    }
}

/// Run the eight-face sweep.
///
/// `order` is a trans-aligned slot permutation (see `reorder`): `order[k]` is
/// the input ligand sitting in slot `k`.
pub fn theta_sweep(
    center: Vector3<f64>,
    ligands: &[Vector3<f64>; 6],
    order: &[usize; 6],
) -> Result<ThetaSweep, OctaError> {
    let mut n = *order;
    let mut faces = [FaceTwist {
        face: Face::new(0, 1, 2),
        angles: [0.0; 6],
        contribution: 0.0,
    }; 8];

    for (r, slot) in faces.iter_mut().enumerate() {
        *slot = face_twist(center, ligands, &n)?;
        n = [n[0], n[2], n[5], n[1], n[4], n[3]];
        if r == 3 {
            n.swap(0, 4);
            n.swap(1, 5);
            n.swap(2, 3);
        }
    }

    let contributions = faces.map(|f| f.contribution);
    let theta = contributions.iter().sum::<f64>() / 2.0;
    let (theta_min, theta_max) = extreme_sums(&contributions, 4);
    Ok(ThetaSweep {
        faces,
        theta,
        theta_min,
        theta_max,
    })
}

fn face_twist(
    center: Vector3<f64>,
    ligands: &[Vector3<f64>; 6],
    n: &[usize; 6],
) -> Result<FaceTwist, OctaError> {
    let pts = n.map(|i| ligands[i]);
    let plane = Plane::from_three(pts[0], pts[1], pts[2]);
    if !plane.is_valid() {
        return Err(OctaError::DegeneratePlane);
    }
    let m = project_point_on_plane(center, &plane)?;
    // N1..N3 lie on the plane already; only the opposite face needs projecting.
    let mut v = [Vector3::zeros(); 6];
    for k in 0..6 {
        let p = if k < 3 {
            pts[k]
        } else {
            project_point_on_plane(pts[k], &plane)?
        };
        v[k] = p - m;
    }

    let a12 = angle_unsigned(v[0], v[1])?;
    let a13 = angle_unsigned(v[0], v[2])?;
    let reference = if a12 < a13 {
        v[0].cross(&v[1])
    } else {
        v[2].cross(&v[0])
    };

    // Walk N1 → N4 → N2 → N5 → N3 → N6 → N1.
    let walk = [(0, 3), (3, 1), (1, 4), (4, 2), (2, 5), (5, 0)];
    let mut angles = [0.0; 6];
    for (k, &(from, to)) in walk.iter().enumerate() {
        angles[k] = angle_signed(v[from], v[to], reference)?;
    }
    let contribution = angles.iter().map(|t| (t - 60.0).abs()).sum();
    Ok(FaceTwist {
        face: Face::new(n[0], n[1], n[2]),
        angles,
        contribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::octa::faces::find_faces;
    use crate::octa::reorder::align_trans_pairs;
    use crate::octa::special;
    use std::collections::BTreeSet;

    fn sweep(octa: &crate::octa::Octahedron) -> ThetaSweep {
        let al = align_trans_pairs(&octa.ligand_vectors(), 1.0).unwrap();
        theta_sweep(octa.center, &octa.ligands, &al.order).unwrap()
    }

    #[test]
    fn regular_octahedron_walks_sixty_degree_steps() {
        let s = sweep(&special::regular(1.0));
        for f in &s.faces {
            for a in f.angles {
                assert!((a - 60.0).abs() < 1e-9, "step angle {a}");
            }
        }
        assert!(s.theta.abs() < 1e-9);
    }

    #[test]
    fn sweep_visits_each_octahedron_face_once() {
        let octa = special::reference_complex();
        let s = sweep(&octa);
        let visited: BTreeSet<Face> = s.faces.iter().map(|f| f.face).collect();
        assert_eq!(visited.len(), 8);
        let set = find_faces(&octa);
        for f in &visited {
            assert!(set.contains(f));
        }
    }

    #[test]
    fn reference_complex_theta() {
        let s = sweep(&special::reference_complex());
        assert!((s.theta - 122.688973).abs() < 1e-6, "theta = {}", s.theta);
        assert!((s.theta_min + s.theta_max - 2.0 * s.theta).abs() < 1e-9);
        assert!(s.contributions().iter().all(|&c| c >= 0.0));
    }

    #[test]
    fn collinear_face_is_degenerate() {
        let octa = special::regular(1.0);
        let mut ligands = octa.ligands;
        // Pull ligand 2 onto the line through ligands 0 and 4.
        ligands[2] = (ligands[0] + ligands[4]) * 0.5;
        let err = theta_sweep(octa.center, &ligands, &[0, 2, 4, 1, 3, 5]);
        assert_eq!(err, Err(OctaError::DegeneratePlane));
    }
}

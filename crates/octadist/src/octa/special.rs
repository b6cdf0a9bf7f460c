//! Reference octahedra used in tests and benchmarks.
//!
//! Purpose
//! - Canonical geometries with known distortion values, kept small and explicit
//!   so tests can rely on them deterministically.
//!
//! Ligand order
//! - Axis-built complexes list ligands as +x, −x, +y, −y, +z, −z, so the input
//!   trans pairs are (0,1), (2,3), (4,5).
//!
//! Known values
//! - `regular`: ζ = Δ = Σ = Θ = 0.
//! - `elongated(a)`: Σ = 0, ζ and Δ grow with |a − 1|.
//! - `twisted(δ)`: ζ = Δ = 0, Θ grows with δ (24.3686 at 2°, 129.8551 at 10°).
//! - `reference_complex`: ζ = 0.228073, Δ = 0.000476, Σ = 47.926528,
//!   Θ = 122.688973.

use nalgebra::{Rotation3, Unit, Vector3};

use super::types::Octahedron;

/// Regular octahedron at the origin with bond length `bond`.
pub fn regular(bond: f64) -> Octahedron {
    Octahedron::new(
        Vector3::zeros(),
        [
            Vector3::new(bond, 0.0, 0.0),
            Vector3::new(-bond, 0.0, 0.0),
            Vector3::new(0.0, bond, 0.0),
            Vector3::new(0.0, -bond, 0.0),
            Vector3::new(0.0, 0.0, bond),
            Vector3::new(0.0, 0.0, -bond),
        ],
    )
}

/// Unit octahedron with the two z ligands at ±`axial` (tetragonal elongation
/// for `axial > 1`, compression below).
pub fn elongated(axial: f64) -> Octahedron {
    let mut octa = regular(1.0);
    octa.ligands[4] = Vector3::new(0.0, 0.0, axial);
    octa.ligands[5] = Vector3::new(0.0, 0.0, -axial);
    octa
}

/// Unit octahedron with the +x, +y, +z ligands rotated by `deg` degrees about
/// the (1,1,1) axis: a pure trigonal twist toward a prism.
pub fn twisted(deg: f64) -> Octahedron {
    let axis = Unit::new_normalize(Vector3::new(1.0, 1.0, 1.0));
    let rot = Rotation3::from_axis_angle(&axis, deg.to_radians());
    let mut octa = regular(1.0);
    for i in [0, 2, 4] {
        octa.ligands[i] = rot * octa.ligands[i];
    }
    octa
}

/// A slightly distorted Fe(II) complex from a crystal structure, in Å.
pub fn reference_complex() -> Octahedron {
    Octahedron::new(
        Vector3::new(2.298354, 5.161785, 7.971898),
        [
            Vector3::new(1.885657, 4.804777, 6.183726),
            Vector3::new(1.747515, 6.960963, 7.932784),
            Vector3::new(4.094380, 5.807257, 7.588689),
            Vector3::new(0.539005, 4.482809, 8.460004),
            Vector3::new(2.812425, 3.266553, 8.131637),
            Vector3::new(2.886404, 5.392925, 9.848966),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::distance;

    #[test]
    fn twist_keeps_bond_lengths() {
        let octa = twisted(17.0);
        for l in octa.ligands {
            assert!((distance(octa.center, l) - 1.0).abs() < 1e-12);
        }
        let flat = twisted(0.0);
        for (a, b) in flat.ligands.iter().zip(regular(1.0).ligands.iter()) {
            assert!((a - b).norm() < 1e-12);
        }
    }

    #[test]
    fn elongation_only_moves_axial_ligands() {
        let e = elongated(1.2);
        let r = regular(1.0);
        assert_eq!(e.ligands[..4], r.ligands[..4]);
        assert!((e.ligands[4].z - 1.2).abs() < 1e-15);
    }
}

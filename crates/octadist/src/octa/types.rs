//! Core octahedron types: the seven-point complex, faces, and the result record.

use nalgebra::{DMatrix, Vector3};

use crate::error::OctaError;

/// One central atom plus six ligands.
///
/// Invariants:
/// - Exactly seven points (enforced by the array shape).
/// - Ligand order is opaque to callers; the theta engine reorders internally.
/// - Finiteness is checked by the constructors and again by `validate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Octahedron {
    pub center: Vector3<f64>,
    pub ligands: [Vector3<f64>; 6],
}

impl Octahedron {
    #[inline]
    pub fn new(center: Vector3<f64>, ligands: [Vector3<f64>; 6]) -> Self {
        Self { center, ligands }
    }

    /// Build from seven points, center first.
    pub fn from_points(points: &[Vector3<f64>]) -> Result<Self, OctaError> {
        if points.len() != 7 {
            return Err(OctaError::bad_shape(format!(
                "expected 7 points (center + 6 ligands), got {}",
                points.len()
            )));
        }
        let mut ligands = [Vector3::zeros(); 6];
        ligands.copy_from_slice(&points[1..]);
        let octa = Self::new(points[0], ligands);
        octa.validate()?;
        Ok(octa)
    }

    /// Build from seven `[x, y, z]` rows, center first.
    pub fn from_rows(rows: &[[f64; 3]]) -> Result<Self, OctaError> {
        let points: Vec<Vector3<f64>> = rows.iter().map(|r| Vector3::new(r[0], r[1], r[2])).collect();
        Self::from_points(&points)
    }

    /// Build from a 7×3 matrix, one atom per row, center in row 0.
    pub fn from_matrix(m: &DMatrix<f64>) -> Result<Self, OctaError> {
        if m.nrows() != 7 || m.ncols() != 3 {
            return Err(OctaError::bad_shape(format!(
                "expected a 7x3 matrix, got {}x{}",
                m.nrows(),
                m.ncols()
            )));
        }
        let points: Vec<Vector3<f64>> = (0..7)
            .map(|i| Vector3::new(m[(i, 0)], m[(i, 1)], m[(i, 2)]))
            .collect();
        Self::from_points(&points)
    }

    /// Reject non-finite coordinates.
    pub fn validate(&self) -> Result<(), OctaError> {
        for (slot, p) in self.points().iter().enumerate() {
            if !p.iter().all(|x| x.is_finite()) {
                return Err(OctaError::bad_shape(format!(
                    "non-finite coordinate in slot {slot}"
                )));
            }
        }
        Ok(())
    }

    /// All seven points, center first.
    pub fn points(&self) -> [Vector3<f64>; 7] {
        let l = &self.ligands;
        [self.center, l[0], l[1], l[2], l[3], l[4], l[5]]
    }

    /// Ligand positions relative to the center.
    pub fn ligand_vectors(&self) -> [Vector3<f64>; 6] {
        self.ligands.map(|l| l - self.center)
    }

    /// Apply `f` to every point (rigid motions, scaling, reflections).
    pub fn map_points(&self, f: impl Fn(Vector3<f64>) -> Vector3<f64>) -> Self {
        Self::new(f(self.center), self.ligands.map(&f))
    }

    /// Reorder ligands so that new slot `k` holds old ligand `perm[k]`.
    pub fn permuted(&self, perm: [usize; 6]) -> Self {
        Self::new(self.center, perm.map(|i| self.ligands[i]))
    }
}

/// Unordered triple of ligand indices (0-based into `Octahedron::ligands`).
///
/// Stored sorted so equal triples compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face(pub [usize; 3]);

impl Face {
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        let mut idx = [i, j, k];
        idx.sort_unstable();
        Face(idx)
    }

    /// The complementary triple `{0..6} ∖ self`.
    pub fn opposite(&self) -> Face {
        let mut rest = (0..6).filter(|i| !self.0.contains(i));
        // Exactly three indices remain for any valid face.
        let a = rest.next().unwrap_or(0);
        let b = rest.next().unwrap_or(0);
        let c = rest.next().unwrap_or(0);
        Face::new(a, b, c)
    }

    #[inline]
    pub fn contains(&self, ligand: usize) -> bool {
        self.0.contains(&ligand)
    }

    /// Ligand positions of the face's corners.
    pub fn vertices(&self, octa: &Octahedron) -> [Vector3<f64>; 3] {
        self.0.map(|i| octa.ligands[i])
    }
}

/// Full distortion record for one complex.
///
/// Angles in degrees; lengths in the input unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Distortion {
    /// Mean center–ligand distance.
    pub d_mean: f64,
    /// Center–ligand distances in input ligand order.
    pub bond_dist: [f64; 6],
    /// The 12 smallest ligand–center–ligand angles, ascending.
    pub cis_angle: [f64; 12],
    /// The 3 largest ligand–center–ligand angles, ascending.
    pub trans_angle: [f64; 3],
    /// Σ |dᵢ − d_mean|.
    pub zeta: f64,
    /// (1/6) Σ ((dᵢ − d_mean)/d_mean)².
    pub delta: f64,
    /// Σ |90 − φᵢ| over the cis angles.
    pub sigma: f64,
    /// Per-face twist contributions Φ_r in sweep order.
    pub theta_per_face: [f64; 8],
    /// (Σ Φ_r) / 2.
    pub theta: f64,
    /// Sum of the four smallest Φ_r.
    pub theta_min: f64,
    /// Sum of the four largest Φ_r.
    pub theta_max: f64,
    /// Set when no ligand pairing was clearly trans, or a face was degenerate.
    pub non_octa: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn constructors_check_shape_and_finiteness() {
        let rows = [[0.0; 3]; 6];
        assert!(matches!(
            Octahedron::from_rows(&rows),
            Err(OctaError::BadShape { .. })
        ));
        let mut rows7 = [[0.0; 3]; 7];
        rows7[3][1] = f64::NAN;
        assert!(matches!(
            Octahedron::from_rows(&rows7),
            Err(OctaError::BadShape { .. })
        ));
        let m = DMatrix::<f64>::zeros(7, 2);
        assert!(matches!(
            Octahedron::from_matrix(&m),
            Err(OctaError::BadShape { .. })
        ));
        let mut m7 = DMatrix::<f64>::zeros(7, 3);
        m7[(2, 0)] = 1.5;
        let o = Octahedron::from_matrix(&m7).unwrap();
        assert_eq!(o.ligands[1], vector![1.5, 0.0, 0.0]);
    }

    #[test]
    fn faces_are_canonical_and_complementary() {
        let f = Face::new(4, 0, 2);
        assert_eq!(f, Face([0, 2, 4]));
        assert_eq!(f.opposite(), Face([1, 3, 5]));
        assert_eq!(f.opposite().opposite(), f);
        assert!(f.contains(2) && !f.contains(3));
    }

    #[test]
    fn permutation_and_mapping() {
        let o = Octahedron::from_rows(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
            [4.0, 0.0, 0.0],
            [5.0, 0.0, 0.0],
            [6.0, 0.0, 0.0],
        ])
        .unwrap();
        let p = o.permuted([5, 4, 3, 2, 1, 0]);
        assert_eq!(p.ligands[0].x, 6.0);
        let shifted = o.map_points(|v| v + vector![0.0, 1.0, 0.0]);
        assert_eq!(shifted.center, vector![0.0, 1.0, 0.0]);
        assert_eq!(o.ligand_vectors()[2], vector![3.0, 0.0, 0.0]);
    }
}

//! Aggregate entry point: ζ, Δ, Σ and Θ for one octahedron.
//!
//! References
//! - Δ follows Lufaso & Woodward (2004), including the 1/6 factor.
//! - Code cross-refs: `reorder::align_trans_pairs`, `theta::theta_sweep`,
//!   `faces::find_faces`.

use std::collections::BTreeSet;

use nalgebra::Vector3;

use crate::error::OctaError;
use crate::linear::{angle_unsigned, distance};
use crate::octa::cfg::{OctaCfg, ZERO_NORM_EPS};
use crate::octa::faces::find_faces;
use crate::octa::reorder::align_trans_pairs;
use crate::octa::theta::theta_sweep;
use crate::octa::types::{Distortion, Face, Octahedron};
use crate::octa::util::{cmp_f64, index_combinations};

/// Compute the full distortion record with default settings.
pub fn compute(octa: &Octahedron) -> Result<Distortion, OctaError> {
    compute_with(octa, &OctaCfg::default())
}

/// Compute the full distortion record.
///
/// Fails on non-finite input (`BadShape`), coincident atoms (`ZeroVector`) or
/// a collinear face (`DegeneratePlane`). Ambiguous geometry only sets
/// `non_octa`.
pub fn compute_with(octa: &Octahedron, cfg: &OctaCfg) -> Result<Distortion, OctaError> {
    octa.validate()?;
    reject_coincident(&octa.points())?;

    let bond_dist = octa.ligands.map(|l| distance(octa.center, l));
    let d_mean = bond_dist.iter().sum::<f64>() / 6.0;
    let zeta = calc_zeta(&bond_dist, d_mean);
    let delta = calc_delta(&bond_dist, d_mean);

    let v = octa.ligand_vectors();
    let (cis_angle, trans_angle) = split_angles(&v)?;
    let sigma = calc_sigma(&cis_angle);

    let alignment = align_trans_pairs(&v, cfg.trans_tol_deg)?;
    let sweep = theta_sweep(octa.center, &octa.ligands, &alignment.order)?;

    let face_set = find_faces(octa);
    let swept: BTreeSet<Face> = sweep.faces.iter().map(|f| f.face).collect();
    let faces_agree = swept.len() == 8 && swept.iter().all(|f| face_set.contains(f));
    let non_octa = alignment.non_octa || face_set.has_degenerate_face() || !faces_agree;

    Ok(Distortion {
        d_mean,
        bond_dist,
        cis_angle,
        trans_angle,
        zeta,
        delta,
        sigma,
        theta_per_face: sweep.contributions(),
        theta: sweep.theta,
        theta_min: sweep.theta_min,
        theta_max: sweep.theta_max,
        non_octa,
    })
}

/// ζ = Σ |dᵢ − d_mean|.
pub fn calc_zeta(bond_dist: &[f64; 6], d_mean: f64) -> f64 {
    bond_dist.iter().map(|d| (d - d_mean).abs()).sum()
}

/// Δ = (1/6) Σ ((dᵢ − d_mean)/d_mean)².
pub fn calc_delta(bond_dist: &[f64; 6], d_mean: f64) -> f64 {
    bond_dist
        .iter()
        .map(|d| ((d - d_mean) / d_mean).powi(2))
        .sum::<f64>()
        / 6.0
}

/// Σ = Σ |90 − φ| over the cis angles.
pub fn calc_sigma(cis_angle: &[f64; 12]) -> f64 {
    cis_angle.iter().map(|a| (90.0 - a).abs()).sum()
}

/// All 15 ligand–center–ligand angles, ascending, split into 12 cis + 3 trans.
pub fn split_angles(v: &[Vector3<f64>; 6]) -> Result<([f64; 12], [f64; 3]), OctaError> {
    let mut all = index_combinations(6, 2)
        .into_iter()
        .map(|p| angle_unsigned(v[p[0]], v[p[1]]))
        .collect::<Result<Vec<f64>, _>>()?;
    all.sort_by(cmp_f64);
    let mut cis = [0.0; 12];
    let mut trans = [0.0; 3];
    cis.copy_from_slice(&all[..12]);
    trans.copy_from_slice(&all[12..]);
    Ok((cis, trans))
}

fn reject_coincident(points: &[Vector3<f64>; 7]) -> Result<(), OctaError> {
    for p in index_combinations(7, 2) {
        if distance(points[p[0]], points[p[1]]) <= ZERO_NORM_EPS {
            return Err(OctaError::ZeroVector);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_statistics_by_hand() {
        let d = [1.0, 1.0, 1.0, 1.0, 1.2, 1.2];
        let mean = d.iter().sum::<f64>() / 6.0;
        let z = calc_zeta(&d, mean);
        // 4·(mean−1) + 2·(1.2−mean) with mean = 16/15
        assert!((z - (4.0 / 15.0 + 2.0 * 2.0 / 15.0)).abs() < 1e-12);
        let dl = calc_delta(&d, mean);
        let expected = (4.0 * (1.0f64 / 16.0).powi(2) + 2.0 * (2.0f64 / 16.0).powi(2)) / 6.0;
        assert!((dl - expected).abs() < 1e-12);
    }

    #[test]
    fn sigma_of_right_angles_is_zero() {
        assert_eq!(calc_sigma(&[90.0; 12]), 0.0);
        let mut a = [90.0; 12];
        a[0] = 85.0;
        a[11] = 97.0;
        assert!((calc_sigma(&a) - 12.0).abs() < 1e-12);
    }
}

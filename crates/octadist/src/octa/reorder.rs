//! Trans-pair alignment: permute ligand slots so the theta sweep meets each
//! ligand's geometric opposite where it expects it.
//!
//! Layout after alignment (0-based ligand slots):
//! - slot 0 ↔ slot 4, slot 1 ↔ slot 5, slot 2 ↔ slot 3 are the trans pairs.
//! - Slots 0, 1, 2 therefore form a face, and walking
//!   0 → 3 → 1 → 4 → 2 → 5 circles its projected hexagon.
//!
//! Ambiguity check
//! - Each round picks the candidate with the largest angle to the reference
//!   ligand (`best`) and, separately, the first candidate in slot order within
//!   `trans_tol_deg` of that maximum (`within_tol`). If they differ, no ligand
//!   is clearly trans and the non-octahedral flag is raised. The flag is sticky.
//! - The maximum is taken per round over the current reference ligand's
//!   candidates, not once globally across all rounds. This is intentional.

use nalgebra::Vector3;

use crate::error::OctaError;
use crate::linear::angle_unsigned;

/// (reference slot, slot that receives its trans partner), in round order.
const ROUNDS: [(usize, usize); 3] = [(0, 4), (1, 5), (2, 3)];

/// Outcome of the alignment: `order[k]` is the input ligand now in slot `k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransAlignment {
    pub order: [usize; 6],
    pub non_octa: bool,
}

impl TransAlignment {
    /// The three trans pairs as input ligand indices.
    pub fn trans_pairs(&self) -> [(usize, usize); 3] {
        ROUNDS.map(|(r, t)| (self.order[r], self.order[t]))
    }
}

/// Align trans pairs for ligand vectors `v` (ligand − center).
pub fn align_trans_pairs(
    v: &[Vector3<f64>; 6],
    trans_tol_deg: f64,
) -> Result<TransAlignment, OctaError> {
    let mut order = [0, 1, 2, 3, 4, 5];
    let mut paired = [false; 6];
    let mut non_octa = false;

    for (reference, target) in ROUNDS {
        paired[reference] = true;
        let angles = (0..6)
            .map(|slot| angle_unsigned(v[order[reference]], v[order[slot]]))
            .collect::<Result<Vec<f64>, _>>()?;

        // Unrestricted argmax: landing on an already paired slot means the
        // previous rounds' pairs were not clean trans pairs.
        let overall = argmax((0..6).filter(|&s| s != reference), &angles);
        let candidates: Vec<usize> = (0..6).filter(|&s| !paired[s]).collect();
        let best = argmax(candidates.iter().copied(), &angles).unwrap_or(target);
        if overall.is_some_and(|s| paired[s]) {
            non_octa = true;
        }

        let max_angle = angles[best];
        let within_tol = candidates
            .iter()
            .copied()
            .find(|&s| angles[s] > max_angle - trans_tol_deg);
        if within_tol != Some(best) {
            non_octa = true;
        }

        order.swap(target, best);
        paired[target] = true;
    }
    Ok(TransAlignment { order, non_octa })
}

/// First index with the strictly largest angle.
fn argmax(slots: impl Iterator<Item = usize>, angles: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for s in slots {
        if best.map_or(true, |b| angles[s] > angles[b]) {
            best = Some(s);
        }
    }
    best
}

//! Octahedral distortion parameters (ζ, Δ, Σ, Θ) for six-coordinate complexes.
//!
//! Purpose
//! - Turn seven points (metal center + six ligands) into the standard
//!   distortion descriptors, and cut such complexes out of larger structures.
//!
//! Why this design (short)
//! - One Copy value type (`Octahedron`) flows through every stage; stages are
//!   free functions that take only what they need.
//! - Ligand order is irrelevant to callers. The Θ engine aligns trans pairs
//!   internally (`reorder`) and sweeps all eight faces (`theta`).
//! - Hard failures (bad input, coincident atoms, collinear faces) are errors;
//!   merely ambiguous geometry sets `Distortion::non_octa` and still returns
//!   numbers.
//!
//! Conventions
//! - Angles in degrees, lengths in the input unit (Å for molecule files).
//! - Ligand indices are 0-based into `Octahedron::ligands`.
//!
//! References
//! - Ketkaew et al., Dalton Trans. 50 (2021) 1086 (Θ via face projection).
//! - Buron-Le Cointe et al., Phys. Rev. B 85 (2012) 064114 (ζ).
//! - Lufaso & Woodward, Acta Cryst. B60 (2004) 10 (Δ).
//! - McCusker et al., Inorg. Chem. 35 (1996) 2100 (Σ).

pub mod calc;
pub mod cfg;
pub mod descriptors;
pub mod extract;
pub mod faces;
pub mod rand;
pub mod reorder;
pub mod special;
pub mod theta;
pub mod types;
mod util;

pub use calc::{calc_delta, calc_sigma, calc_zeta, compute, compute_with, split_angles};
pub use cfg::{OctaCfg, DEFAULT_CUTOFF, TRANS_TOL_DEG};
pub use descriptors::{describe, Descriptors};
pub use extract::{extract_all, extract_octahedron, metal_centers, Extracted};
pub use faces::{find_faces, FaceSet, RankedFace};
pub use reorder::{align_trans_pairs, TransAlignment};
pub use theta::{theta_sweep, FaceTwist, ThetaSweep};
pub use types::{Distortion, Face, Octahedron};

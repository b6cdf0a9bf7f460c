//! Tolerances and defaults for octahedron extraction and distortion.
//!
//! Policy
//! - Fixed constants, in the same spirit as the epsilons elsewhere in the
//!   crate. The two user-facing knobs (cutoff, trans tolerance) are collected
//!   in `OctaCfg` so call sites can override them without touching the rest.

/// Default metal–ligand cutoff for extraction (Å).
pub const DEFAULT_CUTOFF: f64 = 2.8;
/// Slack (degrees) when deciding whether a trans partner is unambiguous.
pub const TRANS_TOL_DEG: f64 = 1.0;
/// Norms at or below this are treated as zero (coincident atoms, collinear faces).
pub(crate) const ZERO_NORM_EPS: f64 = 1e-12;

/// User-tunable parameters for extraction and the trans-pair alignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctaCfg {
    /// Maximum center–ligand distance accepted by the extractor.
    pub cutoff: f64,
    /// Angular slack used by the trans-pair ambiguity check.
    pub trans_tol_deg: f64,
}

impl Default for OctaCfg {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            trans_tol_deg: TRANS_TOL_DEG,
        }
    }
}

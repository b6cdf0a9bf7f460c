//! Errors shared by the geometry primitives and the distortion engine.
//!
//! The non-octahedral warning is not an error: it never aborts a
//! computation and rides on `Distortion::non_octa` instead.

use std::fmt;

/// Fatal errors for a single distortion computation.
#[derive(Clone, Debug, PartialEq)]
pub enum OctaError {
    /// Input is not seven finite 3D points (or a point set/index is malformed).
    BadShape { reason: String },
    /// A unit-vector or angle operation met a zero-length vector.
    ZeroVector,
    /// A plane through three points has a zero normal (collinear points).
    DegeneratePlane,
    /// Fewer than seven atoms (center included) within the cutoff.
    IncompleteOctahedron { found: usize, cutoff: f64 },
}

impl OctaError {
    pub(crate) fn bad_shape(reason: impl Into<String>) -> Self {
        Self::BadShape {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for OctaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadShape { reason } => write!(f, "bad input shape: {reason}"),
            Self::ZeroVector => write!(f, "zero-length vector (coincident atoms)"),
            Self::DegeneratePlane => write!(f, "degenerate plane (three collinear points)"),
            Self::IncompleteOctahedron { found, cutoff } => write!(
                f,
                "incomplete octahedron: {found} atoms within {cutoff} of the center, need 7"
            ),
        }
    }
}

impl std::error::Error for OctaError {}

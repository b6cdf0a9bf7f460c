//! The eight triangular faces of an octahedron, picked out of the 20 ligand triples.
//!
//! Algorithm
//! - For every triple of ligands build the plane through them and measure the
//!   distance from the center to its projection on that plane.
//! - Triples containing a trans pair cut through (or near) the center; in the
//!   non-degenerate case those are exactly the 12 closest planes. The 8
//!   farthest triples are the faces.
//! - Collinear triples have no plane; they rank at distance 0 and are
//!   discarded first. A degenerate triple among the kept 8 is reported.

use crate::octa::types::{Face, Octahedron};
use crate::octa::util::{cmp_f64, index_combinations};
use crate::plane::Plane;
use crate::projection::project_point_on_plane;

/// A candidate triple with its center-to-plane distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedFace {
    pub face: Face,
    pub distance: f64,
    /// Triple was collinear (zero normal); `distance` is then 0.
    pub degenerate: bool,
}

/// Result of face enumeration: 8 kept faces and 12 discarded triples, both
/// ascending by distance.
#[derive(Clone, Debug)]
pub struct FaceSet {
    pub faces: Vec<RankedFace>,
    pub discarded: Vec<RankedFace>,
}

impl FaceSet {
    /// True if any kept face is degenerate (non-octahedral input).
    pub fn has_degenerate_face(&self) -> bool {
        self.faces.iter().any(|f| f.degenerate)
    }

    /// Whether `face` is one of the eight octahedron faces.
    pub fn contains(&self, face: &Face) -> bool {
        self.faces.iter().any(|f| f.face == *face)
    }

    /// Kept faces paired with their opposite triples.
    pub fn opposite_pairs(&self) -> Vec<(Face, Face)> {
        self.faces.iter().map(|f| (f.face, f.face.opposite())).collect()
    }
}

/// Enumerate all 20 triples, rank by center-to-plane distance, keep the 8 farthest.
///
/// Ties keep enumeration order (stable sort); the kept set does not depend on it.
pub fn find_faces(octa: &Octahedron) -> FaceSet {
    let mut ranked: Vec<RankedFace> = index_combinations(6, 3)
        .into_iter()
        .map(|t| {
            let face = Face::new(t[0], t[1], t[2]);
            let [p1, p2, p3] = face.vertices(octa);
            let plane = Plane::from_three(p1, p2, p3);
            match project_point_on_plane(octa.center, &plane) {
                Ok(foot) => RankedFace {
                    face,
                    distance: (foot - octa.center).norm(),
                    degenerate: false,
                },
                Err(_) => RankedFace {
                    face,
                    distance: 0.0,
                    degenerate: true,
                },
            }
        })
        .collect();
    ranked.sort_by(|a, b| cmp_f64(&a.distance, &b.distance));
    let faces = ranked.split_off(12);
    FaceSet {
        faces,
        discarded: ranked,
    }
}

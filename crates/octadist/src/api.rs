//! Curated surface for callers (the CLI, notebooks, benches).
//!
//! Prefer these re-exports over reaching into submodules; internal layout may
//! move.

// Distortion engine
pub use crate::octa::{
    align_trans_pairs, calc_delta, calc_sigma, calc_zeta, compute, compute_with, describe,
    find_faces, split_angles, theta_sweep, Descriptors, Distortion, Face, FaceSet, FaceTwist,
    OctaCfg, Octahedron, RankedFace, ThetaSweep, TransAlignment, DEFAULT_CUTOFF, TRANS_TOL_DEG,
};
// Extraction
pub use crate::octa::{extract_all, extract_octahedron, metal_centers, Extracted};
// Reference and random complexes
pub use crate::octa::rand::{
    draw_octahedron, random_rotation, JitterCfg, ReplayToken as OctaReplay,
};
pub use crate::octa::special::{elongated, reference_complex, regular, twisted};
// Geometry primitives
pub use crate::linear::{angle_at, angle_signed, angle_unsigned, distance, triangle_area, unit};
pub use crate::plane::{best_fit_plane, plane_from_three, Plane};
pub use crate::projection::{project_point_on_line, project_point_on_plane};
// Files and elements
pub use crate::elements::{atomic_number, canonical_symbol, is_metal, symbol};
pub use crate::molecule::{detect_format, parse_str, read_molecule, Format, Molecule, MoleculeError};
// Secondary analyses
pub use crate::jahn_teller::{jahn_teller, JahnTeller};
pub use crate::rmsd::{kabsch, rmsd, Superposition};

pub use crate::error::OctaError;

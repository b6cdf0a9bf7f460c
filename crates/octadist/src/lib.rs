//! Octahedral distortion parameters for six-coordinate metal complexes.
//!
//! The crate turns a metal center and its six ligands into the standard
//! descriptors (bond-length spread ζ and Δ, cis-angle deviation Σ, trigonal
//! twist Θ), and provides the pieces around it: extraction from larger
//! structures, molecule readers, Jahn–Teller plane angles and RMSD.
//!
//! Layout
//! - `linear`, `plane`, `projection`: small geometric primitives.
//! - `octa`: the octahedron type, face enumeration, trans alignment, the Θ
//!   sweep and the aggregate `compute`.
//! - `molecule`, `elements`: file readers and the element table.
//! - `jahn_teller`, `rmsd`: secondary analyses.

pub mod api;
pub mod elements;
pub mod error;
pub mod jahn_teller;
pub mod linear;
pub mod molecule;
pub mod octa;
pub mod plane;
pub mod projection;
pub mod rmsd;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::OctaError;
pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
pub use octa::{compute, compute_with, Distortion, OctaCfg, Octahedron};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::OctaError;
    pub use crate::molecule::{read_molecule, Format, Molecule, MoleculeError};
    pub use crate::octa::{
        compute, compute_with, extract_all, extract_octahedron, Distortion, Extracted, Face,
        OctaCfg, Octahedron,
    };
    pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
}

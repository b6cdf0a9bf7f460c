//! Molecule readers: atom labels plus Cartesian coordinates from XYZ files and
//! quantum-chemistry output logs.
//!
//! Purpose
//! - Feed `octa::extract` with `(labels, coords)` from the formats people
//!   actually have on disk.
//!
//! Conventions
//! - Coordinates are returned as written (Å for every supported format).
//! - Log readers return the last complete geometry block of the file, which is
//!   the final optimized structure for optimization runs.
//! - Periodic structures (CIF and friends) are out of scope.

pub mod logs;
pub mod xyz;

use std::fmt;
use std::fs;
use std::path::Path;

use nalgebra::Vector3;

use crate::error::OctaError;
use crate::octa::extract::{extract_octahedron, Extracted};

/// Labeled point set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Molecule {
    pub labels: Vec<String>,
    pub coords: Vec<Vector3<f64>>,
}

impl Molecule {
    pub fn new(labels: Vec<String>, coords: Vec<Vector3<f64>>) -> Result<Self, MoleculeError> {
        if labels.len() != coords.len() {
            return Err(MoleculeError::parse(
                0,
                format!("{} labels for {} coordinates", labels.len(), coords.len()),
            ));
        }
        Ok(Self { labels, coords })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Octahedron around atom `center` (0-based).
    pub fn octahedron_at(&self, center: usize, cutoff: f64) -> Result<Extracted, OctaError> {
        extract_octahedron(&self.labels, &self.coords, center, cutoff)
    }
}

/// Supported input formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Xyz,
    Gaussian,
    Orca,
    NwChem,
    QChem,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xyz => "xyz",
            Self::Gaussian => "gaussian",
            Self::Orca => "orca",
            Self::NwChem => "nwchem",
            Self::QChem => "qchem",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub enum MoleculeError {
    Io(std::io::Error),
    /// Neither the extension nor the content identifies a supported format.
    UnknownFormat,
    /// Malformed content; `line` is 1-based (0 when not tied to a line).
    Parse { line: usize, reason: String },
    /// The file parsed but holds no geometry block.
    NoGeometry,
}

impl MoleculeError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MoleculeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::UnknownFormat => write!(f, "unrecognized molecule file format"),
            Self::Parse { line, reason } => write!(f, "parse error at line {line}: {reason}"),
            Self::NoGeometry => write!(f, "no geometry found"),
        }
    }
}

impl std::error::Error for MoleculeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MoleculeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Guess the format from the file extension, then from content signatures.
pub fn detect_format(path: &Path, text: &str) -> Result<Format, MoleculeError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    if ext.as_deref() == Some("xyz") {
        return Ok(Format::Xyz);
    }
    if text.contains("Gaussian, Inc.")
        || text.contains("Standard orientation:")
        || text.contains("Input orientation:")
    {
        return Ok(Format::Gaussian);
    }
    if text.contains("O   R   C   A") || text.contains("CARTESIAN COORDINATES (ANGSTROEM)") {
        return Ok(Format::Orca);
    }
    if text.contains("Northwest Computational Chemistry Package")
        || text.contains("Output coordinates in angstroms")
    {
        return Ok(Format::NwChem);
    }
    if text.contains("Welcome to Q-Chem") || text.contains("Standard Nuclear Orientation") {
        return Ok(Format::QChem);
    }
    if xyz::looks_like_xyz(text) {
        return Ok(Format::Xyz);
    }
    Err(MoleculeError::UnknownFormat)
}

/// Parse `text` in a known format.
pub fn parse_str(text: &str, format: Format) -> Result<Molecule, MoleculeError> {
    match format {
        Format::Xyz => xyz::parse(text),
        Format::Gaussian => logs::parse_gaussian(text),
        Format::Orca => logs::parse_orca(text),
        Format::NwChem => logs::parse_nwchem(text),
        Format::QChem => logs::parse_qchem(text),
    }
}

/// Read a molecule file, detecting its format.
pub fn read_molecule(path: &Path) -> Result<(Molecule, Format), MoleculeError> {
    let text = fs::read_to_string(path)?;
    let format = detect_format(path, &text)?;
    let mol = parse_str(&text, format)?;
    if mol.is_empty() {
        return Err(MoleculeError::NoGeometry);
    }
    Ok((mol, format))
}

/// Parse three floats from `fields`, reporting `line` on failure.
pub(crate) fn parse_xyz_fields(fields: &[&str], line: usize) -> Result<Vector3<f64>, MoleculeError> {
    if fields.len() < 3 {
        return Err(MoleculeError::parse(line, "expected three coordinates"));
    }
    let mut v = Vector3::zeros();
    for (k, f) in fields[..3].iter().enumerate() {
        v[k] = f
            .parse::<f64>()
            .map_err(|_| MoleculeError::parse(line, format!("invalid coordinate '{f}'")))?;
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detection_prefers_extension_then_content() {
        let p = PathBuf::from("complex.xyz");
        assert_eq!(detect_format(&p, "anything").unwrap(), Format::Xyz);
        let log = PathBuf::from("run.log");
        assert_eq!(
            detect_format(&log, " Entering Gaussian System\n Gaussian, Inc.\n").unwrap(),
            Format::Gaussian
        );
        assert_eq!(
            detect_format(&log, "CARTESIAN COORDINATES (ANGSTROEM)\n").unwrap(),
            Format::Orca
        );
        assert_eq!(
            detect_format(&log, "  Output coordinates in angstroms (scale by 1.88)\n").unwrap(),
            Format::NwChem
        );
        assert_eq!(
            detect_format(&log, " Standard Nuclear Orientation (Angstroms)\n").unwrap(),
            Format::QChem
        );
        assert_eq!(detect_format(&log, "2\n\nH 0 0 0\nH 0 0 1\n").unwrap(), Format::Xyz);
        assert!(matches!(
            detect_format(&log, "hello world"),
            Err(MoleculeError::UnknownFormat)
        ));
    }

    #[test]
    fn molecule_requires_matching_lengths() {
        assert!(Molecule::new(vec!["H".into()], vec![]).is_err());
        let m = Molecule::new(vec!["H".into()], vec![Vector3::zeros()]).unwrap();
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_molecule(Path::new("/definitely/not/here.xyz")).unwrap_err();
        assert!(matches!(err, MoleculeError::Io(_)));
    }
}

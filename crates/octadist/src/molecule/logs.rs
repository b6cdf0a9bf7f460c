//! Geometry blocks from Gaussian, ORCA, NWChem and Q-Chem output files.
//!
//! Each reader scans for its block marker, skips the fixed table header, and
//! reads rows until the table ends (a dashed rule or a blank line). The last
//! complete block in the file wins.

use super::{parse_xyz_fields, Molecule, MoleculeError};
use crate::elements::symbol;

/// Table layout of one program's geometry block.
#[derive(Clone, Copy, Debug)]
struct BlockLayout {
    marker: &'static str,
    /// Lines between the marker and the first row.
    header_lines: usize,
    /// Column holding the atom label (or atomic number).
    label_col: usize,
    /// Column holding X; Y and Z follow.
    x_col: usize,
    /// Label column is an atomic number.
    numeric_label: bool,
}

const GAUSSIAN_STANDARD: BlockLayout = BlockLayout {
    marker: "Standard orientation:",
    header_lines: 4,
    label_col: 1,
    x_col: 3,
    numeric_label: true,
};

const GAUSSIAN_INPUT: BlockLayout = BlockLayout {
    marker: "Input orientation:",
    ..GAUSSIAN_STANDARD
};

const ORCA: BlockLayout = BlockLayout {
    marker: "CARTESIAN COORDINATES (ANGSTROEM)",
    header_lines: 1,
    label_col: 0,
    x_col: 1,
    numeric_label: false,
};

const NWCHEM: BlockLayout = BlockLayout {
    marker: "Output coordinates in angstroms",
    header_lines: 3,
    label_col: 1,
    x_col: 3,
    numeric_label: false,
};

const QCHEM: BlockLayout = BlockLayout {
    marker: "Standard Nuclear Orientation",
    header_lines: 2,
    label_col: 1,
    x_col: 2,
    numeric_label: false,
};

/// Last `Standard orientation:` block, else the last `Input orientation:`.
pub fn parse_gaussian(text: &str) -> Result<Molecule, MoleculeError> {
    match last_block(text, &GAUSSIAN_STANDARD) {
        Err(MoleculeError::NoGeometry) => last_block(text, &GAUSSIAN_INPUT),
        other => other,
    }
}

pub fn parse_orca(text: &str) -> Result<Molecule, MoleculeError> {
    last_block(text, &ORCA)
}

pub fn parse_nwchem(text: &str) -> Result<Molecule, MoleculeError> {
    last_block(text, &NWCHEM)
}

pub fn parse_qchem(text: &str) -> Result<Molecule, MoleculeError> {
    last_block(text, &QCHEM)
}

fn last_block(text: &str, layout: &BlockLayout) -> Result<Molecule, MoleculeError> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .rposition(|l| l.contains(layout.marker))
        .ok_or(MoleculeError::NoGeometry)?;

    let mut labels = Vec::new();
    let mut coords = Vec::new();
    for (i, line) in lines.iter().enumerate().skip(start + 1 + layout.header_lines) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("---") {
            break;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < layout.x_col + 3 {
            return Err(MoleculeError::parse(i + 1, "truncated geometry row"));
        }
        let label = row_label(fields[layout.label_col], layout.numeric_label, i + 1)?;
        coords.push(parse_xyz_fields(&fields[layout.x_col..], i + 1)?);
        labels.push(label);
    }
    if labels.is_empty() {
        return Err(MoleculeError::NoGeometry);
    }
    Molecule::new(labels, coords)
}

fn row_label(field: &str, numeric: bool, line: usize) -> Result<String, MoleculeError> {
    if !numeric {
        return Ok(field.to_string());
    }
    let z: u32 = field
        .parse()
        .map_err(|_| MoleculeError::parse(line, format!("invalid atomic number '{field}'")))?;
    symbol(z)
        .map(str::to_string)
        .ok_or_else(|| MoleculeError::parse(line, format!("unknown atomic number {z}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    const GAUSSIAN: &str = "\
 Entering Gaussian System, Link 0=g16
                          Input orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
      1         26           0        9.000000    9.000000    9.000000
      2          8           0        9.000000    9.000000   11.000000
 ---------------------------------------------------------------------
                         Standard orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
      1         26           0        0.000000    0.000000    0.000000
      2          8           0        0.000000    0.000000    2.010000
 ---------------------------------------------------------------------
                         Standard orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
      1         26           0        0.000000    0.000000    0.000000
      2          8           0        0.000000    0.000000    1.990000
 ---------------------------------------------------------------------
 Rotational constants (GHZ):     0.0000000      5.0000000      5.0000000
";

    #[test]
    fn gaussian_takes_last_standard_orientation() {
        let m = parse_gaussian(GAUSSIAN).unwrap();
        assert_eq!(m.labels, vec!["Fe", "O"]);
        assert_eq!(m.coords[1], vector![0.0, 0.0, 1.99]);
    }

    #[test]
    fn gaussian_falls_back_to_input_orientation() {
        let only_input: String = GAUSSIAN.lines().take(9).collect::<Vec<_>>().join("\n");
        let m = parse_gaussian(&only_input).unwrap();
        assert_eq!(m.coords[0], vector![9.0, 9.0, 9.0]);
    }

    #[test]
    fn orca_block() {
        let text = "\
---------------------------------
CARTESIAN COORDINATES (ANGSTROEM)
---------------------------------
  Co     0.000000    0.000000    0.000000
  N      1.950000    0.000000    0.000000

----------------------------
CARTESIAN COORDINATES (A.U.)
----------------------------
";
        let m = parse_orca(text).unwrap();
        assert_eq!(m.labels, vec!["Co", "N"]);
        assert_eq!(m.coords[1].x, 1.95);
    }

    #[test]
    fn nwchem_block() {
        let text = "\
          Output coordinates in angstroms (scale by  1.889725989 to convert to a.u.)

  No.       Tag          Charge          X              Y              Z
 ---- ---------------- ---------- -------------- -------------- --------------
    1 Ni                  28.0000     0.00000000     0.00000000     0.00000000
    2 O                    8.0000     0.00000000     2.05000000     0.00000000

      Atomic Mass
";
        let m = parse_nwchem(text).unwrap();
        assert_eq!(m.labels, vec!["Ni", "O"]);
        assert_eq!(m.coords[1].y, 2.05);
    }

    #[test]
    fn qchem_block() {
        let text = "\
             Standard Nuclear Orientation (Angstroms)
    I     Atom           X                Y                Z
 ----------------------------------------------------------------
    1      Mn      0.000000     0.000000     0.000000
    2      Cl      0.000000     0.000000     2.400000
 ----------------------------------------------------------------
";
        let m = parse_qchem(text).unwrap();
        assert_eq!(m.labels, vec!["Mn", "Cl"]);
        assert_eq!(m.coords[1].z, 2.4);
    }

    #[test]
    fn missing_or_broken_blocks() {
        assert!(matches!(parse_orca("nothing here"), Err(MoleculeError::NoGeometry)));
        let broken = "\
             Standard Nuclear Orientation (Angstroms)
    I     Atom           X                Y                Z
 ----------------------------------------------------------------
    1      Mn      0.000000     abc     0.000000
";
        assert!(matches!(
            parse_qchem(broken),
            Err(MoleculeError::Parse { line: 4, .. })
        ));
    }
}

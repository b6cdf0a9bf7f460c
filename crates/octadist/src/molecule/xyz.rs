//! Plain XYZ: atom count, comment line, then `LABEL X Y Z` rows.
//!
//! Only the first frame is read. Extra columns after Z are ignored.

use super::{parse_xyz_fields, Molecule, MoleculeError};

pub fn parse(text: &str) -> Result<Molecule, MoleculeError> {
    let mut lines = text.lines().enumerate();
    let (_, count_line) = lines.next().ok_or(MoleculeError::NoGeometry)?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| MoleculeError::parse(1, format!("invalid atom count '{}'", count_line.trim())))?;
    // Comment line; may be absent for an empty frame.
    lines.next();

    let mut labels = Vec::with_capacity(count);
    let mut coords = Vec::with_capacity(count);
    for (i, line) in lines {
        if labels.len() == count {
            break;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 4 {
            return Err(MoleculeError::parse(i + 1, "expected LABEL X Y Z"));
        }
        coords.push(parse_xyz_fields(&fields[1..4], i + 1)?);
        labels.push(fields[0].to_string());
    }
    if labels.len() != count {
        return Err(MoleculeError::parse(
            0,
            format!("header announces {count} atoms, found {}", labels.len()),
        ));
    }
    if count == 0 {
        return Err(MoleculeError::NoGeometry);
    }
    Molecule::new(labels, coords)
}

/// Heuristic used by format detection: an integer on the first line and a
/// parseable row on the third.
pub(crate) fn looks_like_xyz(text: &str) -> bool {
    let mut lines = text.lines();
    let count_ok = lines
        .next()
        .is_some_and(|l| l.trim().parse::<usize>().is_ok());
    let row_ok = lines.nth(1).is_some_and(|l| {
        let f: Vec<&str> = l.split_whitespace().collect();
        f.len() >= 4 && f[1..4].iter().all(|x| x.parse::<f64>().is_ok())
    });
    count_ok && row_ok
}

//! Cut an octahedron (center + 6 nearest atoms within a cutoff) out of a larger structure.

use nalgebra::Vector3;

use crate::error::OctaError;
use crate::linear::distance;
use crate::octa::types::Octahedron;
use crate::octa::util::cmp_f64;

/// Extracted complex with provenance back to the source structure.
#[derive(Clone, Debug, PartialEq)]
pub struct Extracted {
    /// Labels in octahedron order, center first.
    pub labels: Vec<String>,
    /// Source indices in octahedron order, center first.
    pub indices: [usize; 7],
    /// Center-to-atom distances in octahedron order (first is 0).
    pub distances: [f64; 7],
    pub octahedron: Octahedron,
}

/// Take the center at `center` and its six nearest neighbors within `cutoff`.
///
/// Neighbors are sorted by distance (stable, so ties keep input order).
/// Fewer than six neighbors within the cutoff is `IncompleteOctahedron`.
pub fn extract_octahedron(
    labels: &[String],
    coords: &[Vector3<f64>],
    center: usize,
    cutoff: f64,
) -> Result<Extracted, OctaError> {
    if labels.len() != coords.len() {
        return Err(OctaError::bad_shape(format!(
            "{} labels for {} coordinates",
            labels.len(),
            coords.len()
        )));
    }
    if center >= coords.len() {
        return Err(OctaError::bad_shape(format!(
            "center index {center} out of range for {} atoms",
            coords.len()
        )));
    }
    if !(cutoff.is_finite() && cutoff > 0.0) {
        return Err(OctaError::bad_shape(format!("cutoff must be positive, got {cutoff}")));
    }
    let origin = coords[center];
    let mut near: Vec<(usize, f64)> = coords
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != center)
        .map(|(i, &p)| (i, distance(origin, p)))
        .filter(|&(_, d)| d <= cutoff)
        .collect();
    near.sort_by(|a, b| cmp_f64(&a.1, &b.1));
    if near.len() < 6 {
        return Err(OctaError::IncompleteOctahedron {
            found: near.len() + 1,
            cutoff,
        });
    }
    near.truncate(6);

    let mut indices = [center; 7];
    let mut distances = [0.0; 7];
    for (k, &(i, d)) in near.iter().enumerate() {
        indices[k + 1] = i;
        distances[k + 1] = d;
    }
    let points: Vec<Vector3<f64>> = indices.iter().map(|&i| coords[i]).collect();
    Ok(Extracted {
        labels: indices.iter().map(|&i| labels[i].clone()).collect(),
        indices,
        distances,
        octahedron: Octahedron::from_points(&points)?,
    })
}

/// Indices of every atom the predicate classifies as a metal.
pub fn metal_centers(labels: &[String], is_metal: impl Fn(&str) -> bool) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter(|(_, l)| is_metal(l.as_str()))
        .map(|(i, _)| i)
        .collect()
}

/// One octahedron per metal center; centers without six neighbors are skipped.
pub fn extract_all(
    labels: &[String],
    coords: &[Vector3<f64>],
    cutoff: f64,
    is_metal: impl Fn(&str) -> bool,
) -> Result<Vec<Extracted>, OctaError> {
    let mut out = Vec::new();
    for center in metal_centers(labels, is_metal) {
        match extract_octahedron(labels, coords, center, cutoff) {
            Ok(ex) => out.push(ex),
            Err(OctaError::IncompleteOctahedron { .. }) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(out)
}

//! Structural descriptors: face areas, surface area and volume.

use nalgebra::Matrix3;

use crate::octa::faces::{find_faces, RankedFace};
use crate::octa::types::{Face, Octahedron};
use crate::linear::triangle_area;

#[derive(Clone, Debug, PartialEq)]
pub struct Descriptors {
    /// The eight faces with their areas, in face-enumeration order.
    pub faces: Vec<(Face, f64)>,
    pub surface_area: f64,
    /// Sum of the eight center–face tetrahedra.
    pub volume: f64,
}

pub fn describe(octa: &Octahedron) -> Descriptors {
    let set = find_faces(octa);
    let faces: Vec<(Face, f64)> = set.faces.iter().map(|rf| (rf.face, face_area(octa, rf))).collect();
    let surface_area = faces.iter().map(|(_, a)| a).sum();
    let volume = set
        .faces
        .iter()
        .map(|rf| {
            let [a, b, c] = rf.face.vertices(octa);
            let m = Matrix3::from_columns(&[a - octa.center, b - octa.center, c - octa.center]);
            m.determinant().abs() / 6.0
        })
        .sum();
    Descriptors {
        faces,
        surface_area,
        volume,
    }
}

fn face_area(octa: &Octahedron, rf: &RankedFace) -> f64 {
    let [a, b, c] = rf.face.vertices(octa);
    triangle_area(a, b, c)
}

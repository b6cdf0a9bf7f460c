//! Root-mean-square deviation between paired point sets, with optional
//! optimal superposition (Kabsch).
//!
//! Algorithm (Kabsch)
//! - Center both sets; form the covariance `H = Σ (mᵢ − m̄)(tᵢ − t̄)ᵀ`.
//! - SVD `H = U Σ Vᵀ`; `R = V · diag(1, 1, d) · Uᵀ` with `d = sign(det(V Uᵀ))`
//!   so the result is a proper rotation (no reflection).
//! - `t = t̄ − R m̄`, so `target ≈ R · mobile + t`.
//!
//! References
//! - W. Kabsch, Acta Cryst. A32 (1976) 922.

use nalgebra::{Matrix3, Vector3};

use crate::error::OctaError;

/// Rigid transform `x ↦ rotation · x + translation` and its residual RMSD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Superposition {
    pub rotation: Matrix3<f64>,
    pub translation: Vector3<f64>,
    pub rmsd: f64,
}

impl Superposition {
    #[inline]
    pub fn apply(&self, p: Vector3<f64>) -> Vector3<f64> {
        self.rotation * p + self.translation
    }
}

/// Plain RMSD over paired points, no fitting.
pub fn rmsd(a: &[Vector3<f64>], b: &[Vector3<f64>]) -> Result<f64, OctaError> {
    check_pairs(a, b)?;
    let ss: f64 = a.iter().zip(b).map(|(p, q)| (p - q).norm_squared()).sum();
    Ok((ss / a.len() as f64).sqrt())
}

/// Best proper rigid superposition of `mobile` onto `target`.
pub fn kabsch(mobile: &[Vector3<f64>], target: &[Vector3<f64>]) -> Result<Superposition, OctaError> {
    check_pairs(mobile, target)?;
    let n = mobile.len() as f64;
    let cm: Vector3<f64> = mobile.iter().sum::<Vector3<f64>>() / n;
    let ct: Vector3<f64> = target.iter().sum::<Vector3<f64>>() / n;

    let mut h = Matrix3::<f64>::zeros();
    for (m, t) in mobile.iter().zip(target) {
        h += (m - cm) * (t - ct).transpose();
    }
    let svd = h.svd(true, true);
    let (Some(u), Some(v_t)) = (svd.u, svd.v_t) else {
        return Err(OctaError::bad_shape("covariance SVD did not converge"));
    };
    let v = v_t.transpose();
    let d = if (v * u.transpose()).determinant() < 0.0 { -1.0 } else { 1.0 };
    let rotation = v * Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, d)) * u.transpose();
    let translation = ct - rotation * cm;

    let moved: Vec<Vector3<f64>> = mobile.iter().map(|p| rotation * p + translation).collect();
    Ok(Superposition {
        rotation,
        translation,
        rmsd: rmsd(&moved, target)?,
    })
}

fn check_pairs(a: &[Vector3<f64>], b: &[Vector3<f64>]) -> Result<(), OctaError> {
    if a.is_empty() || a.len() != b.len() {
        return Err(OctaError::bad_shape(format!(
            "rmsd needs two non-empty sets of equal size, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

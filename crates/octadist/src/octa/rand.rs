//! Random distorted octahedra (axis jitter + replay tokens).
//!
//! Model
//! - Start from the six ±axis directions, tilt each by a bounded random offset,
//!   scale each bond by `bond · (1 + u)` with `u ∈ [−bond_jitter, bond_jitter]`,
//!   then optionally apply a uniformly random rotation.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `index` of a stream can be regenerated on its own.
//!
//! Used by property tests and benchmarks.

use nalgebra::{Quaternion, Rotation3, UnitQuaternion, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::special::regular;
use super::types::Octahedron;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct JitterCfg {
    /// Mean bond length.
    pub bond: f64,
    /// Relative bond-length jitter. Clamped to [0, 0.9].
    pub bond_jitter: f64,
    /// Per-component direction jitter on the unit axis vectors. Clamped to [0, 0.5].
    pub direction_jitter: f64,
    /// Apply a random global rotation?
    pub random_orientation: bool,
}

impl Default for JitterCfg {
    fn default() -> Self {
        Self {
            bond: 2.0,
            bond_jitter: 0.05,
            direction_jitter: 0.1,
            random_orientation: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw one jittered octahedron centered at the origin.
///
/// Ligands keep the axis order of `special::regular` (+x, −x, +y, −y, +z, −z)
/// before the optional rotation.
pub fn draw_octahedron(cfg: JitterCfg, tok: ReplayToken) -> Octahedron {
    let mut rng = tok.to_std_rng();
    let bj = cfg.bond_jitter.clamp(0.0, 0.9);
    let dj = cfg.direction_jitter.clamp(0.0, 0.5);
    let bond = cfg.bond.abs().max(1e-9);

    let mut octa = regular(1.0);
    for l in octa.ligands.iter_mut() {
        let tilt = Vector3::from_fn(|_, _| rng.gen_range(-dj..=dj));
        let dir = (*l + tilt).normalize();
        *l = dir * bond * (1.0 + rng.gen_range(-bj..=bj));
    }
    if cfg.random_orientation {
        let rot = random_rotation(&mut rng);
        octa = octa.map_points(|p| rot * p);
    }
    octa
}

/// Uniformly distributed rotation (Shoemake's quaternion method).
pub fn random_rotation<R: Rng>(rng: &mut R) -> Rotation3<f64> {
    let (u1, u2, u3): (f64, f64, f64) = (rng.gen(), rng.gen(), rng.gen());
    let tau = 2.0 * std::f64::consts::PI;
    let a = (1.0 - u1).sqrt();
    let b = u1.sqrt();
    let q = Quaternion::new(
        b * (tau * u3).cos(),
        a * (tau * u2).sin(),
        a * (tau * u2).cos(),
        b * (tau * u3).sin(),
    );
    UnitQuaternion::from_quaternion(q).to_rotation_matrix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::distance;

    #[test]
    fn replay_is_deterministic() {
        let cfg = JitterCfg::default();
        let a = draw_octahedron(cfg, ReplayToken::new(7, 3));
        let b = draw_octahedron(cfg, ReplayToken::new(7, 3));
        let c = draw_octahedron(cfg, ReplayToken::new(7, 4));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn bonds_stay_within_jitter() {
        let cfg = JitterCfg {
            bond: 2.0,
            bond_jitter: 0.1,
            ..JitterCfg::default()
        };
        for i in 0..32 {
            let o = draw_octahedron(cfg, ReplayToken::new(11, i));
            for l in o.ligands {
                let d = distance(o.center, l);
                assert!((1.8 - 1e-9..=2.2 + 1e-9).contains(&d), "bond {d}");
            }
        }
    }

    #[test]
    fn rotations_are_orthonormal() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..16 {
            let r = random_rotation(&mut rng);
            let m = r.matrix();
            assert!((m.transpose() * m - nalgebra::Matrix3::identity()).norm() < 1e-12);
            assert!((m.determinant() - 1.0).abs() < 1e-12);
        }
    }
}

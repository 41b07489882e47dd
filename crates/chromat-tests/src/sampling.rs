//! Seeded generators for property tests
//!
//! Everything is driven by `ChaCha8Rng` so failures reproduce from the seed.

use chromat_core::{Chromaticity, Matrix3x3, Primaries};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for a given seed
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A white point somewhere around the daylight locus
pub fn random_white(rng: &mut impl Rng) -> Chromaticity {
    Chromaticity::new(rng.gen_range(0.28..0.36), rng.gen_range(0.30..0.38))
}

/// Primaries forming a non-degenerate triangle around a random white
///
/// Primaries sit at roughly 120° apart from the white with radius 0.05-0.25,
/// which keeps every y strictly positive and the primaries matrix well
/// conditioned.
pub fn random_primaries(rng: &mut impl Rng) -> Primaries {
    let white = random_white(rng);
    let mut vertex = |base_angle: f64| {
        let angle = base_angle + rng.gen_range(-0.5..0.5);
        let radius = rng.gen_range(0.05..0.25);
        Chromaticity::new(white.x + radius * angle.cos(), white.y + radius * angle.sin())
    };

    let third = std::f64::consts::TAU / 3.0;
    let red = vertex(0.0);
    let green = vertex(third);
    let blue = vertex(2.0 * third);

    Primaries {
        red,
        green,
        blue,
        white,
    }
}

/// A matrix with entries uniform in [-2, 2)
pub fn random_matrix(rng: &mut impl Rng) -> Matrix3x3 {
    let mut m = Matrix3x3::identity();
    for row in m.m.iter_mut() {
        for v in row.iter_mut() {
            *v = rng.gen_range(-2.0..2.0);
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        let a = random_primaries(&mut rng(7));
        let b = random_primaries(&mut rng(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_primaries_have_positive_y() {
        let mut rng = rng(1);
        for _ in 0..1000 {
            let p = random_primaries(&mut rng);
            for c in [p.red, p.green, p.blue, p.white] {
                assert!(c.y > 0.0, "{c:?}");
            }
        }
    }
}

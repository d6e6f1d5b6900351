//! Infinite domain repetition
//!
//! Folds sample points into the central tile of an axis-aligned lattice
//! before the estimator call, which renders one primitive as an endless
//! grid of copies at no extra cost per cell.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Euclidean floating-point modulo, `l - r * floor(l / r)`
///
/// The result lies in `[0, r)` for positive `r`, including negative `l`,
/// which is what makes the lattice symmetric around zero. A divisor of
/// zero returns `l` unchanged.
#[inline(always)]
pub fn euclid_mod(l: f32, r: f32) -> f32 {
    if r == 0.0 {
        return l;
    }
    l - r * (l / r).floor()
}

/// Fold a point into the central tile of the repetition lattice
///
/// Each axis with a non-zero period maps into `[-period/2, period/2)`;
/// axes with period zero pass through untouched (the guard in
/// [`euclid_mod`] makes that automatic). Idempotent.
#[inline(always)]
pub fn tile(point: Vec3, period: Vec3) -> Vec3 {
    Vec3::new(
        tile_axis(point.x, period.x),
        tile_axis(point.y, period.y),
        tile_axis(point.z, period.z),
    )
}

#[inline(always)]
fn tile_axis(p: f32, period: f32) -> f32 {
    let half = period * 0.5;
    euclid_mod(p + half, period) - half
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclid_mod_positive() {
        assert!((euclid_mod(7.0, 3.0) - 1.0).abs() < 1e-6);
        assert!((euclid_mod(6.0, 3.0) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_euclid_mod_negative() {
        // True Euclidean result, not the symmetric remainder
        assert!((euclid_mod(-1.0, 3.0) - 2.0).abs() < 1e-6);
        assert!((euclid_mod(-7.5, 2.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_euclid_mod_zero_divisor() {
        assert!((euclid_mod(4.2, 0.0) - 4.2).abs() < 1e-6);
        assert!((euclid_mod(-4.2, 0.0) + 4.2).abs() < 1e-6);
    }

    #[test]
    fn test_tile_centers_lattice() {
        // 3.2 with period 2: 3.2 + 1 = 4.2, mod 2 = 0.2, - 1 = -0.8
        let r = tile(Vec3::new(3.2, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        assert!((r.x - (-0.8)).abs() < 1e-6);
        assert!((r.y - 0.0).abs() < 1e-6);
        assert!((r.z - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_tile_symmetric_around_zero() {
        let period = Vec3::splat(4.0);
        let a = tile(Vec3::new(1.5, 0.0, 0.0), period);
        let b = tile(Vec3::new(-1.5, 0.0, 0.0), period);
        assert!((a.x + b.x).abs() < 1e-6);
    }

    #[test]
    fn test_tile_idempotent() {
        let period = Vec3::new(4.0, 0.0, 5.5);
        for p in [
            Vec3::new(17.3, -2.0, -9.9),
            Vec3::new(-0.1, 8.0, 2.75),
            Vec3::ZERO,
        ] {
            let once = tile(p, period);
            let twice = tile(once, period);
            assert!((once - twice).length() < 1e-5);
        }
    }

    #[test]
    fn test_tile_zero_period_passthrough() {
        let p = Vec3::new(123.4, -56.7, 8.9);
        let r = tile(p, Vec3::ZERO);
        assert!((r - p).length() < 1e-6);
    }
}

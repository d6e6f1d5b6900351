//! Surface normal estimation and color channel mapping
//!
//! Normals come from a four-tap tetrahedral gradient of the distance
//! field, evaluated in object space at the point the march retained.
//! Keeping the taps in object space pins each face to its channel while
//! the shape rotates.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

use crate::scene::Primitive;

/// Finite-difference tap offset
const H: f32 = 1e-4;

/// Estimate the surface normal at an object-space point
///
/// Four estimator taps at tetrahedral sign offsets, summed and
/// normalized; half the evaluations of a six-tap central difference.
#[inline(always)]
pub fn surface_normal(primitive: &Primitive, point: Vec3) -> Vec3 {
    let k0 = Vec3::new(1.0, -1.0, -1.0);
    let k1 = Vec3::new(-1.0, -1.0, 1.0);
    let k2 = Vec3::new(-1.0, 1.0, -1.0);
    let k3 = Vec3::new(1.0, 1.0, 1.0);

    (k0 * primitive.distance(point + k0 * H)
        + k1 * primitive.distance(point + k1 * H)
        + k2 * primitive.distance(point + k2 * H)
        + k3 * primitive.distance(point + k3 * H))
        .normalize()
}

/// Map a unit normal to a color channel in `1..=3`, or 0 for none
///
/// Rounds each component to the nearest axis and sums
/// `|x|*1 + |y|*2 + |z|*3`. Zero means no dominant axis; the renderer
/// then reuses the previous channel on the scanline. Sums above three
/// (diagonal normals, every octahedron face among them) wrap back into
/// the three available channels.
#[inline(always)]
pub fn color_channel(normal: Vec3) -> u8 {
    let nx = normal.x.round().abs() as u8;
    let ny = normal.y.round().abs() as u8;
    let nz = normal.z.round().abs() as u8;
    let id = nx + ny * 2 + nz * 3;
    if id > 3 {
        id - 3
    } else {
        id
    }
}

/// Channel a cell actually draws, given the scanline's previous one
///
/// An indeterminate channel (0) inherits the last drawn channel on the
/// same row; adjacent pixels on a face almost always share a normal,
/// so this papers over the isolated points where the gradient taps
/// cancel. Each row starts over from background. With rounded
/// components a unit normal always has a dominant axis, so 0 only
/// arises from a degenerate (NaN) normal.
#[inline(always)]
pub fn resolve_channel(channel: u8, previous: u8) -> u8 {
    if channel == 0 {
        previous
    } else {
        channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_on_cube_face() {
        let cube = Primitive::Cube { half_extent: 1.0 };
        let n = surface_normal(&cube, Vec3::new(1.0, 0.1, -0.2));
        assert!((n - Vec3::X).length() < 1e-3);

        let n = surface_normal(&cube, Vec3::new(0.2, -1.0, 0.3));
        assert!((n + Vec3::Y).length() < 1e-3);
    }

    #[test]
    fn test_normal_on_sphere_is_radial() {
        let sphere = Primitive::Sphere { radius: 1.0 };
        let p = Vec3::new(0.6, 0.8, 0.0);
        let n = surface_normal(&sphere, p);
        assert!((n - p.normalize()).length() < 1e-3);
    }

    #[test]
    fn test_normal_is_unit_length() {
        let octa = Primitive::Octahedron { size: 1.0 };
        let n = surface_normal(&octa, Vec3::new(0.4, 0.4, 0.2));
        assert!((n.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_channel_per_axis() {
        assert_eq!(color_channel(Vec3::X), 1);
        assert_eq!(color_channel(-Vec3::X), 1);
        assert_eq!(color_channel(Vec3::Y), 2);
        assert_eq!(color_channel(-Vec3::Y), 2);
        assert_eq!(color_channel(Vec3::Z), 3);
        assert_eq!(color_channel(-Vec3::Z), 3);
    }

    #[test]
    fn test_channel_no_dominant_axis() {
        // Components all round to zero
        let n = Vec3::new(0.4, 0.4, 0.4);
        assert_eq!(color_channel(n), 0);
    }

    #[test]
    fn test_channel_diagonal_wraps() {
        // Octahedron face normal: each component rounds to one,
        // 1 + 2 + 3 wraps to channel 3
        let n = Vec3::splat(0.577_350_27);
        assert_eq!(color_channel(n), 3);
        // Two-axis diagonal x+y: 1 + 2 stays channel 3
        let n = Vec3::new(0.707, 0.707, 0.0);
        assert_eq!(color_channel(n), 3);
        // x+z diagonal: 1 + 3 wraps to channel 1
        let n = Vec3::new(0.707, 0.0, -0.707);
        assert_eq!(color_channel(n), 1);
    }

    #[test]
    fn test_degenerate_gradient_gives_no_channel() {
        // At the cube's center the four taps cancel exactly and the
        // normalize yields NaN; the channel mapping must land on 0
        let cube = Primitive::Cube { half_extent: 1.0 };
        let n = surface_normal(&cube, Vec3::ZERO);
        assert!(n.x.is_nan());
        assert_eq!(color_channel(n), 0);
    }

    #[test]
    fn test_resolve_keeps_determinate_channels() {
        assert_eq!(resolve_channel(1, 3), 1);
        assert_eq!(resolve_channel(2, 0), 2);
        assert_eq!(resolve_channel(3, 3), 3);
    }

    #[test]
    fn test_resolve_inherits_within_a_scanline() {
        // Indeterminate cells take whatever the row drew last; a fresh
        // row starts from 0 and stays background until a real hit
        assert_eq!(resolve_channel(0, 2), 2);
        assert_eq!(resolve_channel(0, 0), 0);
    }

    #[test]
    fn test_channel_tracks_rounded_axes() {
        // Slightly off-axis normals still land on the axis channel
        assert_eq!(color_channel(Vec3::new(0.98, 0.1, -0.05).normalize()), 1);
        assert_eq!(color_channel(Vec3::new(0.05, -0.99, 0.1).normalize()), 2);
    }
}

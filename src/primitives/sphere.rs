//! Sphere distance estimator
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to a sphere centered at origin
///
/// Exact: negative inside, positive outside, zero on the surface.
#[inline(always)]
pub fn sdf_sphere(point: Vec3, radius: f32) -> f32 {
    point.length() - radius
}

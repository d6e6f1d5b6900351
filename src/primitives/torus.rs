//! Torus distance estimator
//!
//! Author: Moroya Sakamoto

use glam::{Vec2, Vec3};

/// Signed distance to a torus in the XZ plane centered at origin
///
/// `major_radius` runs from the center of the hole to the center of
/// the tube, `minor_radius` is the tube radius. Exact.
#[inline(always)]
pub fn sdf_torus(point: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let q = Vec2::new(Vec2::new(point.x, point.z).length() - major_radius, point.y);
    q.length() - minor_radius
}

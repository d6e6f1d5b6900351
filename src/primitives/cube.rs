//! Cube distance estimator
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to an axis-aligned cube centered at origin
///
/// `half_extent` is half the edge length. Exact both inside and outside:
/// the exterior term measures to the nearest face/edge/corner, the
/// interior term is the (negative) depth below the nearest face.
#[inline(always)]
pub fn sdf_cube(point: Vec3, half_extent: f32) -> f32 {
    let q = point.abs() - Vec3::splat(half_extent);
    q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

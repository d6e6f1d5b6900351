//! Octahedron distance estimator
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance bound for a regular octahedron centered at origin
///
/// Vertices at `(±s, 0, 0)`, `(0, ±s, 0)`, `(0, 0, ±s)`. Plane-distance
/// form: exact on the faces, a lower bound near edges and vertices, so
/// it stays safe for sphere tracing.
#[inline(always)]
pub fn sdf_octahedron(point: Vec3, size: f32) -> f32 {
    let p = point.abs();
    (p.x + p.y + p.z - size) * 0.577_350_27
}

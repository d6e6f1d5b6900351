//! Primitive distance estimators
//!
//! One file per shape. Every estimator is centered at the origin,
//! returns negative inside, and never overestimates the true distance
//! (1-Lipschitz), which is what keeps sphere tracing from overshooting.
//!
//! Author: Moroya Sakamoto

mod cube;
mod octahedron;
mod sphere;
mod torus;

pub use cube::sdf_cube;
pub use octahedron::sdf_octahedron;
pub use sphere::sdf_sphere;
pub use torus::sdf_torus;

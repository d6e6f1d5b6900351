//! # ALICE-TERM
//!
//! **A.L.I.C.E. - Adaptive Lightweight Implicit Character Engine**
//!
//! A real-time terminal renderer that sphere-traces signed distance
//! fields into character cells instead of rasterizing triangles.
//!
//! ## Features
//!
//! - **Primitives**: Cube, Sphere, Torus, Octahedron
//! - **Tiling**: infinite domain repetition per world axis
//! - **Rotation**: precomputed per-axis matrix tables, zero per-pixel trig
//! - **Shading**: tetrahedral-gradient normals mapped to three color channels
//! - **Driver**: fixed-rate frame loop, rayon row-parallel marching
//! - **Terminal**: crossterm backend with palettes and a raw-mode guard
//!
//! ## Example
//!
//! ```rust
//! use alice_term::prelude::*;
//!
//! // A unit sphere seen from five units up the z axis
//! let config = SceneConfig {
//!     primitive: Primitive::Sphere { radius: 1.0 },
//!     camera_distance: 5.0,
//!     ..SceneConfig::default()
//! };
//! config.validate().unwrap();
//!
//! // March the center ray straight at it
//! let hit = march(
//!     &config,
//!     Mat3::IDENTITY,
//!     Vec3::new(0.0, 0.0, 5.0),
//!     Vec3::new(0.0, 0.0, -1.0),
//! )
//! .unwrap();
//! assert!((hit.distance - 4.0).abs() < 0.01);
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod camera;
pub mod modifiers;
pub mod primitives;
pub mod raycast;
pub mod render;
pub mod rotation;
pub mod scene;
pub mod shade;
pub mod term;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::camera::RayGrid;
    pub use crate::modifiers::{euclid_mod, tile};
    pub use crate::primitives::{sdf_cube, sdf_octahedron, sdf_sphere, sdf_torus};
    pub use crate::raycast::{march, Hit};
    pub use crate::render::{Canvas, DrawCommand, Driver, FrameStats, Input, InputSource};
    pub use crate::rotation::RotationTable;
    pub use crate::scene::{ConfigError, Primitive, SceneConfig};
    pub use crate::shade::{color_channel, resolve_channel, surface_normal};
    pub use crate::term::{Palette, TermCanvas};
    pub use glam::{Mat3, Vec3};
}

// Re-exports for convenience
pub use raycast::march;
pub use render::Driver;
pub use scene::{Primitive, SceneConfig};

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_basic_workflow() {
        // Default scene: the classic unit cube six units out
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());

        // A head-on ray meets the near face at z = 1
        let hit = march(
            &config,
            Mat3::IDENTITY,
            Vec3::new(0.0, 0.0, 6.0),
            Vec3::new(0.0, 0.0, -1.0),
        )
        .unwrap();
        assert!((hit.distance - 5.0).abs() < 0.01);

        // That face's normal points back at the camera, channel 3
        let normal = surface_normal(&config.primitive, hit.point);
        assert!((normal - Vec3::Z).length() < 1e-3);
        assert_eq!(color_channel(normal), 3);
    }

    #[test]
    fn test_tiled_spinning_scene() {
        let config = SceneConfig {
            primitive: Primitive::Sphere { radius: 1.0 },
            tile: Vec3::new(5.0, 5.0, 0.0),
            spin: [2, 3, 0],
            ..SceneConfig::default()
        };
        assert!(config.validate().is_ok());

        let table = RotationTable::new(config.spin);
        let world_to_object = table.composite(7).transpose();

        // Aim at a far tile copy; repetition folds it back home
        let hit = march(
            &config,
            world_to_object,
            Vec3::new(10.0, -5.0, 6.0),
            Vec3::new(0.0, 0.0, -1.0),
        );
        assert!(hit.is_some());
    }
}

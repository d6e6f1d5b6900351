//! Scene configuration: the active primitive and every render parameter
//!
//! One validated [`SceneConfig`] drives the whole renderer. It is built
//! once (usually from the CLI), checked with [`SceneConfig::validate`],
//! and never mutated afterwards.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;
use thiserror::Error;

use crate::primitives::{sdf_cube, sdf_octahedron, sdf_sphere, sdf_torus};

/// The shape being rendered, with its dimensions
///
/// A single primitive is active per scene; dispatch is one enum match
/// per estimator call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Axis-aligned cube with the given half edge length
    Cube {
        /// Half the edge length
        half_extent: f32,
    },
    /// Sphere with the given radius
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Torus in the XZ plane
    Torus {
        /// Center of hole to center of tube
        major_radius: f32,
        /// Tube radius
        minor_radius: f32,
    },
    /// Regular octahedron with vertices `size` away from the center
    Octahedron {
        /// Center to vertex distance
        size: f32,
    },
}

impl Primitive {
    /// Signed distance from `point` (object space) to the surface
    #[inline(always)]
    pub fn distance(&self, point: Vec3) -> f32 {
        match *self {
            Primitive::Cube { half_extent } => sdf_cube(point, half_extent),
            Primitive::Sphere { radius } => sdf_sphere(point, radius),
            Primitive::Torus {
                major_radius,
                minor_radius,
            } => sdf_torus(point, major_radius, minor_radius),
            Primitive::Octahedron { size } => sdf_octahedron(point, size),
        }
    }

    fn dimensions(&self) -> &'static str {
        match self {
            Primitive::Cube { .. } => "cube half extent",
            Primitive::Sphere { .. } => "sphere radius",
            Primitive::Torus { .. } => "torus radii",
            Primitive::Octahedron { .. } => "octahedron size",
        }
    }

    fn dimensions_valid(&self) -> bool {
        match *self {
            Primitive::Cube { half_extent } => positive_finite(half_extent),
            Primitive::Sphere { radius } => positive_finite(radius),
            Primitive::Torus {
                major_radius,
                minor_radius,
            } => positive_finite(major_radius) && positive_finite(minor_radius),
            Primitive::Octahedron { size } => positive_finite(size),
        }
    }
}

fn positive_finite(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Configuration rejected by [`SceneConfig::validate`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Field of view outside the renderable range
    #[error("field of view must be in 1..180 degrees, got {0}")]
    FieldOfView(u32),

    /// Zero frames per second
    #[error("frames per second must be at least 1")]
    Fps,

    /// Zero marching steps
    #[error("max steps must be at least 1")]
    MaxSteps,

    /// Non-positive or non-finite intersection epsilon
    #[error("intersection epsilon must be positive and finite, got {0}")]
    Epsilon(f32),

    /// Non-positive or non-finite vertical stretch
    #[error("vertical stretch must be positive and finite, got {0}")]
    Stretch(f32),

    /// Negative or non-finite repetition period
    #[error("repetition period must be non-negative and finite, got {0}")]
    TilePeriod(f32),

    /// Non-positive or non-finite primitive dimensions
    #[error("{0} must be positive and finite")]
    PrimitiveSize(&'static str),

    /// Non-finite camera distance or drift
    #[error("camera distance and drift must be finite")]
    Camera,
}

/// Everything the frame driver needs to render: shape, motion, camera
/// and marching parameters
///
/// Defaults give the classic spinning unit cube seen from six units up
/// the z axis at 20 fps.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Active primitive
    pub primitive: Primitive,
    /// Repetition period per world axis; 0 disables that axis
    pub tile: Vec3,
    /// Rotation speed in whole degrees per frame for pitch, yaw, roll;
    /// 0 freezes that axis
    pub spin: [u32; 3],
    /// Camera z position at frame zero (looks down negative z)
    pub camera_distance: f32,
    /// Added to the camera origin before each rendered frame
    pub drift: Vec3,
    /// Vertical field of view in degrees
    pub fov: u32,
    /// Vertical stretch compensating for non-square character cells
    pub stretch: f32,
    /// Surface hit threshold for the stepper
    pub epsilon: f32,
    /// Marching step budget per ray
    pub max_steps: u32,
    /// Target frames per second
    pub fps: u32,
    /// Glyph drawn for each of the three color channels
    pub glyphs: [char; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            primitive: Primitive::Cube { half_extent: 1.0 },
            tile: Vec3::ZERO,
            spin: [0, 0, 0],
            camera_distance: 6.0,
            drift: Vec3::ZERO,
            fov: 40,
            stretch: 2.0,
            epsilon: 1e-3,
            max_steps: 32,
            fps: 20,
            glyphs: ['█', '█', '█'],
        }
    }
}

impl SceneConfig {
    /// Check every parameter the renderer divides by, indexes with, or
    /// feeds to `tan`
    ///
    /// Must pass before the config reaches the driver; the render loop
    /// itself performs no validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.primitive.dimensions_valid() {
            return Err(ConfigError::PrimitiveSize(self.primitive.dimensions()));
        }
        for period in [self.tile.x, self.tile.y, self.tile.z] {
            if !period.is_finite() || period < 0.0 {
                return Err(ConfigError::TilePeriod(period));
            }
        }
        if !self.camera_distance.is_finite() || !self.drift.is_finite() {
            return Err(ConfigError::Camera);
        }
        if self.fov == 0 || self.fov >= 180 {
            return Err(ConfigError::FieldOfView(self.fov));
        }
        if !self.stretch.is_finite() || self.stretch <= 0.0 {
            return Err(ConfigError::Stretch(self.stretch));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::Epsilon(self.epsilon));
        }
        if self.max_steps == 0 {
            return Err(ConfigError::MaxSteps);
        }
        if self.fps == 0 {
            return Err(ConfigError::Fps);
        }
        Ok(())
    }
}

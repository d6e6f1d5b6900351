//! Sphere tracing
//!
//! Walks a ray by the signed distance at each sample. Because every
//! estimator is a true lower bound, a step can never jump through the
//! surface; the loop either lands inside the epsilon shell or runs out
//! of its step budget.
//!
//! Author: Moroya Sakamoto

use glam::{Mat3, Vec3};

use crate::modifiers::tile;
use crate::scene::SceneConfig;

/// Result of a converged march
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Sample point in object space, after tiling and rotation; this is
    /// the point the normal estimator evaluates around
    pub point: Vec3,
    /// Ray parameter at the hit (world-space distance traveled)
    pub distance: f32,
    /// Steps consumed before convergence
    pub steps: u32,
}

/// March one ray against the scene
///
/// Per step the world-space sample is folded into the repetition tile,
/// rotated into object space by `world_to_object`, then measured. A
/// distance below `config.epsilon` is a hit; exhausting
/// `config.max_steps` is a miss (`None`), the normal outcome for empty
/// background cells. The traveled distance never decreases because only
/// distances at or above epsilon are accumulated.
#[inline(always)]
pub fn march(
    config: &SceneConfig,
    world_to_object: Mat3,
    origin: Vec3,
    direction: Vec3,
) -> Option<Hit> {
    let mut total = 0.0f32;
    let mut steps = 0u32;

    while steps < config.max_steps {
        let sample = origin + direction * total;
        let local = world_to_object * tile(sample, config.tile);
        let d = config.primitive.distance(local);

        if d < config.epsilon {
            return Some(Hit {
                point: local,
                distance: total,
                steps,
            });
        }

        total += d;
        steps += 1;
    }

    None
}

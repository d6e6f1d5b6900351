//! Common test helpers for ALICE-TERM integration tests
//!
//! Author: Moroya Sakamoto

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use alice_term::prelude::*;

// ============================================================================
// Standard test scenes
// ============================================================================

/// Unit sphere five units from the camera
pub fn sphere_scene() -> SceneConfig {
    SceneConfig {
        primitive: Primitive::Sphere { radius: 1.0 },
        camera_distance: 5.0,
        ..SceneConfig::default()
    }
}

/// The default unit cube, frozen
pub fn cube_scene() -> SceneConfig {
    SceneConfig::default()
}

/// Torus lying in the XZ plane
pub fn torus_scene() -> SceneConfig {
    SceneConfig {
        primitive: Primitive::Torus {
            major_radius: 2.0,
            minor_radius: 0.5,
        },
        ..SceneConfig::default()
    }
}

/// Regular octahedron, unit circumradius
pub fn octahedron_scene() -> SceneConfig {
    SceneConfig {
        primitive: Primitive::Octahedron { size: 1.0 },
        ..SceneConfig::default()
    }
}

/// Sphere tiled every five units on x and y
pub fn tiled_scene() -> SceneConfig {
    SceneConfig {
        tile: Vec3::new(5.0, 5.0, 0.0),
        ..sphere_scene()
    }
}

// ============================================================================
// Scripted terminal double
// ============================================================================

/// In-memory [`Canvas`] + [`InputSource`] that records every draw
pub struct ScriptedTerm {
    /// Size reported to the driver on the next tick
    pub rows: u16,
    /// Columns reported alongside `rows`
    pub cols: u16,
    /// Every draw command since construction, in emit order
    pub draws: Vec<DrawCommand>,
    /// Present calls observed
    pub presents: u32,
    /// Inputs handed out one per poll
    pub inputs: VecDeque<Input>,
}

impl ScriptedTerm {
    /// Terminal double reporting a fixed size and no pending input
    pub fn new(rows: u16, cols: u16) -> Self {
        ScriptedTerm {
            rows,
            cols,
            draws: Vec::new(),
            presents: 0,
            inputs: VecDeque::new(),
        }
    }

    /// Queue a keypress for a later poll
    pub fn press(&mut self, input: Input) {
        self.inputs.push_back(input);
    }

    /// The last draw at a cell, if any tick touched it
    pub fn cell(&self, row: u16, col: u16) -> Option<&DrawCommand> {
        self.draws
            .iter()
            .rev()
            .find(|d| d.row == row && d.col == col)
    }
}

impl Canvas for ScriptedTerm {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }

    fn draw(&mut self, command: DrawCommand) -> io::Result<()> {
        self.draws.push(command);
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.presents += 1;
        Ok(())
    }
}

impl InputSource for ScriptedTerm {
    fn poll(&mut self) -> io::Result<Option<Input>> {
        Ok(self.inputs.pop_front())
    }
}

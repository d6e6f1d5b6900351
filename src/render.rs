//! Frame driver: the fixed-rate loop that turns a scene into draw calls
//!
//! Each tick polls input once, reshapes the ray grid if the terminal
//! changed size, then marches every cell and hands one draw command per
//! cell to the canvas, followed by a present. Rows are marched in
//! parallel; the scanline fallback for indeterminate normals lives
//! inside each row so rows stay independent. Pacing sleeps off whatever
//! the frame budget left over and never tries to catch up.
//!
//! Author: Moroya Sakamoto

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use glam::{Mat3, Vec3};
use rayon::prelude::*;

use crate::camera::RayGrid;
use crate::raycast::march;
use crate::rotation::RotationTable;
use crate::scene::{ConfigError, SceneConfig};
use crate::shade::{color_channel, resolve_channel, surface_normal};

/// One cell update handed to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    /// Terminal row, 0 at the top
    pub row: u16,
    /// Terminal column, 0 at the left
    pub col: u16,
    /// Character to place
    pub glyph: char,
    /// Color channel `1..=3`, or 0 for the background
    pub color: u8,
}

/// Keypress categories the driver reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Stop the render loop
    Quit,
    /// Freeze or resume rendering
    TogglePause,
}

/// Terminal-drawing collaborator
pub trait Canvas {
    /// Current size as `(rows, cols)`; polled once per tick
    fn size(&self) -> io::Result<(u16, u16)>;
    /// Queue one cell update
    fn draw(&mut self, command: DrawCommand) -> io::Result<()>;
    /// Flush everything queued since the last present
    fn present(&mut self) -> io::Result<()>;
}

/// Input-polling collaborator; never blocks
pub trait InputSource {
    /// Take at most one pending input
    fn poll(&mut self) -> io::Result<Option<Input>>;
}

/// Totals reported after the loop ends
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    /// Frames actually rendered (paused ticks don't count)
    pub frames: u64,
    /// Wall-clock time spent in the loop
    pub elapsed: Duration,
}

impl FrameStats {
    /// Rendered frames per wall-clock second
    pub fn average_fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            glyph: ' ',
            color: 0,
        }
    }
}

/// Owns the scene and all per-frame state, and drives rendering
pub struct Driver {
    config: SceneConfig,
    rotation: RotationTable,
    rays: RayGrid,
    frame: Vec<Cell>,
    rows: u16,
    cols: u16,
    origin: Vec3,
    frame_count: u64,
    paused: bool,
}

impl Driver {
    /// Validate the config and set up the rotation tables
    ///
    /// The ray grid starts empty and is built on the first tick, when
    /// the real terminal size is known.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rotation = RotationTable::new(config.spin);
        let origin = Vec3::new(0.0, 0.0, config.camera_distance);
        Ok(Driver {
            config,
            rotation,
            rays: RayGrid::empty(),
            frame: Vec::new(),
            rows: 0,
            cols: 0,
            origin,
            frame_count: 0,
            paused: false,
        })
    }

    /// Frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// True while rendering is frozen
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current camera position
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Grid size from the last reshape, `(rows, cols)`
    pub fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// One loop iteration without pacing; `Ok(false)` means quit
    ///
    /// Order per tick: one input poll, one size poll plus reshape if it
    /// changed, then (unless paused) camera drift, rotation lookup, the
    /// parallel march over all cells, and the draw/present pass.
    pub fn tick<T: Canvas + InputSource>(&mut self, term: &mut T) -> io::Result<bool> {
        match term.poll()? {
            Some(Input::Quit) => return Ok(false),
            Some(Input::TogglePause) => self.paused = !self.paused,
            None => {}
        }

        let (rows, cols) = term.size()?;
        if rows != self.rows || cols != self.cols {
            self.reshape(rows, cols);
        }

        if !self.paused {
            self.origin += self.config.drift;
            let world_to_object = self.rotation.composite(self.frame_count).transpose();
            self.render_pass(world_to_object);
            self.blit(term)?;
            self.frame_count += 1;
        }

        Ok(true)
    }

    /// Tick until quit, sleeping off the slack of each frame budget
    pub fn run<T: Canvas + InputSource>(&mut self, term: &mut T) -> io::Result<FrameStats> {
        let budget = Duration::from_secs_f64(1.0 / self.config.fps as f64);
        let started = Instant::now();

        loop {
            let frame_start = Instant::now();
            if !self.tick(term)? {
                break;
            }
            let spent = frame_start.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }

        Ok(FrameStats {
            frames: self.frame_count,
            elapsed: started.elapsed(),
        })
    }

    /// Rebuild the ray grid and frame buffer for a new terminal size
    ///
    /// Runs between render passes only, so the stepper never sees stale
    /// dimensions. A 0x0 size leaves both empty and rendering no-ops.
    fn reshape(&mut self, rows: u16, cols: u16) {
        self.rows = rows;
        self.cols = cols;
        self.rays = RayGrid::new(
            rows as usize,
            cols as usize,
            self.config.fov,
            self.config.stretch,
        );
        self.frame = vec![Cell::default(); rows as usize * cols as usize];
    }

    /// March every cell into the frame buffer, rows in parallel
    fn render_pass(&mut self, world_to_object: Mat3) {
        if self.frame.is_empty() {
            return;
        }
        let cols = self.cols as usize;
        let config = &self.config;
        let rays = &self.rays;
        let origin = self.origin;

        self.frame
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, cells)| {
                let dirs = rays.row(row);
                // Scanline fallback channel, scoped to this row
                let mut previous = 0u8;
                for (col, cell) in cells.iter_mut().enumerate() {
                    let mut next = Cell::default();
                    if let Some(hit) = march(config, world_to_object, origin, dirs[col]) {
                        let normal = surface_normal(&config.primitive, hit.point);
                        let channel = resolve_channel(color_channel(normal), previous);
                        if channel > 0 {
                            next.glyph = config.glyphs[(channel - 1) as usize];
                            next.color = channel;
                            previous = channel;
                        }
                    }
                    *cell = next;
                }
            });
    }

    /// Emit one draw command per cell, then present
    fn blit<T: Canvas>(&self, term: &mut T) -> io::Result<()> {
        if !self.frame.is_empty() {
            for (row, cells) in self.frame.chunks(self.cols as usize).enumerate() {
                for (col, cell) in cells.iter().enumerate() {
                    term.draw(DrawCommand {
                        row: row as u16,
                        col: col as u16,
                        glyph: cell.glyph,
                        color: cell.color,
                    })?;
                }
            }
        }
        term.present()
    }
}

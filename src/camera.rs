//! Per-cell camera ray directions
//!
//! One unit direction per terminal cell, rebuilt in full whenever the
//! terminal is resized and read-only during rendering. The image plane
//! distance comes from the field of view; `stretch` widens the vertical
//! cell spacing so square geometry survives non-square character cells.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Row-major buffer of unit ray directions, one per terminal cell
#[derive(Debug, Clone, PartialEq)]
pub struct RayGrid {
    rows: usize,
    cols: usize,
    dirs: Vec<Vec3>,
}

impl RayGrid {
    /// Grid with no cells; rendering against it is a no-op
    pub fn empty() -> Self {
        RayGrid {
            rows: 0,
            cols: 0,
            dirs: Vec::new(),
        }
    }

    /// Build the direction for every cell of a `rows x cols` terminal
    ///
    /// For cell `(row, col)`:
    /// `x = col + 0.5 - cols/2`, `y = row*stretch + 0.5 - rows*stretch/2`,
    /// `z = -rows / tan(fov/2)`, normalized. A 0x0 size yields an empty
    /// grid. The z component is non-zero whenever `rows > 0` and
    /// `0 < fov < 180`, so the normalize never sees a zero vector.
    pub fn new(rows: usize, cols: usize, fov: u32, stretch: f32) -> Self {
        let mut dirs = Vec::with_capacity(rows * cols);
        let half_fov = (fov as f32).to_radians() * 0.5;
        let z = -(rows as f32) / half_fov.tan();
        for row in 0..rows {
            let y = row as f32 * stretch + 0.5 - rows as f32 * stretch / 2.0;
            for col in 0..cols {
                let x = col as f32 + 0.5 - cols as f32 / 2.0;
                dirs.push(Vec3::new(x, y, z).normalize());
            }
        }
        RayGrid { rows, cols, dirs }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Direction for one cell, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Vec3> {
        if row < self.rows && col < self.cols {
            Some(self.dirs[row * self.cols + col])
        } else {
            None
        }
    }

    /// All directions of one row
    ///
    /// Panics if `row >= rows()`; the driver only calls it with row
    /// indices produced by iterating the frame buffer's rows.
    pub fn row(&self, row: usize) -> &[Vec3] {
        let start = row * self.cols;
        &self.dirs[start..start + self.cols]
    }
}

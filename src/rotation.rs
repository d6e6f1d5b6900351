//! Precomputed per-axis rotation tables
//!
//! All trigonometry happens once at startup: each axis gets a table of
//! rotation matrices covering its full cycle, and the per-frame
//! composite is three table lookups and two matrix products. Indexing
//! by `frame % len` makes the animation exactly periodic.
//!
//! Author: Moroya Sakamoto

use glam::Mat3;

/// One matrix table per axis, sized to that axis's rotation cycle
#[derive(Debug, Clone)]
pub struct RotationTable {
    pitch: Vec<Mat3>,
    yaw: Vec<Mat3>,
    roll: Vec<Mat3>,
}

impl RotationTable {
    /// Build the tables for `[pitch, yaw, roll]` in degrees per frame
    ///
    /// An axis spinning at `d > 0` degrees per frame gets `360 / d`
    /// entries (floored, never below 1); a frozen axis (`d == 0`) gets a
    /// single identity entry.
    pub fn new(spin: [u32; 3]) -> Self {
        RotationTable {
            pitch: build_axis(spin[0], Mat3::from_rotation_x),
            yaw: build_axis(spin[1], Mat3::from_rotation_y),
            roll: build_axis(spin[2], Mat3::from_rotation_z),
        }
    }

    /// Object rotation for a frame: roll applied to yaw applied to pitch
    pub fn composite(&self, frame: u64) -> Mat3 {
        let rx = self.pitch[(frame % self.pitch.len() as u64) as usize];
        let ry = self.yaw[(frame % self.yaw.len() as u64) as usize];
        let rz = self.roll[(frame % self.roll.len() as u64) as usize];
        rz * ry * rx
    }

    /// Frames until the composite rotation repeats exactly
    pub fn period(&self) -> u64 {
        let p = lcm(self.pitch.len() as u64, self.yaw.len() as u64);
        lcm(p, self.roll.len() as u64)
    }
}

fn build_axis(degrees_per_frame: u32, rotation: fn(f32) -> Mat3) -> Vec<Mat3> {
    let len = match degrees_per_frame {
        0 => 1,
        d => (360 / d).max(1),
    };
    (0..len)
        .map(|i| rotation(((degrees_per_frame * i) as f32).to_radians()))
        .collect()
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

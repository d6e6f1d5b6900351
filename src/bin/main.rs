//! ALICE-TERM CLI
//!
//! Flag parsing, palette selection and the run/report wrapper around
//! the frame driver. Press space to pause, q or Esc to quit.
//!
//! Author: Moroya Sakamoto

use alice_term::prelude::*;
use clap::{Parser, ValueEnum};
use crossterm::style::Color;

#[derive(Parser)]
#[command(name = "alice-term")]
#[command(author = "Moroya Sakamoto")]
#[command(version = alice_term::VERSION)]
// -V belongs to --repeat-y; version stays long-only
#[command(disable_version_flag = true)]
#[command(about = "ALICE-TERM: sphere-traced shapes in your terminal", long_about = None)]
struct Cli {
    /// Shape to render
    #[arg(short = 'g', long, value_enum, default_value_t = Shape::Cube)]
    geometry: Shape,

    /// Shape size: cube half extent, sphere radius, torus major radius,
    /// octahedron center-to-vertex
    #[arg(long, default_value_t = 1.0)]
    size: f32,

    /// Torus tube radius (torus only)
    #[arg(long, default_value_t = 0.5)]
    minor: f32,

    /// Repeat the scene every N units along x (0 = off)
    #[arg(short = 'H', long, default_value_t = 0.0)]
    repeat_x: f32,

    /// Repeat the scene every N units along y (0 = off)
    #[arg(short = 'V', long, default_value_t = 0.0)]
    repeat_y: f32,

    /// Repeat the scene every N units along z (0 = off)
    #[arg(long, default_value_t = 0.0)]
    repeat_z: f32,

    /// Camera drift per frame along x
    #[arg(short = 'm', long, default_value_t = 0.0)]
    move_x: f32,

    /// Camera drift per frame along y
    #[arg(short = 'M', long, default_value_t = 0.0)]
    move_y: f32,

    /// Camera distance up the z axis
    #[arg(short = 'C', long, default_value_t = 6.0)]
    camera: f32,

    /// Pitch in degrees per frame [default: random 0-5 when no axis is set]
    #[arg(short = 'P', long)]
    pitch: Option<u32>,

    /// Yaw in degrees per frame [default: random 0-5 when no axis is set]
    #[arg(short = 'Y', long)]
    yaw: Option<u32>,

    /// Roll in degrees per frame [default: random 0-5 when no axis is set]
    #[arg(short = 'R', long)]
    roll: Option<u32>,

    /// Target frames per second
    #[arg(short = 'f', long, default_value_t = 20)]
    fps: u32,

    /// Vertical field of view in degrees
    #[arg(short = 'F', long, default_value_t = 40)]
    fov: u32,

    /// Vertical stretch compensating for tall character cells
    #[arg(short = 's', long, default_value_t = 2.0)]
    stretch: f32,

    /// Raymarching step budget per ray
    #[arg(short = 'S', long, default_value_t = 32)]
    max_steps: u32,

    /// Intersection distance threshold
    #[arg(short = 'D', long, default_value_t = 1e-3)]
    threshold: f32,

    /// Color palette preset (0-4)
    #[arg(short = 'c', long, default_value_t = 0)]
    palette: u8,

    /// Glyph for the first color channel
    #[arg(short = '1', long, default_value_t = '█')]
    glyph1: char,

    /// Glyph for the second color channel
    #[arg(short = '2', long, default_value_t = '█')]
    glyph2: char,

    /// Glyph for the third color channel
    #[arg(short = '3', long, default_value_t = '█')]
    glyph3: char,

    /// Randomize view, tiling, drift and colors
    #[arg(short = 'r', long)]
    random: bool,

    /// Print version
    #[arg(long, action = clap::ArgAction::Version)]
    #[allow(dead_code)] // clap exits during parsing when this fires
    version: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Shape {
    Cube,
    Sphere,
    Torus,
    Octahedron,
}

fn main() {
    let mut cli = Cli::parse();

    let palette = if cli.random {
        randomize(&mut cli)
    } else {
        Palette::numbered(cli.palette)
    };

    // No rotation flag at all means a gentle random spin, as opposed to
    // explicitly freezing an axis with 0
    let spin = match (cli.pitch, cli.yaw, cli.roll) {
        (None, None, None) => [
            fastrand::u32(0..=5),
            fastrand::u32(0..=5),
            fastrand::u32(0..=5),
        ],
        (p, y, r) => [p.unwrap_or(0), y.unwrap_or(0), r.unwrap_or(0)],
    };

    let primitive = match cli.geometry {
        Shape::Cube => Primitive::Cube {
            half_extent: cli.size,
        },
        Shape::Sphere => Primitive::Sphere { radius: cli.size },
        Shape::Torus => Primitive::Torus {
            major_radius: cli.size,
            minor_radius: cli.minor,
        },
        Shape::Octahedron => Primitive::Octahedron { size: cli.size },
    };

    let config = SceneConfig {
        primitive,
        tile: Vec3::new(cli.repeat_x, cli.repeat_y, cli.repeat_z),
        spin,
        camera_distance: cli.camera,
        drift: Vec3::new(cli.move_x, cli.move_y, 0.0),
        fov: cli.fov,
        stretch: cli.stretch,
        epsilon: cli.threshold,
        max_steps: cli.max_steps,
        fps: cli.fps,
        glyphs: [cli.glyph1, cli.glyph2, cli.glyph3],
    };

    let mut driver = match Driver::new(config) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stats = {
        let mut term = match TermCanvas::new(palette) {
            Ok(term) => term,
            Err(e) => {
                eprintln!("Terminal error: {}", e);
                std::process::exit(1);
            }
        };
        let result = driver.run(&mut term);
        drop(term); // restore the shell before anything else prints
        match result {
            Ok(stats) => stats,
            Err(e) => {
                eprintln!("Render error: {}", e);
                std::process::exit(1);
            }
        }
    };

    println!(
        "{} frames in {:.1}s ({:.1} fps average)",
        stats.frames,
        stats.elapsed.as_secs_f64(),
        stats.average_fps()
    );
}

/// Apply the `-r` preset: random view and tiling, distinct random colors
fn randomize(cli: &mut Cli) -> Palette {
    cli.fov = fastrand::u32(40..=60);
    if fastrand::bool() {
        cli.repeat_x = 4.0 + fastrand::f32() * 2.0;
        cli.move_x = fastrand::f32() * 0.2 - 0.1;
    }
    if fastrand::bool() {
        cli.repeat_y = 4.0 + fastrand::f32() * 2.0;
        cli.move_y = fastrand::f32() * 0.2 - 0.1;
    }
    cli.camera = 4.0 + fastrand::f32() * 4.0;

    // Three distinct ANSI colors out of 1..=7
    let one = fastrand::u8(1..=7);
    let mut two = fastrand::u8(1..=7);
    while two == one {
        two = fastrand::u8(1..=7);
    }
    let mut three = fastrand::u8(1..=7);
    while three == one || three == two {
        three = fastrand::u8(1..=7);
    }
    Palette::new(
        [
            Color::AnsiValue(one),
            Color::AnsiValue(two),
            Color::AnsiValue(three),
        ],
        Color::Black,
    )
}

//! Sphere tracing against the active scene
//!
//! Author: Moroya Sakamoto

mod march;

pub use march::{march, Hit};

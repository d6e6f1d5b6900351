//! Domain modifiers applied to sample points before an estimator call
//!
//! Author: Moroya Sakamoto

mod repeat;

pub use repeat::{euclid_mod, tile};

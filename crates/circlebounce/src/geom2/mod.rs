//! 2D geometry core: vector arithmetic and the circle bounce.
//!
//! Purpose
//! - Provide the pure numeric kernel: given a ray and a circle, the near-side
//!   hit point and the outgoing direction.
//! - Keep it side-effect free and allocation free; drivers (`chain`, `sweep`)
//!   compose it.
//!
//! Code cross-refs: `vec`, `Circle`, `Ray`, `Bounce`, `Miss`, `solve`

mod bounce;
mod types;
pub mod vec;

pub use bounce::{intersect, intersect_or_undefined, solve};
pub use types::{Bounce, Circle, Miss, Ray};

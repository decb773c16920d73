//! Ray bounces off chains of circles in the plane.
//!
//! A ray (point + direction) hits an ordered list of circles. For each circle
//! the near-side intersection and an outgoing direction are computed; that pair
//! is the incoming ray for the next circle.
//!
//! Layout
//! - `geom2`: pure numeric kernel (`vec` arithmetic, `solve`/`intersect`).
//! - `chain`: threads one ray through a list of circles.
//! - `sweep`: many rays from one origin, evenly spaced in angle (parallel).
//! - `scene`: validated origin + circles, reference layout, random scenes.
//!
//! Misses are values (`Miss`, `Option`, or the NaN sentinel pair), never panics.

pub mod chain;
pub mod geom2;
pub mod scene;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{intersect, intersect_or_undefined, solve, Bounce, Circle, Miss, Ray};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::chain::{trace_chain, Chain, Stage};
    pub use crate::geom2::{intersect, intersect_or_undefined, solve, vec, Bounce, Circle, Miss, Ray};
    pub use crate::scene::rand::{draw_scene, RandomSceneCfg, ReplayToken};
    pub use crate::scene::{Scene, SceneError};
    pub use crate::sweep::{rescale, sample_angles, sweep, Sample, SweepCfg, SweepSummary};
    pub use nalgebra::Vector2 as Vec2;
}

//! Validated scenes: one ray origin plus an ordered list of circles.
//!
//! Purpose
//! - Enforce the bounce preconditions once, at the boundary (finite origin,
//!   finite centers, finite radius > 0), so drivers can trace without checks.
//! - Carry the reference layout and a reproducible random sampler (`rand`).
//!
//! Code cross-refs: `chain::trace_chain`, `sweep::sweep`, `rand::draw_scene`

pub mod rand;

use std::fmt;

use nalgebra::{vector, Vector2};

use crate::chain::{trace_chain, Chain};
use crate::geom2::{Circle, Ray};
use crate::sweep::{sweep, Sample, SweepCfg};

/// Errors surfaced while building or sampling scenes.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    NonFiniteOrigin,
    InvalidCircle { index: usize, reason: String },
    InvalidParams { reason: String },
    Degenerate { reason: String },
}

impl SceneError {
    fn circle(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidCircle {
            index,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteOrigin => write!(f, "scene origin must be finite"),
            Self::InvalidCircle { index, reason } => write!(f, "circle {index}: {reason}"),
            Self::InvalidParams { reason } => write!(f, "invalid scene params: {reason}"),
            Self::Degenerate { reason } => write!(f, "degenerate scene: {reason}"),
        }
    }
}

impl std::error::Error for SceneError {}

/// Ray origin plus circles, in bounce order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    origin: Vector2<f64>,
    circles: Vec<Circle>,
}

impl Scene {
    pub fn new(origin: Vector2<f64>, circles: Vec<Circle>) -> Result<Self, SceneError> {
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(SceneError::NonFiniteOrigin);
        }
        for (i, c) in circles.iter().enumerate() {
            if !(c.center.x.is_finite() && c.center.y.is_finite()) {
                return Err(SceneError::circle(i, "center must be finite"));
            }
            if !c.radius.is_finite() {
                return Err(SceneError::circle(i, "radius must be finite"));
            }
            if c.radius <= 0.0 {
                return Err(SceneError::circle(i, "radius must be > 0"));
            }
        }
        Ok(Self { origin, circles })
    }

    /// Origin (2.7, 0.7) with three circles: a large one up and to the right,
    /// then two small ones further up.
    pub fn reference() -> Self {
        Self {
            origin: vector![2.7, 0.7],
            circles: vec![
                Circle::new(vector![4.0, 2.0], 0.7),
                Circle::new(vector![1.0, 3.4], 0.3),
                Circle::new(vector![4.0, 4.5], 0.3),
            ],
        }
    }

    #[inline]
    pub fn origin(&self) -> Vector2<f64> {
        self.origin
    }

    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Chain of the unit ray leaving the origin at `angle`.
    pub fn trace(&self, angle: f64) -> Chain {
        trace_chain(Ray::from_polar(self.origin, angle), &self.circles)
    }

    pub fn sweep(&self, cfg: SweepCfg) -> Vec<Sample> {
        sweep(self.origin, &self.circles, cfg)
    }
}

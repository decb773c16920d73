//! Value types for the bounce computation.
//!
//! - `Circle`: center + strictly positive radius (caller precondition).
//! - `Ray`: origin + direction, `r(t) = origin + t·direction`.
//! - `Bounce`: hit point + outgoing direction, convertible into the next `Ray`.
//! - `Miss`: why a circle produced no bounce.
//!
//! Code cross-refs: `bounce::solve`, `chain::trace_chain`

use std::fmt;

use nalgebra::Vector2;

use super::vec;

/// Circle with `center` and `radius > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }
    /// Signed distance `|p − c| − r` (negative inside).
    #[inline]
    pub fn boundary_offset(&self, p: Vector2<f64>) -> f64 {
        vec::length(vec::sub(p, self.center)) - self.radius
    }
    #[inline]
    pub fn on_boundary_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.boundary_offset(p).abs() <= eps
    }
    #[inline]
    pub fn contains_strict(&self, p: Vector2<f64>) -> bool {
        self.boundary_offset(p) < 0.0
    }
}

/// Ray `origin + t·direction`. The direction need not be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector2<f64>,
    pub direction: Vector2<f64>,
}

impl Ray {
    #[inline]
    pub fn new(origin: Vector2<f64>, direction: Vector2<f64>) -> Self {
        Self { origin, direction }
    }
    /// Unit-direction ray leaving `origin` at `angle` (radians, CCW from +x).
    #[inline]
    pub fn from_polar(origin: Vector2<f64>, angle: f64) -> Self {
        Self {
            origin,
            direction: vec::from_polar(angle, 1.0),
        }
    }
    /// The sentinel ray carried through a chain after a miss.
    #[inline]
    pub fn undefined() -> Self {
        Self {
            origin: vec::undefined(),
            direction: vec::undefined(),
        }
    }
    #[inline]
    pub fn is_undefined(&self) -> bool {
        vec::is_undefined(self.origin) || vec::is_undefined(self.direction)
    }
    #[inline]
    pub fn at(&self, t: f64) -> Vector2<f64> {
        let mut p = vec::clone(self.origin);
        vec::fused_multiply_add(&mut p, t, self.direction);
        p
    }
}

/// Hit point on a circle and the direction leaving it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounce {
    pub point: Vector2<f64>,
    pub direction: Vector2<f64>,
}

impl Bounce {
    /// The outgoing ray, i.e. the input for the next circle.
    #[inline]
    pub fn ray(&self) -> Ray {
        Ray::new(self.point, self.direction)
    }
    /// Tip of the outgoing direction drawn from the hit point (`P + D`).
    #[inline]
    pub fn direction_tip(&self) -> Vector2<f64> {
        vec::add(self.point, self.direction)
    }
}

/// Reason a circle produced no bounce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Miss {
    /// `direction · (origin − center) > 0`: the ray is not approaching the circle.
    Receding,
    /// Negative discriminant: the supporting line misses the circle.
    Disjoint,
    /// Non-finite input or output (e.g. a sentinel ray from an earlier miss).
    Undefined,
}

impl Miss {
    pub fn as_str(&self) -> &'static str {
        match self {
            Miss::Receding => "receding",
            Miss::Disjoint => "disjoint",
            Miss::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Near-side ray/circle intersection and the outgoing direction.
//!
//! Model
//! - With `R = origin − c` and `s = d·R`, the line `origin + t·d` meets the
//!   circle where `t = −s ± q`, `q² = r² − R·R + s²` (exact for unit `d`).
//!   Only the near root `t = −s − q` is used, and only for rays that are not
//!   receding (`s ≤ 0`).
//! - Outgoing direction `D = d + (2q / r²)·(P − c)`. For unit `d` we have
//!   `d·(P − c) = −q`, so this is the mirror reflection about the normal at
//!   `P`. For non-unit `d` it is not, and the magnitude drifts; the formula is
//!   kept as is so chained outputs stay bit-identical.
//!
//! Failure policy
//! - Misses are values: `Result<Bounce, Miss>`, `Option<Bounce>`, or the NaN
//!   sentinel pair. The discriminant sign is checked before `sqrt`.
//! - `radius > 0` is a caller precondition; `radius == 0` divides by zero and
//!   yields `Miss::Undefined` or non-finite geometry, never a panic.
//!
//! Code cross-refs: `vec`, `types::{Circle,Ray,Bounce,Miss}`, `chain::trace_chain`

use nalgebra::Vector2;

use super::types::{Bounce, Circle, Miss, Ray};
use super::vec;

/// Tagged bounce: the hit, or why there is none.
pub fn solve(
    origin: Vector2<f64>,
    direction: Vector2<f64>,
    center: Vector2<f64>,
    radius: f64,
) -> Result<Bounce, Miss> {
    let offset = vec::sub(origin, center);
    let closing = vec::dot(direction, offset);
    if closing > 0.0 {
        return Err(Miss::Receding);
    }
    let q2 = radius * radius - vec::dot(offset, offset) + closing * closing;
    if q2.is_nan() {
        return Err(Miss::Undefined);
    }
    if q2 < 0.0 {
        return Err(Miss::Disjoint);
    }
    let q = q2.sqrt();

    let mut point = vec::clone(origin);
    vec::fused_multiply_add(&mut point, -closing - q, direction);

    let radial = vec::sub(point, center);
    let mut outgoing = vec::clone(direction);
    vec::fused_multiply_add(&mut outgoing, 2.0 * q / (radius * radius), radial);

    if !(is_finite(point) && is_finite(outgoing)) {
        return Err(Miss::Undefined);
    }
    Ok(Bounce {
        point,
        direction: outgoing,
    })
}

/// Near-side hit point and outgoing direction, or `None` on a miss.
#[inline]
pub fn intersect(
    origin: Vector2<f64>,
    direction: Vector2<f64>,
    center: Vector2<f64>,
    radius: f64,
) -> Option<Bounce> {
    solve(origin, direction, center, radius).ok()
}

/// Sentinel form of [`intersect`]: `(P, D)` or `(undefined(), undefined())`.
///
/// Both outputs are finite or both are the sentinel. Sentinel inputs are
/// accepted and produce the sentinel.
pub fn intersect_or_undefined(
    origin: Vector2<f64>,
    direction: Vector2<f64>,
    center: Vector2<f64>,
    radius: f64,
) -> (Vector2<f64>, Vector2<f64>) {
    match solve(origin, direction, center, radius) {
        Ok(b) => (b.point, b.direction),
        Err(_) => (vec::undefined(), vec::undefined()),
    }
}

impl Circle {
    /// Bounce `ray` off this circle.
    #[inline]
    pub fn bounce(&self, ray: &Ray) -> Result<Bounce, Miss> {
        solve(ray.origin, ray.direction, self.center, self.radius)
    }
}

#[inline]
fn is_finite(v: Vector2<f64>) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

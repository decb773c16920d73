//! Plain 2D vector arithmetic over `Vector2<f64>`.
//!
//! Purpose
//! - Give the bounce code a small, explicit vocabulary (`dot`, `sub`,
//!   `fused_multiply_add`, ...) whose evaluation order is pinned down, so the
//!   bounce outputs are reproducible bit for bit.
//!
//! Conventions
//! - Everything is by value (`Vector2<f64>` is `Copy`). The two in-place
//!   operations (`copy`, `fused_multiply_add`) take `&mut` and touch nothing
//!   else.
//! - No guards: zero-length normalization and friends produce non-finite
//!   components and rely on IEEE-754 propagation.
//!
//! Code cross-refs: `bounce::{solve,intersect}`, `types::Ray::from_polar`

use nalgebra::Vector2;

/// (0, 0).
#[inline]
pub fn zero() -> Vector2<f64> {
    Vector2::zeros()
}

/// The "no result" sentinel: both components NaN.
#[inline]
pub fn undefined() -> Vector2<f64> {
    Vector2::new(f64::NAN, f64::NAN)
}

/// True if any component is NaN (the sentinel, or something derived from it).
#[inline]
pub fn is_undefined(a: Vector2<f64>) -> bool {
    a.x.is_nan() || a.y.is_nan()
}

#[inline]
pub fn copy(dst: &mut Vector2<f64>, src: Vector2<f64>) {
    dst.x = src.x;
    dst.y = src.y;
}

#[inline]
pub fn clone(src: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(src.x, src.y)
}

#[inline]
pub fn add(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn sub(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(a.x - b.x, a.y - b.y)
}

/// `f · a`.
#[inline]
pub fn scale(f: f64, a: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(f * a.x, f * a.y)
}

/// Accumulate `dst += f · a`.
///
/// Evaluated as `dst + (f * a)` per component, never as a hardware FMA, so the
/// rounding matches the two-step form.
#[inline]
pub fn fused_multiply_add(dst: &mut Vector2<f64>, f: f64, a: Vector2<f64>) {
    dst.x += f * a.x;
    dst.y += f * a.y;
}

/// `a.x*b.x + a.y*b.y`, in that order.
#[inline]
pub fn dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.x + a.y * b.y
}

#[inline]
pub fn length(a: Vector2<f64>) -> f64 {
    dot(a, a).sqrt()
}

/// `a / |a|`, computed as a multiplication by the reciprocal length.
/// Pre: `|a| > 0`; a zero vector yields non-finite components.
#[inline]
pub fn normalize(a: Vector2<f64>) -> Vector2<f64> {
    scale(1.0 / length(a), a)
}

/// `(radius·cos(angle), radius·sin(angle))`.
#[inline]
pub fn from_polar(angle: f64, radius: f64) -> Vector2<f64> {
    Vector2::new(radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn basic_arithmetic() {
        let a = vector![1.5, -2.0];
        let b = vector![0.25, 4.0];
        assert_eq!(add(a, b), vector![1.75, 2.0]);
        assert_eq!(sub(a, b), vector![1.25, -6.0]);
        assert_eq!(scale(2.0, a), vector![3.0, -4.0]);
        assert!((dot(a, b) - (0.375 - 8.0)).abs() < 1e-15);
        assert!((length(vector![3.0, 4.0]) - 5.0).abs() < 1e-15);
        assert_eq!(zero(), vector![0.0, 0.0]);
    }

    #[test]
    fn copy_and_clone_are_componentwise() {
        let src = vector![7.0, -3.0];
        let mut dst = zero();
        copy(&mut dst, src);
        assert_eq!(dst, src);
        let c = clone(src);
        assert_eq!(c, src);
    }

    #[test]
    fn fused_multiply_add_accumulates_into_existing_value() {
        let mut acc = vector![1.0, 1.0];
        fused_multiply_add(&mut acc, 2.0, vector![0.5, -1.0]);
        assert_eq!(acc, vector![2.0, -1.0]);
        fused_multiply_add(&mut acc, -1.0, vector![2.0, -1.0]);
        assert_eq!(acc, zero());
    }

    #[test]
    fn undefined_is_detected_and_propagates() {
        let u = undefined();
        assert!(is_undefined(u));
        assert!(!is_undefined(zero()));
        assert!(is_undefined(add(u, vector![1.0, 2.0])));
        assert!(dot(u, vector![1.0, 0.0]).is_nan());
    }

    #[test]
    fn normalize_zero_is_non_finite() {
        let n = normalize(zero());
        assert!(!n.x.is_finite() && !n.y.is_finite());
    }

    #[test]
    fn from_polar_axes() {
        assert_eq!(from_polar(0.0, 2.5), vector![2.5, 0.0]);
        let up = from_polar(FRAC_PI_2, 1.0);
        assert!(up.x.abs() < 1e-15 && (up.y - 1.0).abs() < 1e-15);
        let left = from_polar(PI, 3.0);
        assert!((left.x + 3.0).abs() < 1e-15 && left.y.abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn normalize_has_unit_length(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            prop_assume!(x.abs() > 1e-9 || y.abs() > 1e-9);
            let n = normalize(vector![x, y]);
            prop_assert!((length(n) - 1.0).abs() < 1e-12);
        }

        #[test]
        fn from_polar_has_requested_length(angle in -10.0f64..10.0, r in 0.0f64..1e3) {
            let v = from_polar(angle, r);
            prop_assert!((length(v) - r).abs() <= 1e-12 * r.max(1.0));
        }

        #[test]
        fn dot_is_symmetric(ax in -1e3f64..1e3, ay in -1e3f64..1e3, bx in -1e3f64..1e3, by in -1e3f64..1e3) {
            let a = vector![ax, ay];
            let b = vector![bx, by];
            prop_assert_eq!(dot(a, b), dot(b, a));
        }
    }
}

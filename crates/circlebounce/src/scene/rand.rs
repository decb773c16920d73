//! Random circle scenes (rejection sampling + replay tokens).
//!
//! Model
//! - Origin at (0, 0). Each circle draws a radius in `[radius_min, radius_max]`
//!   and a center in `[-extent, extent]²`, and is kept only if it stays at
//!   least `clearance` away from the origin and is disjoint from every circle
//!   kept so far. The draw fails after `max_attempts` rejections in total.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so scene `k` of a stream can be regenerated without replaying `0..k`.
//!
//! Code cross-refs: `Scene::new`, `SceneError`

use nalgebra::{vector, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Scene, SceneError};
use crate::geom2::{vec, Circle};

/// Random scene configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomSceneCfg {
    pub circles: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Half side length of the square that holds the centers.
    pub extent: f64,
    /// Minimum gap between the origin and any circle boundary.
    pub clearance: f64,
    pub max_attempts: usize,
}

impl Default for RandomSceneCfg {
    fn default() -> Self {
        Self {
            circles: 3,
            radius_min: 0.2,
            radius_max: 0.8,
            extent: 5.0,
            clearance: 0.1,
            max_attempts: 10_000,
        }
    }
}

impl RandomSceneCfg {
    fn validate(&self) -> Result<(), SceneError> {
        let finite = [self.radius_min, self.radius_max, self.extent, self.clearance]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(SceneError::invalid("bounds must be finite"));
        }
        if self.radius_min <= 0.0 {
            return Err(SceneError::invalid("radius_min must be > 0"));
        }
        if self.radius_min > self.radius_max {
            return Err(SceneError::invalid("radius_min <= radius_max required"));
        }
        if self.extent <= 0.0 {
            return Err(SceneError::invalid("extent must be > 0"));
        }
        if self.clearance < 0.0 {
            return Err(SceneError::invalid("clearance must be >= 0"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random scene for `tok`.
pub fn draw_scene(cfg: RandomSceneCfg, tok: ReplayToken) -> Result<Scene, SceneError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let origin = vec::zero();
    let mut circles: Vec<Circle> = Vec::with_capacity(cfg.circles);
    let mut attempts = 0usize;
    while circles.len() < cfg.circles {
        if attempts >= cfg.max_attempts {
            return Err(SceneError::degenerate(format!(
                "placed {} of {} circles in {} attempts",
                circles.len(),
                cfg.circles,
                attempts
            )));
        }
        attempts += 1;
        let radius = rng.gen_range(cfg.radius_min..=cfg.radius_max);
        let center: Vector2<f64> = vector![
            rng.gen_range(-cfg.extent..=cfg.extent),
            rng.gen_range(-cfg.extent..=cfg.extent)
        ];
        let candidate = Circle::new(center, radius);
        if candidate.boundary_offset(origin) < cfg.clearance {
            continue;
        }
        let overlaps = circles
            .iter()
            .any(|c| vec::length(vec::sub(c.center, center)) <= c.radius + radius);
        if overlaps {
            continue;
        }
        circles.push(candidate);
    }
    Scene::new(origin, circles)
}

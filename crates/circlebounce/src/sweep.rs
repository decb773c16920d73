//! Angular sweep: many chains from one origin, evenly spaced in angle.
//!
//! Model
//! - Sample `i` of `n` uses `t = i/(n−1)` mapped onto `[angle_start, angle_end]`
//!   by `rescale`; both ends are included. `n == 1` yields `angle_start`.
//! - Every sample is independent, so chains are traced in parallel with rayon
//!   and collected back in sample order.
//!
//! Code cross-refs: `chain::trace_chain`, `scene::Scene::sweep`

use nalgebra::Vector2;
use rayon::prelude::*;

use crate::chain::{trace_chain, Chain};
use crate::geom2::{Circle, Ray};

/// Sweep configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepCfg {
    pub samples: usize,
    pub angle_start: f64,
    pub angle_end: f64,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            samples: 50_000,
            angle_start: 0.0,
            angle_end: std::f64::consts::TAU,
        }
    }
}

impl SweepCfg {
    /// Angle of sample `i`.
    #[inline]
    pub fn angle(&self, i: usize) -> f64 {
        if self.samples <= 1 {
            return self.angle_start;
        }
        let t = i as f64 / (self.samples - 1) as f64;
        rescale(0.0, 1.0, self.angle_start, self.angle_end, t)
    }
}

/// Affine map of `x` from `[a0, a1]` onto `[b0, b1]`.
#[inline]
pub fn rescale(a0: f64, a1: f64, b0: f64, b1: f64, x: f64) -> f64 {
    b0 + (x - a0) / (a1 - a0) * (b1 - b0)
}

pub fn sample_angles(cfg: SweepCfg) -> impl ExactSizeIterator<Item = f64> {
    (0..cfg.samples).map(move |i| cfg.angle(i))
}

/// One traced sample of a sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub index: usize,
    pub angle: f64,
    pub chain: Chain,
}

/// Trace one unit-direction ray per sample angle through `circles`.
pub fn sweep(origin: Vector2<f64>, circles: &[Circle], cfg: SweepCfg) -> Vec<Sample> {
    (0..cfg.samples)
        .into_par_iter()
        .map(|index| {
            let angle = cfg.angle(index);
            Sample {
                index,
                angle,
                chain: trace_chain(Ray::from_polar(origin, angle), circles),
            }
        })
        .collect()
}

/// Hit counts of a sweep.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub samples: usize,
    /// `hits_per_stage[k]`: samples whose chain hit circle `k`.
    pub hits_per_stage: Vec<usize>,
    /// Samples that hit every circle.
    pub complete: usize,
}

impl SweepSummary {
    pub fn from_samples(samples: &[Sample]) -> Self {
        let stages = samples.iter().map(|s| s.chain.stages.len()).max().unwrap_or(0);
        let mut hits_per_stage = vec![0usize; stages];
        let mut complete = 0;
        for s in samples {
            for stage in &s.chain.stages {
                if stage.is_hit() {
                    hits_per_stage[stage.circle] += 1;
                }
            }
            if s.chain.is_complete() {
                complete += 1;
            }
        }
        Self {
            samples: samples.len(),
            hits_per_stage,
            complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::vec;
    use nalgebra::vector;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn rescale_maps_endpoints_and_midpoint() {
        assert_eq!(rescale(0.0, 1.0, 0.0, TAU, 0.0), 0.0);
        assert_eq!(rescale(0.0, 1.0, 0.0, TAU, 1.0), TAU);
        assert!((rescale(0.0, 1.0, 0.0, TAU, 0.5) - PI).abs() < 1e-15);
        assert_eq!(rescale(2.0, 4.0, 10.0, 20.0, 3.0), 15.0);
    }

    #[test]
    fn angles_include_both_ends() {
        let cfg = SweepCfg {
            samples: 5,
            angle_start: 0.0,
            angle_end: 2.0,
        };
        let angles: Vec<f64> = sample_angles(cfg).collect();
        assert_eq!(angles, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn degenerate_sample_counts() {
        let one = SweepCfg {
            samples: 1,
            angle_start: 0.25,
            angle_end: 3.0,
        };
        assert_eq!(sample_angles(one).collect::<Vec<_>>(), vec![0.25]);
        let none = SweepCfg {
            samples: 0,
            ..SweepCfg::default()
        };
        assert_eq!(sample_angles(none).len(), 0);
        assert!(sweep(vec::zero(), &[], none).is_empty());
    }

    #[test]
    fn default_matches_full_turn() {
        let cfg = SweepCfg::default();
        assert_eq!(cfg.samples, 50_000);
        assert_eq!(cfg.angle(0), 0.0);
        assert_eq!(cfg.angle(cfg.samples - 1), TAU);
    }

    #[test]
    fn sweep_is_ordered_and_matches_sequential_tracing() {
        let circles = [
            Circle::new(vector![4.0, 2.0], 0.7),
            Circle::new(vector![1.0, 3.4], 0.3),
        ];
        let origin = vector![2.7, 0.7];
        let cfg = SweepCfg {
            samples: 257,
            ..SweepCfg::default()
        };
        let out = sweep(origin, &circles, cfg);
        assert_eq!(out.len(), 257);
        for (i, s) in out.iter().enumerate() {
            assert_eq!(s.index, i);
            assert_eq!(s.angle, cfg.angle(i));
            assert_eq!(s.chain, trace_chain(Ray::from_polar(origin, s.angle), &circles));
        }
    }

    #[test]
    fn summary_counts_hits_per_stage() {
        // A circle to the right of the origin: only rays pointing right can hit.
        let circles = [Circle::new(vector![5.0, 0.0], 1.0)];
        let cfg = SweepCfg {
            samples: 4,
            angle_start: 0.0,
            angle_end: 1.5 * PI,
        };
        // angles: 0, π/2, π, 3π/2
        let out = sweep(vec::zero(), &circles, cfg);
        let summary = SweepSummary::from_samples(&out);
        assert_eq!(summary.samples, 4);
        assert_eq!(summary.hits_per_stage, vec![1]);
        assert_eq!(summary.complete, 1);
    }
}

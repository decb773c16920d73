//! Bounce chains: one ray threaded through an ordered list of circles.
//!
//! Purpose
//! - Drive `geom2::solve` once per circle, feeding each bounce's outgoing
//!   ray into the next circle.
//!
//! Miss policy
//! - After a miss, the carried ray becomes `Ray::undefined()` and is still fed
//!   to every remaining circle. Those stages come back as `Miss::Undefined`,
//!   so a chain always has exactly one stage per circle and never panics.
//!
//! Code cross-refs: `geom2::{solve,Circle,Ray,Bounce,Miss}`, `sweep::sweep`

use nalgebra::Vector2;

use crate::geom2::{Bounce, Circle, Miss, Ray};

/// Outcome of one circle in a chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stage {
    /// Index of the circle in the input slice.
    pub circle: usize,
    pub outcome: Result<Bounce, Miss>,
}

impl Stage {
    #[inline]
    pub fn bounce(&self) -> Option<&Bounce> {
        self.outcome.as_ref().ok()
    }
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// A traced chain: the starting ray and one stage per circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    pub start: Ray,
    pub stages: Vec<Stage>,
}

impl Chain {
    /// Number of leading stages that hit (misses poison everything after them).
    pub fn hits(&self) -> usize {
        self.stages.iter().take_while(|s| s.is_hit()).count()
    }
    pub fn first_miss(&self) -> Option<(usize, Miss)> {
        self.stages
            .iter()
            .find_map(|s| s.outcome.err().map(|m| (s.circle, m)))
    }
    pub fn is_complete(&self) -> bool {
        self.stages.iter().all(Stage::is_hit)
    }
    /// The ray leaving the last stage, or the start ray for an empty chain.
    /// `Ray::undefined()` if any stage missed.
    pub fn last_ray(&self) -> Ray {
        match self.stages.last() {
            None => self.start,
            Some(s) => s.bounce().map_or_else(Ray::undefined, Bounce::ray),
        }
    }
    /// Polyline of the path: start origin, then every hit point in order.
    pub fn path(&self) -> Vec<Vector2<f64>> {
        let mut pts = Vec::with_capacity(self.stages.len() + 1);
        pts.push(self.start.origin);
        pts.extend(self.stages.iter().map_while(|s| s.bounce().map(|b| b.point)));
        pts
    }
}

/// Trace `start` through `circles` in order.
pub fn trace_chain(start: Ray, circles: &[Circle]) -> Chain {
    let mut ray = start;
    let mut stages = Vec::with_capacity(circles.len());
    for (i, circle) in circles.iter().enumerate() {
        let outcome = circle.bounce(&ray);
        ray = match &outcome {
            Ok(b) => b.ray(),
            Err(_) => Ray::undefined(),
        };
        stages.push(Stage {
            circle: i,
            outcome,
        });
    }
    Chain { start, stages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::vec;
    use nalgebra::vector;

    fn reference_circles() -> Vec<Circle> {
        vec![
            Circle::new(vector![4.0, 2.0], 0.7),
            Circle::new(vector![1.0, 3.4], 0.3),
            Circle::new(vector![4.0, 4.5], 0.3),
        ]
    }

    #[test]
    fn first_miss_poisons_the_rest_without_panicking() {
        let start = Ray::from_polar(vector![2.7, 0.7], 0.0);
        let chain = trace_chain(start, &reference_circles());
        assert_eq!(chain.stages.len(), 3);
        assert_eq!(chain.stages[0].outcome, Err(Miss::Disjoint));
        assert_eq!(chain.stages[1].outcome, Err(Miss::Undefined));
        assert_eq!(chain.stages[2].outcome, Err(Miss::Undefined));
        assert_eq!(chain.hits(), 0);
        assert_eq!(chain.first_miss(), Some((0, Miss::Disjoint)));
        assert!(chain.last_ray().is_undefined());
        assert_eq!(chain.path(), vec![vector![2.7, 0.7]]);
    }

    #[test]
    fn stages_thread_previous_output() {
        // Aim straight at the first circle's center.
        let origin = vector![2.7, 0.7];
        let dir = vec::normalize(vec::sub(vector![4.0, 2.0], origin));
        let circles = reference_circles();
        let chain = trace_chain(Ray::new(origin, dir), &circles);
        let first = *chain.stages[0].bounce().expect("aimed at center");
        // Head-on: reflected straight back.
        assert!(vec::length(vec::add(first.direction, dir)) < 1e-12);
        let expected_second = circles[1].bounce(&first.ray());
        assert_eq!(chain.stages[1].outcome, expected_second);
    }

    #[test]
    fn complete_chain_through_two_circles() {
        // Hit circle A head-on from the left, bounce back into circle B.
        let circles = [
            Circle::new(vector![5.0, 0.0], 1.0),
            Circle::new(vector![-5.0, 0.0], 1.0),
        ];
        let chain = trace_chain(Ray::new(vector![0.0, 0.0], vector![1.0, 0.0]), &circles);
        assert!(chain.is_complete());
        assert_eq!(chain.hits(), 2);
        assert_eq!(chain.first_miss(), None);
        assert_eq!(
            chain.path(),
            vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![-4.0, 0.0]]
        );
        assert_eq!(chain.last_ray().direction, vector![1.0, 0.0]);
    }

    #[test]
    fn empty_circle_list_keeps_start() {
        let start = Ray::from_polar(vector![1.0, 1.0], 0.3);
        let chain = trace_chain(start, &[]);
        assert!(chain.stages.is_empty());
        assert!(chain.is_complete());
        assert_eq!(chain.last_ray(), start);
    }
}

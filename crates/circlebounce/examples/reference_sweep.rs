//! Sweep the reference scene and print how many rays survive each circle.
//!
//! Run with `cargo run -p circlebounce --example reference_sweep --release`.

use std::time::Instant;

use circlebounce::prelude::*;

fn main() {
    let scene = Scene::reference();
    let cfg = SweepCfg::default();

    let start = Instant::now();
    let samples = scene.sweep(cfg);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    let summary = SweepSummary::from_samples(&samples);
    println!("samples={} complete={}", summary.samples, summary.complete);
    for (k, hits) in summary.hits_per_stage.iter().enumerate() {
        let c = scene.circles()[k];
        println!(
            "stage={k} center=({:.2},{:.2}) radius={:.2} hits={hits}",
            c.center.x, c.center.y, c.radius
        );
    }
    if let Some(s) = samples.iter().find(|s| s.chain.is_complete()) {
        let path: Vec<String> = s
            .chain
            .path()
            .iter()
            .map(|p| format!("({:.4},{:.4})", p.x, p.y))
            .collect();
        println!("first complete angle={:.6} path={}", s.angle, path.join(" -> "));
    }
    println!("sweep_time_ms={elapsed_ms:.3}");
}

mod output;
mod provenance;
mod scene_file;

use std::path::PathBuf;

use anyhow::Result;
use circlebounce::scene::rand::{draw_scene, RandomSceneCfg, ReplayToken};
use circlebounce::sweep::{SweepCfg, SweepSummary};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Trace rays through chains of circles and dump the results")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    /// Log at DEBUG level
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Trace a single ray and print its chain as JSON
    Trace {
        /// Scene JSON (defaults to the reference scene)
        #[arg(long)]
        scene: Option<PathBuf>,
        /// Launch angle in radians, CCW from +x
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
    },
    /// Sweep evenly spaced angles and write a per-stage table (.csv or .parquet)
    Sweep {
        #[arg(long)]
        scene: Option<PathBuf>,
        #[arg(long, default_value_t = SweepCfg::default().samples)]
        samples: usize,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        start: f64,
        #[arg(long, default_value_t = std::f64::consts::TAU, allow_hyphen_values = true)]
        end: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Draw a random scene and write it as JSON
    Scene {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = RandomSceneCfg::default().circles)]
        circles: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Trace { scene, angle } => trace(scene, angle),
        Action::Sweep {
            scene,
            samples,
            start,
            end,
            out,
        } => {
            let cfg = SweepCfg {
                samples,
                angle_start: start,
                angle_end: end,
            };
            sweep(scene, cfg, out, cmd.tag)
        }
        Action::Scene {
            seed,
            index,
            circles,
            out,
        } => scene(seed, index, circles, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn trace(scene: Option<PathBuf>, angle: f64) -> Result<()> {
    tracing::debug!(scene = ?scene, angle, "trace");
    let scene = scene_file::load_scene(scene.as_deref())?;
    let chain = scene.trace(angle);
    if let Some((circle, miss)) = chain.first_miss() {
        tracing::debug!(circle, %miss, "chain_stopped");
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&output::chain_json(angle, &chain))?
    );
    Ok(())
}

fn sweep(scene_path: Option<PathBuf>, cfg: SweepCfg, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(scene = ?scene_path, samples = cfg.samples, out = %out.display(), tag = ?tag, "sweep");
    let scene = scene_file::load_scene(scene_path.as_deref())?;
    let samples = scene.sweep(cfg);
    let summary = SweepSummary::from_samples(&samples);
    tracing::info!(
        samples = summary.samples,
        complete = summary.complete,
        hits_per_stage = ?summary.hits_per_stage,
        "sweep_summary"
    );

    let mut df = output::sweep_frame(&samples)?;
    output::write_table(&mut df, &out)?;
    tracing::info!(rows = df.height(), cols = df.width(), "sweep_table_written");

    let params = serde_json::json!({
        "scene": scene_path.map(|p| p.to_string_lossy().into_owned()),
        "samples": cfg.samples,
        "angle_start": cfg.angle_start,
        "angle_end": cfg.angle_end,
        "hits_per_stage": summary.hits_per_stage,
        "complete": summary.complete,
    });
    let prov = write_sidecar(&out, Payload::new(params).with_tag(tag))?;
    tracing::debug!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

fn scene(seed: u64, index: u64, circles: usize, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(seed, index, circles, out = %out.display(), tag = ?tag, "scene");
    let cfg = RandomSceneCfg {
        circles,
        ..RandomSceneCfg::default()
    };
    let drawn = draw_scene(cfg, ReplayToken { seed, index })?;
    scene_file::write_scene(&out, &drawn)?;

    let params = serde_json::json!({
        "seed": seed,
        "index": index,
        "circles": cfg.circles,
        "radius_min": cfg.radius_min,
        "radius_max": cfg.radius_max,
        "extent": cfg.extent,
        "clearance": cfg.clearance,
    });
    write_sidecar(&out, Payload::new(params).with_tag(tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": circlebounce::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

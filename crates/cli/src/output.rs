//! Serialized views of chains and sweeps (JSON for one chain, tables for sweeps).

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use circlebounce::chain::Chain;
use circlebounce::sweep::Sample;
use circlebounce::Vec2;
use polars::prelude::*;
use serde_json::{json, Value};

fn point(v: Vec2<f64>) -> Value {
    json!([v.x, v.y])
}

/// JSON view of a chain; misses carry `null` geometry and the miss reason.
pub fn chain_json(angle: f64, chain: &Chain) -> Value {
    let stages: Vec<Value> = chain
        .stages
        .iter()
        .map(|s| match s.outcome {
            Ok(b) => json!({
                "circle": s.circle,
                "hit": true,
                "miss": null,
                "point": point(b.point),
                "direction": point(b.direction),
            }),
            Err(m) => json!({
                "circle": s.circle,
                "hit": false,
                "miss": m.as_str(),
                "point": null,
                "direction": null,
            }),
        })
        .collect();
    json!({
        "angle": angle,
        "start": {
            "origin": point(chain.start.origin),
            "direction": point(chain.start.direction),
        },
        "hits": chain.hits(),
        "stages": stages,
    })
}

/// Long-format table: one row per (sample, stage).
pub fn sweep_frame(samples: &[Sample]) -> PolarsResult<DataFrame> {
    let rows: usize = samples.iter().map(|s| s.chain.stages.len()).sum();
    let mut sample = Vec::with_capacity(rows);
    let mut angle = Vec::with_capacity(rows);
    let mut stage = Vec::with_capacity(rows);
    let mut hit = Vec::with_capacity(rows);
    let mut miss: Vec<Option<&str>> = Vec::with_capacity(rows);
    let mut px = Vec::with_capacity(rows);
    let mut py = Vec::with_capacity(rows);
    let mut dx = Vec::with_capacity(rows);
    let mut dy = Vec::with_capacity(rows);
    for s in samples {
        for st in &s.chain.stages {
            sample.push(s.index as u64);
            angle.push(s.angle);
            stage.push(st.circle as u32);
            hit.push(st.is_hit());
            match st.outcome {
                Ok(b) => {
                    miss.push(None);
                    px.push(Some(b.point.x));
                    py.push(Some(b.point.y));
                    dx.push(Some(b.direction.x));
                    dy.push(Some(b.direction.y));
                }
                Err(m) => {
                    miss.push(Some(m.as_str()));
                    px.push(None);
                    py.push(None);
                    dx.push(None);
                    dy.push(None);
                }
            }
        }
    }
    df!(
        "sample" => sample,
        "angle" => angle,
        "stage" => stage,
        "hit" => hit,
        "miss" => miss,
        "px" => px,
        "py" => py,
        "dx" => dx,
        "dy" => dy
    )
}

/// Write `df` as CSV or Parquet, chosen by the extension of `out`.
pub fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let format = match ext.as_deref() {
        Some("csv") => TableFormat::Csv,
        Some("parquet") => TableFormat::Parquet,
        _ => bail!("unsupported table extension for {} (use .csv or .parquet)", out.display()),
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match format {
        TableFormat::Csv => {
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        TableFormat::Parquet => {
            ParquetWriter::new(&mut file).finish(df)?;
        }
    }
    Ok(())
}

enum TableFormat {
    Csv,
    Parquet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlebounce::scene::Scene;
    use circlebounce::sweep::SweepCfg;
    use tempfile::tempdir;

    fn small_sweep() -> Vec<Sample> {
        Scene::reference().sweep(SweepCfg {
            samples: 16,
            ..SweepCfg::default()
        })
    }

    #[test]
    fn chain_json_marks_misses() {
        let chain = Scene::reference().trace(0.0);
        let v = chain_json(0.0, &chain);
        assert_eq!(v["hits"], 0);
        assert_eq!(v["stages"].as_array().unwrap().len(), 3);
        assert_eq!(v["stages"][0]["miss"], "disjoint");
        assert_eq!(v["stages"][1]["miss"], "undefined");
        assert!(v["stages"][2]["point"].is_null());
        assert_eq!(v["start"]["origin"][0], 2.7);
    }

    #[test]
    fn frame_has_one_row_per_stage() {
        let df = sweep_frame(&small_sweep()).unwrap();
        assert_eq!(df.shape(), (16 * 3, 9));
        let hits = df
            .column("hit")
            .unwrap()
            .bool()
            .unwrap()
            .into_iter()
            .filter(|v| *v == Some(true))
            .count();
        let nulls = df.column("px").unwrap().null_count();
        assert_eq!(hits + nulls, 16 * 3);
    }

    #[test]
    fn csv_round_trips_shape() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("sweep.csv");
        let mut df = sweep_frame(&small_sweep()).unwrap();
        write_table(&mut df, &out).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "sample,angle,stage,hit,miss,px,py,dx,dy"
        );
        let back = LazyCsvReader::new(&out).finish().unwrap().collect().unwrap();
        assert_eq!(back.shape(), df.shape());
    }

    #[test]
    fn parquet_is_written() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("sweep.parquet");
        let mut df = sweep_frame(&small_sweep()).unwrap();
        write_table(&mut df, &out).unwrap();
        assert!(fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let mut df = sweep_frame(&small_sweep()).unwrap();
        assert!(write_table(&mut df, &dir.path().join("sweep.txt")).is_err());
    }
}

//! JSON scene files: `{ "origin": [x, y], "circles": [{ "center": [x, y], "radius": r }] }`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use circlebounce::scene::{Scene, SceneError};
use circlebounce::{Circle, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub center: [f64; 2],
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    pub origin: [f64; 2],
    pub circles: Vec<CircleSpec>,
}

impl SceneFile {
    pub fn from_scene(scene: &Scene) -> Self {
        let o = scene.origin();
        Self {
            origin: [o.x, o.y],
            circles: scene
                .circles()
                .iter()
                .map(|c| CircleSpec {
                    center: [c.center.x, c.center.y],
                    radius: c.radius,
                })
                .collect(),
        }
    }

    pub fn into_scene(self) -> Result<Scene, SceneError> {
        let circles = self
            .circles
            .into_iter()
            .map(|c| Circle::new(Vec2::new(c.center[0], c.center[1]), c.radius))
            .collect();
        Scene::new(Vec2::new(self.origin[0], self.origin[1]), circles)
    }
}

/// Load a scene from `path`, or the reference scene when no path is given.
pub fn load_scene(path: Option<&Path>) -> Result<Scene> {
    let Some(path) = path else {
        return Ok(Scene::reference());
    };
    let bytes = fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
    let file: SceneFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing scene {}", path.display()))?;
    let scene = file
        .into_scene()
        .with_context(|| format!("validating scene {}", path.display()))?;
    Ok(scene)
}

pub fn write_scene(path: &Path, scene: &Scene) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let doc = serde_json::to_vec_pretty(&SceneFile::from_scene(scene))?;
    fs::write(path, doc).with_context(|| format!("writing scene {}", path.display()))?;
    Ok(())
}

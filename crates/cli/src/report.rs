//! JSON snapshot of the scene for `list --json`.

use polygons::{Scene, Shape};
use serde::Serialize;

/// One polygon as printed by `list --json`.
#[derive(Debug, Serialize)]
pub struct PolygonRow {
    pub index: usize,
    pub name: String,
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
    pub centre: [f64; 2],
    /// Accumulated rotation in radians; null for general polygons.
    pub orientation: Option<f64>,
}

pub fn rows(scene: &Scene) -> Vec<PolygonRow> {
    scene
        .iter()
        .map(|(index, p)| PolygonRow {
            index,
            name: p.name(),
            vertices: p.vertices().iter().map(|v| v.as_array()).collect(),
            area: p.area(),
            centre: p.centre().as_array(),
            orientation: p.orientation(),
        })
        .collect()
}

pub fn scene_json(scene: &Scene) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&rows(scene))
}

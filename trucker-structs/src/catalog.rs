use crate::serializable_struct;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use trucker_utils::dejsonify;

serializable_struct! {
    StarRecord {
        name: String,
        x: f64,
        y: f64,
        z: f64,
    }
}

impl StarRecord {
    pub fn new(name: &str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
            z,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Parses a catalog document: a json object mapping arbitrary keys to star records.
/// Records keep the document order, which becomes their system index.
pub fn parse_catalog(json_str: &str) -> Result<Vec<StarRecord>> {
    let document: Map<String, Value> =
        dejsonify(json_str).map_err(|e| anyhow!("Catalog must be a json object: {}", e))?;
    if document.is_empty() {
        return Err(anyhow!("Catalog contains no systems"));
    }
    document
        .into_iter()
        .map(|(key, value)| {
            serde_json::from_value::<StarRecord>(value)
                .map_err(|e| anyhow!("Invalid system record '{}': {}", key, e))
        })
        .collect()
}

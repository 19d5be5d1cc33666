use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::Building;

const REQUIRED_TAGS: [&str; 4] = ["description", "architect", "image", "start_date"];

#[derive(Debug, Serialize, Deserialize)]
pub struct MapResponse {
    pub elements: Vec<Element>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl Element {
    /// Returns `None` unless every required tag is present.
    pub fn building(&self) -> Option<Building> {
        if !REQUIRED_TAGS.iter().all(|tag| self.tags.contains_key(*tag)) {
            return None;
        }

        let tag = |key: &str| self.tags.get(key).cloned().unwrap_or_default();

        Some(Building {
            start_date: tag("start_date"),
            architect: tag("architect"),
            description: tag("description"),
            image: tag("image"),
            name: tag("name"),
        })
    }
}

impl MapResponse {
    pub fn buildings(&self) -> Vec<Building> {
        self.elements.iter().filter_map(Element::building).collect()
    }
}

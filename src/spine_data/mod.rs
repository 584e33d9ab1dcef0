pub mod bone;
pub mod slot;
pub mod skin;
pub mod animation;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A Spine skeleton document. Maps keep insertion order so that the emitted
/// JSON follows the order of the source export.
#[derive(Clone, Serialize, Debug)]
pub struct SkeletonDoc {
    pub skeleton: SkeletonMeta,
    pub bones: Vec<bone::Bone>,
    pub slots: Vec<slot::Slot>,
    pub skins: Skins,
    pub events: IndexMap<String, serde_json::Value>,
    pub animations: IndexMap<String, animation::Animation>,
}

#[derive(Clone, Serialize, Default, Debug)]
pub struct Skins {
    pub default: skin::Skin,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(default)]
pub struct SkeletonMeta {
    pub hash: String,
    pub spine: String,
    pub width: f64,
    pub height: f64,
    pub images: String,
}
impl Default for SkeletonMeta {
    fn default() -> Self {
        Self {
            hash: "rPoYyBLFG6F0CGZ5wsUEBKDJU9U".into(),
            spine: "3.4.00".into(),
            width: 100.0,
            height: 100.0,
            images: "./images/".into(),
        }
    }
}

impl SkeletonDoc {
    pub fn new(skeleton: SkeletonMeta) -> Self {
        Self {
            skeleton,
            bones: Vec::new(),
            slots: Vec::new(),
            skins: Skins::default(),
            events: IndexMap::new(),
            animations: IndexMap::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

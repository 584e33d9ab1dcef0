use indexmap::IndexMap;
use serde::Serialize;

/// Slot (bone) name to attachment name to placement.
pub type Skin = IndexMap<String, IndexMap<String, RegionAttachment>>;

#[derive(Copy, Clone, Serialize, PartialEq, Debug)]
pub struct RegionAttachment {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    #[serde(rename = "scaleX")]
    pub scale_x: f64,
    #[serde(rename = "scaleY")]
    pub scale_y: f64,
    pub width: f64,
    pub height: f64,
}

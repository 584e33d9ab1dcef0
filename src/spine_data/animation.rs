use indexmap::IndexMap;
use serde::Serialize;

#[derive(Clone, Serialize, Default, PartialEq, Debug)]
pub struct Animation {
    pub bones: IndexMap<String, BoneTimeline>,
    pub slots: IndexMap<String, SlotTimeline>,
}

#[derive(Copy, Clone, Serialize, PartialEq, Eq, Debug)]
pub enum Curve {
    /// Hold the value until the next key.
    #[serde(rename = "stepped")]
    Stepped,
}

#[derive(Clone, Serialize, Default, PartialEq, Debug)]
pub struct BoneTimeline {
    pub rotate: Vec<RotateKey>,
    pub translate: Vec<VectorKey>,
    pub scale: Vec<VectorKey>,
}

#[derive(Clone, Serialize, Default, PartialEq, Debug)]
pub struct SlotTimeline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<ColorKey>>,
    pub attachment: Vec<AttachmentKey>,
}

#[derive(Copy, Clone, Serialize, PartialEq, Debug)]
pub struct RotateKey {
    pub time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
    pub angle: f64,
}

#[derive(Copy, Clone, Serialize, PartialEq, Debug)]
pub struct VectorKey {
    pub time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct ColorKey {
    pub time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
    pub color: String,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct AttachmentKey {
    pub time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
    /// `None` is written as `null` and hides the slot.
    pub name: Option<String>,
}

impl SlotTimeline {
    /// Timeline for a bone that does nothing in a clip.
    pub fn hidden() -> Self {
        Self {
            color: None,
            attachment: vec![AttachmentKey { time: 0.0, curve: None, name: None }],
        }
    }
}

use serde::Serialize;

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct Bone {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(flatten)]
    pub pose: Option<BonePose>,
}

/// Setup pose of a bone; the synthetic root has none.
#[derive(Copy, Clone, Serialize, PartialEq, Debug)]
pub struct BonePose {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "scaleX")]
    pub scale_x: f64,
    #[serde(rename = "scaleY")]
    pub scale_y: f64,
    /// Degrees, counter-clockwise.
    pub rotation: f64,
    pub length: f64,
}

impl Bone {
    pub fn root(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            pose: None,
        }
    }
}

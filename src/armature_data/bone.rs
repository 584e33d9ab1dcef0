use serde::Deserialize;
use crate::shared_types::default_one;

#[derive(Clone, Deserialize, Debug)]
pub struct RawBone {
    pub name: String,

    /// Absent or empty means the bone hangs off the synthetic root.
    #[serde(default)]
    pub parent: Option<String>,

    #[serde(default)]
    pub x: f64,

    #[serde(default)]
    pub y: f64,

    #[serde(rename = "cX")]
    #[serde(default = "default_one")]
    pub scale_x: f64,

    #[serde(rename = "cY")]
    #[serde(default = "default_one")]
    pub scale_y: f64,

    #[serde(rename = "kX")]
    #[serde(default)]
    pub skew_x: f64,

    #[serde(rename = "z")]
    #[serde(default)]
    pub depth: i32,

    #[serde(default)]
    pub arrow_x: f64,

    #[serde(default)]
    pub arrow_y: f64,

    #[serde(rename = "display_data")]
    #[serde(default)]
    pub displays: Vec<super::display::RawDisplay>,
}

impl RawBone {
    pub fn parent_name(&self) -> Option<&str> {
        match self.parent.as_deref() {
            Some("") | None => None,
            Some(parent) => Some(parent),
        }
    }

    pub fn length(&self) -> f64 {
        nalgebra::Vector2::new(self.arrow_x, self.arrow_y).norm()
    }
}

use serde::Deserialize;
use crate::shared_types::{default_one, default_no_display, Tint};

#[derive(Clone, Deserialize, Debug)]
pub struct RawAnimationData {
    #[serde(rename = "mov_data")]
    #[serde(default)]
    pub movements: Vec<RawMovement>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawMovement {
    pub name: String,
    /// Divisor applied to every frame time of the clip.
    #[serde(rename = "sc")]
    #[serde(default = "default_one")]
    pub time_scale: f64,
    #[serde(rename = "mov_bone_data")]
    #[serde(default)]
    pub bone_movements: Vec<RawBoneMovement>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawBoneMovement {
    pub name: String,
    #[serde(rename = "frame_data")]
    #[serde(default)]
    pub frames: Vec<RawFrame>,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RawFrame {
    #[serde(rename = "fi")]
    pub frame_index: u32,
    #[serde(rename = "tweenFrame")]
    #[serde(default)]
    pub tween: bool,
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
    #[serde(rename = "dI")]
    #[serde(default = "default_no_display")]
    pub display_index: i32,
    #[serde(default)]
    pub color: Option<Tint>,
}

use serde::Deserialize;

/// Per-frame RGBA tint as stored in the armature export.
#[derive(Copy, Clone, Deserialize, PartialEq, Eq, Debug)]
pub struct Tint {
    #[serde(default = "default_opaque")]
    pub r: u8,
    #[serde(default = "default_opaque")]
    pub g: u8,
    #[serde(default = "default_opaque")]
    pub b: u8,
    #[serde(default = "default_opaque")]
    pub a: u8,
}
impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Tint {
    pub const WHITE: Tint = Tint { r: 255, g: 255, b: 255, a: 255 };

    /// Encodes as `rrggbbaa`, two lower-case hex digits per channel.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

pub(crate) fn default_one() -> f64 { 1.0 }
pub(crate) fn default_opaque() -> u8 { 255 }
pub(crate) fn default_no_display() -> i32 { -1 }

/// Source rotations are radians with the Y axis pointing down; Spine wants
/// degrees with Y up. Zero stays a positive zero so the JSON reads `0.0`.
pub fn to_spine_degrees(radians: f64) -> f64 {
    -radians * (180.0 / std::f64::consts::PI) + 0.0
}

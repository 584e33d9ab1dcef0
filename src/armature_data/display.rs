use serde::Deserialize;
use crate::shared_types::default_one;

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

#[derive(Clone, Deserialize, Debug)]
pub struct RawDisplay {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "skin_data")]
    #[serde(default)]
    pub skins: Vec<RawSkinTransform>,
}

impl RawDisplay {
    /// Image name without its file extension, as used for attachment names.
    pub fn attachment_name(&self) -> &str {
        let lower = self.name.to_ascii_lowercase();
        for ext in IMAGE_EXTENSIONS {
            if lower.ends_with(ext) {
                return &self.name[..self.name.len() - ext.len()];
            }
        }
        &self.name
    }

    /// Placement inside the bone frame; displays without one are not placeable.
    pub fn placement(&self) -> Option<&RawSkinTransform> {
        self.skins.first()
    }
}

#[derive(Copy, Clone, Deserialize, Debug)]
pub struct RawSkinTransform {
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
}

#[cfg(test)]
mod tests {
    use super::RawDisplay;

    fn display(name: &str) -> RawDisplay {
        RawDisplay { name: name.into(), skins: Vec::new() }
    }

    #[test]
    fn strips_trailing_image_extension() {
        assert_eq!(display("arm.png").attachment_name(), "arm");
        assert_eq!(display("Arm.PNG").attachment_name(), "Arm");
        assert_eq!(display("leg.jpeg").attachment_name(), "leg");
        assert_eq!(display("head").attachment_name(), "head");
        assert_eq!(display("a.png.bak").attachment_name(), "a.png.bak");
    }

    #[test]
    fn placement_is_first_skin_entry() {
        let parsed: RawDisplay = serde_json::from_str(
            r#"{"name":"a.png","skin_data":[{"x":1.0,"kX":0.5},{"x":9.0}]}"#
        ).unwrap();
        let placement = parsed.placement().unwrap();
        assert_eq!(placement.x, 1.0);
        assert_eq!(placement.skew_x, 0.5);
        assert_eq!(placement.scale_x, 1.0);
        assert!(display("b.png").placement().is_none());
    }
}

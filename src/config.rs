//! Converter settings, loadable from a RON file.

use std::path::Path;

use serde::Deserialize;

use crate::error::ExportError;
use crate::spine_data::SkeletonMeta;

#[derive(Clone, Deserialize, PartialEq, Debug)]
pub struct ConvertConfig {
    #[serde(default)]
    pub skeleton: SkeletonMeta,

    #[serde(default = "default_root_bone")]
    pub root_bone: String,

    /// Raster the source frame indices are authored at.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,

    /// Source exports carry no image sizes, so every attachment gets this one.
    #[serde(default = "default_placeholder_size")]
    pub attachment_width: f64,
    #[serde(default = "default_placeholder_size")]
    pub attachment_height: f64,

    #[serde(default)]
    pub layout: ExportLayout,
}
impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            skeleton: SkeletonMeta::default(),
            root_bone: default_root_bone(),
            frame_rate: default_frame_rate(),
            attachment_width: default_placeholder_size(),
            attachment_height: default_placeholder_size(),
            layout: ExportLayout::default(),
        }
    }
}

/// Directory conventions around a source export.
#[derive(Clone, Deserialize, PartialEq, Debug)]
#[serde(default)]
pub struct ExportLayout {
    /// Sibling of the source file that receives output when no destination is given.
    pub export_dir: String,
    pub images_dir: String,
    /// Resource directory, relative to the source file's directory.
    pub resources_dir: String,
    /// Name of the directory that holds exports during discovery.
    pub json_dir: String,
}
impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            export_dir: "spine".into(),
            images_dir: "images".into(),
            resources_dir: "../Resources".into(),
            json_dir: "Json".into(),
        }
    }
}

impl ConvertConfig {
    pub fn parse(source: &str) -> Result<Self, ExportError> {
        let config: ConvertConfig = ron::de::from_str(source)
            .map_err(|e| ExportError::Config(e.to_string()))?;
        if !(config.frame_rate.is_finite() && config.frame_rate > 0.0) {
            return Err(ExportError::Config(format!("frame_rate must be positive, got {}", config.frame_rate)));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let source = std::fs::read_to_string(path).map_err(ExportError::io(path))?;
        Self::parse(&source)
    }

    pub(crate) fn frame_duration(&self) -> f64 {
        1.0 / self.frame_rate
    }
}

fn default_root_bone() -> String { "__root__".into() }
fn default_frame_rate() -> f64 { 60.0 }
fn default_placeholder_size() -> f64 { 100.0 }

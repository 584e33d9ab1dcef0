pub mod armature;
pub mod bone;
pub mod display;
pub mod animation;

use serde::Deserialize;

use crate::error::ConvertError;

#[derive(Clone, Deserialize, Debug)]
pub struct RawArmatureDocument {
    #[serde(rename = "armature_data")]
    pub armatures: Vec<armature::RawArmature>,

    #[serde(rename = "animation_data")]
    #[serde(default)]
    pub animations: Vec<animation::RawAnimationData>,
}

impl RawArmatureDocument {
    /// Parses and checks the parts the converter relies on, so that a broken
    /// export fails here and not halfway through track building.
    pub fn parse(raw_bytes: &[u8]) -> Result<Self, ConvertError> {
        let document: RawArmatureDocument = serde_json::from_slice(raw_bytes)?;
        if document.armatures.is_empty() {
            return Err(ConvertError::MissingArmature);
        }
        for movement in document.movements() {
            if !(movement.time_scale.is_finite() && movement.time_scale > 0.0) {
                return Err(ConvertError::InvalidTimeScale {
                    clip: movement.name.clone(),
                    value: movement.time_scale,
                });
            }
        }
        Ok(document)
    }

    pub fn armature(&self) -> Result<&armature::RawArmature, ConvertError> {
        self.armatures.first().ok_or(ConvertError::MissingArmature)
    }

    /// Clips of the first animation block, in source order.
    pub fn movements(&self) -> &[animation::RawMovement] {
        self.animations
            .first()
            .map(|it| it.movements.as_slice())
            .unwrap_or(&[])
    }
}

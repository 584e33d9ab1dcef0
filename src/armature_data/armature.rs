use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct RawArmature {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "bone_data")]
    #[serde(default)]
    pub bones: Vec<super::bone::RawBone>,
}

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::armature_data::armature::RawArmature;
use crate::armature_data::bone::RawBone;
use crate::config::ConvertConfig;
use crate::shared_types::to_spine_degrees;
use crate::spine_data::bone::{Bone, BonePose};
use crate::spine_data::skin::{RegionAttachment, Skin};
use crate::spine_data::slot::Slot;

use super::slots::PendingSlot;

/// Bone name to the attachment names of its displays, in display order.
/// Built once from the armature and only read afterwards.
#[derive(Clone, Default, Debug)]
pub struct DisplayLookup {
    displays: HashMap<String, Vec<String>>,
}

impl DisplayLookup {
    /// Attachment shown by `display_index` on `bone`. Unknown bones, negative
    /// or out of range indices and unnamed displays all mean "nothing shown".
    pub fn resolve(&self, bone: &str, display_index: i32) -> Option<&str> {
        if display_index < 0 {
            return None;
        }
        self.displays
            .get(bone)?
            .get(display_index as usize)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

pub struct SkeletonParts {
    pub bones: Vec<Bone>,
    pub slots: Vec<PendingSlot>,
    pub skin: Skin,
    pub lookup: DisplayLookup,
}

pub fn build_skeleton(armature: &RawArmature, config: &ConvertConfig) -> SkeletonParts {
    let mut bones = Vec::with_capacity(armature.bones.len() + 1);
    let mut slots = Vec::with_capacity(armature.bones.len());
    let mut skin = Skin::new();
    let mut displays = HashMap::new();

    bones.push(Bone::root(&config.root_bone));

    for raw_bone in armature.bones.iter() {
        bones.push(convert_bone(raw_bone, &config.root_bone));
        skin.insert(raw_bone.name.clone(), convert_skin(raw_bone, config));
        displays.insert(
            raw_bone.name.clone(),
            raw_bone.displays.iter().map(|it| it.attachment_name().to_string()).collect(),
        );
        slots.push(PendingSlot {
            slot: Slot {
                name: raw_bone.name.clone(),
                bone: raw_bone.name.clone(),
                attachment: None,
            },
            depth: raw_bone.depth,
        });
    }

    SkeletonParts {
        bones,
        slots,
        skin,
        lookup: DisplayLookup { displays },
    }
}

fn convert_bone(raw_bone: &RawBone, root_bone: &str) -> Bone {
    Bone {
        name: raw_bone.name.clone(),
        parent: Some(raw_bone.parent_name().unwrap_or(root_bone).to_string()),
        pose: Some(BonePose {
            x: raw_bone.x,
            y: raw_bone.y,
            scale_x: raw_bone.scale_x,
            scale_y: raw_bone.scale_y,
            rotation: to_spine_degrees(raw_bone.skew_x),
            length: raw_bone.length(),
        }),
    }
}

fn convert_skin(raw_bone: &RawBone, config: &ConvertConfig) -> IndexMap<String, RegionAttachment> {
    raw_bone.displays
        .iter()
        .filter_map(|display| {
            let placement = display.placement()?;
            Some((
                display.attachment_name().to_string(),
                RegionAttachment {
                    x: placement.x,
                    y: placement.y,
                    rotation: to_spine_degrees(placement.skew_x),
                    scale_x: placement.scale_x,
                    scale_y: placement.scale_y,
                    width: config.attachment_width,
                    height: config.attachment_height,
                },
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armature(json: &str) -> RawArmature {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn root_bone_comes_first_and_adopts_orphans() {
        let parts = build_skeleton(
            &armature(r#"{"name":"hero","bone_data":[
                {"name":"body"},
                {"name":"arm","parent":"body"},
                {"name":"tail","parent":""}
            ]}"#),
            &ConvertConfig::default(),
        );
        let names: Vec<_> = parts.bones.iter().map(|it| it.name.as_str()).collect();
        assert_eq!(names, ["__root__", "body", "arm", "tail"]);
        assert_eq!(parts.bones[0].parent, None);
        assert_eq!(parts.bones[0].pose, None);
        assert_eq!(parts.bones[1].parent.as_deref(), Some("__root__"));
        assert_eq!(parts.bones[2].parent.as_deref(), Some("body"));
        assert_eq!(parts.bones[3].parent.as_deref(), Some("__root__"));
    }

    #[test]
    fn bone_pose_is_converted() {
        let parts = build_skeleton(
            &armature(r#"{"name":"hero","bone_data":[
                {"name":"arm","x":12.5,"y":-3.0,"cX":2.0,"cY":0.5,"kX":0.75,"arrow_x":6.0,"arrow_y":8.0}
            ]}"#),
            &ConvertConfig::default(),
        );
        let pose = parts.bones[1].pose.unwrap();
        assert_eq!((pose.x, pose.y), (12.5, -3.0));
        assert_eq!((pose.scale_x, pose.scale_y), (2.0, 0.5));
        assert_eq!(pose.rotation, -0.75 * (180.0 / std::f64::consts::PI));
        assert_eq!(pose.length, 10.0);
    }

    #[test]
    fn skin_skips_displays_without_placement() {
        let config = ConvertConfig { attachment_width: 64.0, ..ConvertConfig::default() };
        let parts = build_skeleton(
            &armature(r#"{"name":"hero","bone_data":[
                {"name":"head","display_data":[
                    {"name":"face.png","skin_data":[{"x":1.0,"y":2.0,"kX":-0.5,"cX":1.5}]},
                    {"name":"hat.png","skin_data":[]}
                ]},
                {"name":"empty"}
            ]}"#),
            &config,
        );
        let head = &parts.skin["head"];
        assert_eq!(head.len(), 1);
        let face = head["face"];
        assert_eq!((face.x, face.y, face.scale_x, face.scale_y), (1.0, 2.0, 1.5, 1.0));
        assert_eq!(face.rotation, 0.5 * (180.0 / std::f64::consts::PI));
        assert_eq!((face.width, face.height), (64.0, 100.0));
        assert!(parts.skin["empty"].is_empty());

        // The unplaceable display still resolves by index.
        assert_eq!(parts.lookup.resolve("head", 0), Some("face"));
        assert_eq!(parts.lookup.resolve("head", 1), Some("hat"));
    }

    #[test]
    fn lookup_misses_resolve_to_nothing() {
        let parts = build_skeleton(
            &armature(r#"{"name":"hero","bone_data":[
                {"name":"head","display_data":[{"name":"face.png"},{"name":""}]}
            ]}"#),
            &ConvertConfig::default(),
        );
        assert_eq!(parts.lookup.resolve("head", -1), None);
        assert_eq!(parts.lookup.resolve("head", 1), None);
        assert_eq!(parts.lookup.resolve("head", 2), None);
        assert_eq!(parts.lookup.resolve("ghost", 0), None);
    }

    #[test]
    fn one_slot_per_bone_with_depth() {
        let parts = build_skeleton(
            &armature(r#"{"name":"hero","bone_data":[{"name":"a","z":3},{"name":"b"}]}"#),
            &ConvertConfig::default(),
        );
        let slots: Vec<_> = parts.slots.iter().map(|it| (it.slot.name.as_str(), it.slot.bone.as_str(), it.depth)).collect();
        assert_eq!(slots, [("a", "a", 3), ("b", "b", 0)]);
    }
}

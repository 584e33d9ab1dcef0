use std::collections::HashSet;

use log::{debug, warn};

use crate::armature_data::animation::{RawBoneMovement, RawFrame, RawMovement};
use crate::armature_data::bone::RawBone;
use crate::shared_types::{to_spine_degrees, Tint};
use crate::spine_data::animation::{
    Animation, AttachmentKey, BoneTimeline, ColorKey, Curve, RotateKey, SlotTimeline, VectorKey,
};
use crate::spine_data::slot::Slot;

use super::skeleton::DisplayLookup;

/// Builds one Spine animation per source clip.
pub struct TrackBuilder<'a> {
    lookup: &'a DisplayLookup,
    bones: &'a [RawBone],
    frame_duration: f64,
}

impl<'a> TrackBuilder<'a> {
    pub fn new(lookup: &'a DisplayLookup, bones: &'a [RawBone], frame_duration: f64) -> Self {
        Self { lookup, bones, frame_duration }
    }

    /// Converts `movement`. When `setup` is given, the first resolved
    /// attachment of every animated bone becomes the setup attachment of its
    /// slot.
    pub fn build(&self, movement: &RawMovement, mut setup: Option<&mut [Slot]>) -> Animation {
        let mut animation = Animation::default();
        let mut assigned = HashSet::new();

        for bone_movement in movement.bone_movements.iter() {
            let (bone_timeline, slot_timeline) = self.build_bone(bone_movement, movement.time_scale);

            if let Some(slots) = setup.as_deref_mut() {
                let first = slot_timeline.attachment.first().and_then(|it| it.name.as_deref());
                if let Some(name) = first {
                    if assigned.insert(bone_movement.name.as_str()) {
                        assign_setup_attachment(slots, &bone_movement.name, name);
                    }
                }
            }

            animation.bones.insert(bone_movement.name.clone(), bone_timeline);
            animation.slots.insert(bone_movement.name.clone(), slot_timeline);
        }

        for bone in self.bones.iter() {
            if animation.bones.contains_key(&bone.name) || animation.slots.contains_key(&bone.name) {
                continue;
            }
            debug!("clip '{}': bone '{}' is idle, hiding it", movement.name, bone.name);
            animation.slots.insert(bone.name.clone(), SlotTimeline::hidden());
        }

        animation
    }

    fn build_bone(&self, bone_movement: &RawBoneMovement, time_scale: f64) -> (BoneTimeline, SlotTimeline) {
        let frame_count = bone_movement.frames.len();
        let mut bone_timeline = BoneTimeline {
            rotate: Vec::with_capacity(frame_count),
            translate: Vec::with_capacity(frame_count),
            scale: Vec::with_capacity(frame_count),
        };
        let mut attachments = Vec::with_capacity(frame_count);
        let mut colors = Vec::with_capacity(frame_count + 1);

        for frame in bone_movement.frames.iter() {
            let time = self.key_time(frame, time_scale);
            let curve = curve_of(frame);

            // All three are keyed on every frame, changed or not.
            bone_timeline.rotate.push(RotateKey {
                time,
                curve,
                angle: to_spine_degrees(frame.skew_x),
            });
            bone_timeline.translate.push(VectorKey { time, curve, x: frame.x, y: frame.y });
            bone_timeline.scale.push(VectorKey { time, curve, x: frame.scale_x, y: frame.scale_y });

            attachments.push(AttachmentKey {
                time,
                curve,
                name: self.lookup
                    .resolve(&bone_movement.name, frame.display_index)
                    .map(str::to_string),
            });
            colors.push(ColorKey {
                time,
                curve,
                color: frame.color.unwrap_or(Tint::WHITE).to_hex(),
            });
        }

        let slot_timeline = SlotTimeline {
            color: complete_color_track(colors),
            attachment: attachments,
        };
        (bone_timeline, slot_timeline)
    }

    fn key_time(&self, frame: &RawFrame, time_scale: f64) -> f64 {
        frame.frame_index as f64 * self.frame_duration / time_scale
    }
}

fn curve_of(frame: &RawFrame) -> Option<Curve> {
    if frame.tween {
        None
    } else {
        Some(Curve::Stepped)
    }
}

/// Spine assumes a color track starts at zero; without a key there it would
/// flash the default tint.
fn complete_color_track(mut colors: Vec<ColorKey>) -> Option<Vec<ColorKey>> {
    let first = colors.first()?.clone();
    if first.time != 0.0 {
        colors.insert(0, ColorKey { time: 0.0, ..first });
    }
    Some(colors)
}

fn assign_setup_attachment(slots: &mut [Slot], bone: &str, attachment: &str) {
    match slots.iter_mut().find(|slot| slot.name == bone) {
        Some(slot) => slot.attachment = Some(attachment.to_string()),
        None => warn!("clip animates unknown bone '{}', no setup attachment set", bone),
    }
}

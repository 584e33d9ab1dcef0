//! Armature export to Spine skeleton transcoding.
//!
//! Runs strictly forward: bones and skins first, then slot ordering, then one
//! animation per clip. The display lookup built by the first phase is only
//! read afterwards.

pub mod skeleton;
pub mod slots;
pub mod animation;

use indexmap::IndexMap;
use log::debug;

use crate::armature_data::RawArmatureDocument;
use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::spine_data::SkeletonDoc;

pub use self::skeleton::DisplayLookup;

pub fn convert(document: &RawArmatureDocument, config: &ConvertConfig) -> Result<SkeletonDoc, ConvertError> {
    let armature = document.armature()?;
    let parts = skeleton::build_skeleton(armature, config);

    let mut skeleton = SkeletonDoc::new(config.skeleton.clone());
    skeleton.bones = parts.bones;
    skeleton.skins.default = parts.skin;
    skeleton.slots = slots::sort_slots(parts.slots);
    debug!("armature '{}': {} bones, {} slots", armature.name, skeleton.bones.len(), skeleton.slots.len());

    let builder = animation::TrackBuilder::new(&parts.lookup, &armature.bones, config.frame_duration());
    let mut animations = IndexMap::new();
    for (ordinal, movement) in document.movements().iter().enumerate() {
        // Only the first clip may set the setup pose attachments.
        let setup = if ordinal == 0 { Some(skeleton.slots.as_mut_slice()) } else { None };
        let clip = builder.build(movement, setup);
        debug!(
            "clip '{}': {} bone timelines, {} slot timelines",
            movement.name,
            clip.bones.len(),
            clip.slots.len()
        );
        animations.insert(movement.name.clone(), clip);
    }
    skeleton.animations = animations;

    Ok(skeleton)
}

pub mod armature_data;
pub mod spine_data;
pub mod shared_types;
pub mod converter;
pub mod export;
pub mod config;
pub mod error;

pub use crate::config::ConvertConfig;
pub use crate::converter::convert;
pub use crate::error::{ConvertError, ExportError};

use crate::armature_data::RawArmatureDocument;
use crate::spine_data::SkeletonDoc;

/// Parses an armature export and converts it in one go.
pub fn convert_slice(raw_bytes: &[u8], config: &ConvertConfig) -> Result<SkeletonDoc, ConvertError> {
    let document = RawArmatureDocument::parse(raw_bytes)?;
    convert(&document, config)
}

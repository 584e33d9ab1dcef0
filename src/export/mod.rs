//! Writing converted skeletons next to (or away from) their source exports.

pub mod batch;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::armature_data::RawArmatureDocument;
use crate::config::{ConvertConfig, ExportLayout};
use crate::converter::convert;
use crate::error::{ConvertError, ExportError, Result};
use crate::spine_data::SkeletonDoc;

/// Image directory to copy verbatim alongside the skeleton.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ResourceCopy {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// A serialized skeleton and where it and its images go.
#[derive(Clone, Debug)]
pub struct Emitted {
    pub json: String,
    pub output_path: PathBuf,
    pub resources: ResourceCopy,
}

/// Without a destination root the output lands in a sibling directory of the
/// source file; with one, in a directory named after the project the source
/// file belongs to (`<project>/Json/<file>.json`). A source path too short to
/// name a project (`hero.json`, `Json/hero.json`) writes straight into the
/// destination root.
pub fn export_dir(src: &Path, dst: Option<&Path>, layout: &ExportLayout) -> PathBuf {
    let source_dir = src.parent().unwrap_or_else(|| Path::new(""));
    match dst {
        Some(dst) => match source_dir.parent().and_then(Path::file_name) {
            Some(project) => dst.join(project),
            None => {
                debug!("{} has no project directory, exporting into {}", src.display(), dst.display());
                dst.to_path_buf()
            }
        },
        None => source_dir.join(&layout.export_dir),
    }
}

pub fn emit(
    skeleton: &SkeletonDoc,
    armature_name: &str,
    src: &Path,
    dst: Option<&Path>,
    layout: &ExportLayout,
) -> Result<Emitted> {
    let export_dir = export_dir(src, dst, layout);
    let source_dir = src.parent().unwrap_or_else(|| Path::new(""));
    Ok(Emitted {
        json: skeleton.to_json()?,
        output_path: export_dir.join(format!("{}.json", armature_name)),
        resources: ResourceCopy {
            from: source_dir.join(&layout.resources_dir),
            to: export_dir.join(&layout.images_dir),
        },
    })
}

/// Writes the skeleton and copies its images. A missing image directory is
/// reported but does not fail the export.
pub fn write(emitted: &Emitted) -> Result<()> {
    if let Some(parent) = emitted.output_path.parent() {
        fs::create_dir_all(parent).map_err(ExportError::io(parent))?;
    }
    fs::write(&emitted.output_path, emitted.json.as_bytes()).map_err(ExportError::io(&emitted.output_path))?;

    let ResourceCopy { from, to } = &emitted.resources;
    if from.is_dir() {
        copy_dir(from, to)?;
    } else {
        warn!("Resource directory {} not found, images not copied", from.display());
    }
    Ok(())
}

/// Converts one export file. Returns the written path, or `None` when the
/// source does not exist.
pub fn convert_file(src: &Path, dst: Option<&Path>, config: &ConvertConfig) -> Result<Option<PathBuf>> {
    if !src.exists() {
        error!("Path [{}] not exists.", src.display());
        return Ok(None);
    }

    let bytes = fs::read(src).map_err(ExportError::io(src))?;
    let in_context = |source: ConvertError| ExportError::Convert { path: src.to_path_buf(), source };
    let document = RawArmatureDocument::parse(&bytes).map_err(in_context)?;
    let skeleton = convert(&document, config).map_err(in_context)?;
    let armature = document.armature().map_err(in_context)?;

    let emitted = emit(&skeleton, &armature.name, src, dst, &config.layout)?;
    write(&emitted)?;
    info!("{} -> {}", src.display(), emitted.output_path.display());
    Ok(Some(emitted.output_path))
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to).map_err(ExportError::io(to))?;
    for entry in fs::read_dir(from).map_err(ExportError::io(from))? {
        let entry = entry.map_err(ExportError::io(from))?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        if source.is_dir() {
            copy_dir(&source, &target)?;
        } else {
            fs::copy(&source, &target).map_err(ExportError::io(&source))?;
        }
    }
    Ok(())
}

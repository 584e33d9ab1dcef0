use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::{ConvertConfig, ExportLayout};
use crate::error::{ExportError, Result};

use super::convert_file;

/// Outcome of converting every export under a directory.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, ExportError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Every `*.json` directly inside a directory named `layout.json_dir`,
/// at any depth below `root`, in path order.
pub fn discover(root: &Path, layout: &ExportLayout) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(root, layout, &mut found)?;
    found.sort();
    Ok(found)
}

fn walk(dir: &Path, layout: &ExportLayout, found: &mut Vec<PathBuf>) -> Result<()> {
    let in_json_dir = dir.file_name().map_or(false, |name| name == layout.json_dir.as_str());
    for entry in fs::read_dir(dir).map_err(ExportError::io(dir))? {
        let path = entry.map_err(ExportError::io(dir))?.path();
        if path.is_dir() {
            walk(&path, layout, found)?;
        } else if in_json_dir && path.extension().map_or(false, |ext| ext == "json") {
            found.push(path);
        }
    }
    Ok(())
}

/// Converts each discovered export on its own. A failing file is logged and
/// the rest still run, unless `fail_fast` is set.
pub fn convert_dir(root: &Path, dst: Option<&Path>, config: &ConvertConfig, fail_fast: bool) -> Result<BatchReport> {
    let sources = discover(root, &config.layout)?;
    info!("Found {} armature exports under {}", sources.len(), root.display());

    let mut report = BatchReport::default();
    for src in sources {
        match convert_file(&src, dst, config) {
            Ok(Some(written)) => report.converted.push(written),
            Ok(None) => report.skipped.push(src),
            Err(e) if fail_fast => return Err(e),
            Err(e) => {
                error!("{}", e);
                report.failed.push((src, e));
            }
        }
    }
    Ok(report)
}

/// Entry point for a user supplied path: a directory is searched for
/// exports, anything else is converted as a single file.
pub fn convert_path(src: &Path, dst: Option<&Path>, config: &ConvertConfig, fail_fast: bool) -> Result<BatchReport> {
    if src.is_dir() {
        return convert_dir(src, dst, config, fail_fast);
    }
    let mut report = BatchReport::default();
    match convert_file(src, dst, config)? {
        Some(written) => report.converted.push(written),
        None => report.skipped.push(src.to_path_buf()),
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HERO: &[u8] = include_bytes!("../test_assets/hero.json");

    fn touch(path: &Path, contents: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn discovers_exports_in_json_dirs_only() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join("b/Json/hero.json"), HERO);
        touch(&root.join("a/Json/hero.json"), HERO);
        touch(&root.join("a/deep/er/Json/x.json"), HERO);
        touch(&root.join("a/Json/notes.txt"), b"");
        touch(&root.join("a/Json/nested/y.json"), HERO);
        touch(&root.join("a/Resources/z.json"), HERO);

        let found = discover(root, &ExportLayout::default()).unwrap();
        assert_eq!(found, vec![
            root.join("a/Json/hero.json"),
            root.join("a/deep/er/Json/x.json"),
            root.join("b/Json/hero.json"),
        ]);
    }

    #[test]
    fn one_broken_file_does_not_stop_the_batch() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("in");
        touch(&root.join("a/Json/broken.json"), b"{ not json");
        touch(&root.join("b/Json/hero.json"), HERO);
        let out = temp.path().join("out");

        let report = convert_dir(&root, Some(&out), &ConvertConfig::default(), false).unwrap();
        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, root.join("a/Json/broken.json"));
        assert_eq!(report.converted, vec![out.join("b").join("Hero.json")]);
    }

    #[test]
    fn fail_fast_stops_at_first_failure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("in");
        touch(&root.join("a/Json/broken.json"), b"{ not json");
        touch(&root.join("b/Json/hero.json"), HERO);
        let out = temp.path().join("out");

        let result = convert_dir(&root, Some(&out), &ConvertConfig::default(), true);
        assert!(matches!(result, Err(ExportError::Convert { .. })));
        assert!(!out.join("b").exists());
    }

    #[test]
    fn single_missing_file_is_reported_as_skipped() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        let report = convert_path(&missing, None, &ConvertConfig::default(), false).unwrap();
        assert_eq!(report.skipped, vec![missing]);
        assert!(report.converted.is_empty());
        assert!(report.is_success());
    }
}

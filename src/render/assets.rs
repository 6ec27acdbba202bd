use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Asset trees referenced by assembled documents. Copied verbatim when the
/// output tree is written somewhere other than the project root.
const ASSET_DIRS: [&str; 4] = ["img", "styles", "js", "files"];

pub(super) fn copy_static_assets(root: &Path, out_root: &Path) -> Result<usize> {
    let mut copied = 0usize;
    for dir in ASSET_DIRS {
        let source_dir = root.join(dir);
        if !source_dir.exists() {
            continue;
        }
        for entry in WalkDir::new(&source_dir) {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            let relative = entry.path().strip_prefix(root).unwrap();
            let destination = out_root.join(relative);
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::copy(entry.path(), &destination).with_context(|| {
                format!(
                    "failed to copy static asset from {} to {}",
                    entry.path().display(),
                    destination.display()
                )
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

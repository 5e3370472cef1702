//! Locating the device mount point

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a path to an absolute path with symlinks and `.`/`..` removed
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {:?}", path))
}

/// Find the mount point of the file system holding `path`
///
/// Walks up from `path` until the parent directory lives on another device
/// (or there is no parent). A subdirectory of a mounted shuffle resolves to
/// the shuffle's root.
pub fn find_mount_root(path: &Path) -> Result<PathBuf> {
    let path = absolute_path(path)?;
    mount_root_of(&path)
}

#[cfg(unix)]
fn mount_root_of(path: &Path) -> Result<PathBuf> {
    use std::os::unix::fs::MetadataExt;

    let device_of = |p: &Path| {
        fs::metadata(p)
            .map(|m| m.dev())
            .with_context(|| format!("Failed to stat {:?}", p))
    };

    let device = device_of(path)?;
    let mut current = path;
    while let Some(parent) = current.parent() {
        if device_of(parent)? != device {
            break;
        }
        current = parent;
    }

    log::debug!("Mount point of {:?} is {:?}", path, current);
    Ok(current.to_path_buf())
}

#[cfg(not(unix))]
fn mount_root_of(path: &Path) -> Result<PathBuf> {
    // Drive root, e.g. `E:\`
    let root = path
        .ancestors()
        .last()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| path.to_path_buf());
    log::debug!("Mount point of {:?} is {:?}", path, root);
    Ok(root)
}

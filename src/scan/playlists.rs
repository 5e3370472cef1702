//! Playlist file (.pls / .m3u) parsing

use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Read a playlist file and return its entries as absolute paths
///
/// Relative entries are resolved against the playlist's own directory.
/// Entries that are not local files (e.g. stream URLs) are dropped.
pub fn read_playlist(path: &Path) -> Result<Vec<PathBuf>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read playlist: {:?}", path))?;
    let content = String::from_utf8_lossy(&bytes);

    let is_pls = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pls"))
        .unwrap_or(false);
    let entries = if is_pls {
        parse_pls(&content)
    } else {
        parse_m3u(&content)
    };

    let base_dir = path.parent().unwrap_or_else(|| Path::new("/"));
    let resolved: Vec<PathBuf> = entries
        .iter()
        .filter_map(|entry| {
            let resolved = resolve_entry(base_dir, entry);
            if resolved.is_none() {
                log::debug!("Ignoring playlist entry {:?} in {:?}", entry, path);
            }
            resolved
        })
        .collect();

    log::debug!("Playlist {:?}: {} entries", path, resolved.len());
    Ok(resolved)
}

/// Extract `FileN=` entries from a .pls file, ordered by N
pub fn parse_pls(content: &str) -> Vec<String> {
    let mut numbered: Vec<(u32, String)> = content
        .lines()
        .filter_map(|line| {
            let (key, value) = line.trim().split_once('=')?;
            let key = key.trim();
            if !key.get(..4)?.eq_ignore_ascii_case("file") {
                return None;
            }
            let number = key.get(4..)?.parse::<u32>().ok()?;
            Some((number, value.trim().to_string()))
        })
        .collect();

    numbered.sort_by_key(|(number, _)| *number);
    numbered.into_iter().map(|(_, value)| value).collect()
}

/// Extract entries from an .m3u file, skipping blank and `#` lines
pub fn parse_m3u(content: &str) -> Vec<String> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Turn one playlist entry into an absolute, normalized path
fn resolve_entry(base_dir: &Path, entry: &str) -> Option<PathBuf> {
    let path = if let Some(rest) = entry.strip_prefix("file://") {
        PathBuf::from(urlencoding::decode(rest).ok()?.into_owned())
    } else if entry.contains("://") {
        return None;
    } else {
        PathBuf::from(entry)
    };

    let absolute = if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    };
    Some(normalize(&absolute))
}

/// Lexically resolve `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

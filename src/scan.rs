//! Candidate file discovery
//!
//! Recursively walks the input roots and yields paths whose extension is
//! `.torrent` (case-insensitive). Entries within each directory are visited
//! in lexicographic order so repeated runs see files in the same order.

use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns true if `path` names a torrent metadata file
pub fn is_torrent_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("torrent"))
}

/// Recursively collect candidate .torrent files under `root`.
///
/// An unreadable directory is logged and skipped; its siblings are still
/// visited. Non-torrent files are silently ignored.
pub fn find_torrent_files(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    collect_from(root, &mut found);
    found
}

fn collect_from(dir: &Path, found: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("failed to read directory {}: {}", dir.display(), err);
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            collect_from(&path, found);
        } else if is_torrent_file(&path) {
            found.push(path);
        }
    }
}

//! Scan pipeline
//!
//! Drives enumerate, load, parse, extract, accumulate sequentially, one
//! file at a time. Per-file failures are logged and counted but never
//! abort the scan.

use crate::descriptor::DescriptorProvider;
use crate::error::{Result, ScanError};
use crate::histogram::ScanStats;
use crate::metrics::{TorrentMetrics, DEFAULT_SIZE_QUANTUM_MIB};
use crate::scan;
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Glyphs cycled on stderr while scanning
const SPINNER: [char; 4] = ['/', '-', '\\', '|'];

/// Knobs for one scan run
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Total-size bucket width in MiB
    pub size_quantum_mib: u64,
    /// Suppress the stderr spinner
    pub quiet: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            size_quantum_mib: DEFAULT_SIZE_QUANTUM_MIB,
            quiet: false,
        }
    }
}

/// Scan `roots` for .torrent files and accumulate their metrics.
///
/// A root that is not a directory is a fatal error. Everything below that
/// is best-effort: unreadable files and unparsable torrents are logged,
/// counted, and skipped. A file reachable from more than one root is
/// counted once.
pub fn analyze_directories<P: DescriptorProvider>(
    roots: &[PathBuf],
    provider: &P,
    config: &ScanConfig,
) -> Result<ScanStats> {
    for root in roots {
        if !root.is_dir() {
            return Err(ScanError::MissingRoot(root.clone()));
        }
    }

    let mut stats = ScanStats::new();
    let mut seen: FxHashSet<PathBuf> = FxHashSet::default();
    let mut spin = 0usize;

    for root in roots {
        for path in scan::find_torrent_files(root) {
            if !seen.insert(path.clone()) {
                continue;
            }
            if !config.quiet {
                let mut stderr = std::io::stderr();
                let _ = write!(stderr, "\r{}", SPINNER[spin]);
                let _ = stderr.flush();
                spin = (spin + 1) % SPINNER.len();
            }
            process_file(&path, provider, config, &mut stats);
        }
    }

    info!(
        "scanned {} torrents ({} unreadable, {} unparsable)",
        stats.num_torrents, stats.load_failures, stats.parse_failures
    );
    Ok(stats)
}

fn process_file<P: DescriptorProvider>(
    path: &Path,
    provider: &P,
    config: &ScanConfig,
    stats: &mut ScanStats,
) {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) => {
            let err = ScanError::FileLoad {
                file: path.to_path_buf(),
                source,
            };
            warn!("{}", err);
            stats.load_failures += 1;
            return;
        }
    };

    let descriptor = match provider.parse(&bytes) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            let err = ScanError::Parse {
                file: path.to_path_buf(),
                reason: err.to_string(),
            };
            warn!("{}", err);
            stats.parse_failures += 1;
            return;
        }
    };

    debug!("parsed {}", path.display());
    stats.record(TorrentMetrics::extract(
        &descriptor,
        bytes.len() as u64,
        config.size_quantum_mib,
    ));
}

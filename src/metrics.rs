//! Metric extraction and bucketing
//!
//! Derives the six histogram keys from a parsed descriptor and the raw
//! metadata length. Every rule here is a total, deterministic function of
//! its input: the same raw value always lands in the same bucket.

use crate::descriptor::TorrentDescriptor;

/// Bucket width for the piece-count histogram
pub const PIECE_COUNT_QUANTUM: u64 = 100;
/// Bucket width for the metadata-size histogram, in bytes
pub const METADATA_SIZE_QUANTUM: u64 = 1024;
/// Default bucket width for the total-size histogram, in MiB
pub const DEFAULT_SIZE_QUANTUM_MIB: u64 = 200;

/// The bucketed values recorded for one torrent file.
///
/// `trackers` holds one normalized entry per announce URL; the tracker
/// histogram gets one increment per entry, not per file.
#[derive(Debug, Clone, PartialEq)]
pub struct TorrentMetrics {
    pub piece_size: i64,
    pub piece_count_bucket: u64,
    pub total_size_bucket: u64,
    pub metadata_size_bucket: u64,
    pub creator: String,
    pub trackers: Vec<String>,
}

impl TorrentMetrics {
    /// Derive metrics from a descriptor, the raw file length in bytes, and
    /// the total-size quantum in MiB.
    pub fn extract(
        descriptor: &TorrentDescriptor,
        metadata_len: u64,
        size_quantum_mib: u64,
    ) -> Self {
        TorrentMetrics {
            piece_size: descriptor.piece_length,
            piece_count_bucket: descriptor.piece_count as u64 / PIECE_COUNT_QUANTUM,
            total_size_bucket: total_size_bucket(descriptor.total_size, size_quantum_mib),
            metadata_size_bucket: metadata_len / METADATA_SIZE_QUANTUM,
            creator: normalize_creator(&descriptor.creator),
            trackers: descriptor
                .trackers
                .iter()
                .map(|url| normalize_tracker(url))
                .collect(),
        }
    }
}

/// Map a total content size in bytes to its bucket index
pub fn total_size_bucket(total_size: u64, size_quantum_mib: u64) -> u64 {
    total_size / (size_quantum_mib * 1024 * 1024)
}

/// Normalize a creator string to its tool-name prefix.
///
/// Strings starting with `http` are kept verbatim (they are URLs rather
/// than `tool/version` tags). Anything else is cut at the first `/`; when
/// there is no `/` (including the empty string) the whole string is kept.
pub fn normalize_creator(creator: &str) -> String {
    if creator.starts_with("http") {
        creator.to_string()
    } else {
        match creator.find('/') {
            Some(idx) => creator[..idx].to_string(),
            None => creator.to_string(),
        }
    }
}

/// Normalize a tracker URL.
///
/// DHT bootstrap entries carry peer-specific addresses, so they are all
/// collapsed to the literal `dht://xxxxx`. Everything else is kept verbatim.
pub fn normalize_tracker(url: &str) -> String {
    if url.starts_with("dht://") {
        "dht://xxxxx".to_string()
    } else {
        url.to_string()
    }
}

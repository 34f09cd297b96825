//! Frequency histograms
//!
//! One ordered table per metric plus the run-wide torrent counter. Numeric
//! tables iterate in ascending key order; string tables are re-sorted by
//! count at report time.

use crate::metrics::TorrentMetrics;
use std::collections::BTreeMap;

/// Bucket-keyed frequency table
#[derive(Debug, Clone)]
pub struct Histogram<K: Ord> {
    counts: BTreeMap<K, u64>,
}

impl<K: Ord> Histogram<K> {
    pub fn new() -> Self {
        Histogram {
            counts: BTreeMap::new(),
        }
    }

    /// Increment the count for `key`, creating the entry at 1 if absent
    pub fn record(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn count(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all bucket counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Buckets in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }

    /// Buckets sorted by descending count. Equal counts fall back to
    /// reverse-lexicographic key order so the ordering is total.
    pub fn sorted_by_count(&self) -> Vec<(&K, u64)> {
        let mut entries: Vec<(&K, u64)> = self.iter().collect();
        entries.sort_by(|a, b| (b.1, b.0).cmp(&(a.1, a.0)));
        entries
    }
}

impl<K: Ord> Default for Histogram<K> {
    fn default() -> Self {
        Histogram::new()
    }
}

/// Accumulated tables for one scan.
///
/// Every per-file histogram sums to `num_torrents`; the tracker histogram
/// may sum to more (several trackers per file) or less (files without any).
/// Files that fail to load or parse touch nothing here except the failure
/// counters.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Exact piece size in bytes
    pub piece_sizes: Histogram<i64>,
    /// Piece count, quantized to buckets of 100
    pub piece_counts: Histogram<u64>,
    /// Total content size, quantized to buckets of the configured MiB quantum
    pub total_sizes: Histogram<u64>,
    /// Raw .torrent file size, quantized to 1 KiB buckets
    pub metadata_sizes: Histogram<u64>,
    /// Normalized creator tool names
    pub creators: Histogram<String>,
    /// Normalized tracker URLs
    pub trackers: Histogram<String>,
    /// Successfully parsed torrent files
    pub num_torrents: u64,
    /// Candidate files that could not be read
    pub load_failures: u64,
    /// Candidate files the parser rejected
    pub parse_failures: u64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one parsed torrent's metrics across all tables
    pub fn record(&mut self, metrics: TorrentMetrics) {
        self.piece_sizes.record(metrics.piece_size);
        self.piece_counts.record(metrics.piece_count_bucket);
        self.total_sizes.record(metrics.total_size_bucket);
        self.metadata_sizes.record(metrics.metadata_size_bucket);
        self.creators.record(metrics.creator);
        for tracker in metrics.trackers {
            self.trackers.record(tracker);
        }
        self.num_torrents += 1;
    }
}

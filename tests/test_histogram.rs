//! Tests for the histogram accumulator
//!
//! Covers recording, ordered iteration, count-descending sorting with its
//! tie-break, and the sum invariants of ScanStats.

use torstats::histogram::{Histogram, ScanStats};
use torstats::metrics::TorrentMetrics;

fn metrics(piece_size: i64, creator: &str, trackers: &[&str]) -> TorrentMetrics {
    TorrentMetrics {
        piece_size,
        piece_count_bucket: 1,
        total_size_bucket: 0,
        metadata_size_bucket: 2,
        creator: creator.to_string(),
        trackers: trackers.iter().map(|t| t.to_string()).collect(),
    }
}

// ============================================================================
// Histogram basics
// ============================================================================

#[test]
fn test_record_creates_then_increments() {
    let mut hist: Histogram<i64> = Histogram::new();
    assert_eq!(hist.count(&16384), 0);

    hist.record(16384);
    assert_eq!(hist.count(&16384), 1);

    hist.record(16384);
    assert_eq!(hist.count(&16384), 2);
    assert_eq!(hist.len(), 1);
}

#[test]
fn test_total_sums_all_buckets() {
    let mut hist: Histogram<u64> = Histogram::new();
    hist.record(1);
    hist.record(1);
    hist.record(7);
    assert_eq!(hist.total(), 3);
}

#[test]
fn test_iter_ascending_key_order() {
    let mut hist: Histogram<i64> = Histogram::new();
    hist.record(32768);
    hist.record(16384);
    hist.record(65536);
    hist.record(16384);

    let keys: Vec<i64> = hist.iter().map(|(&k, _)| k).collect();
    assert_eq!(keys, vec![16384, 32768, 65536]);
}

#[test]
fn test_empty_histogram() {
    let hist: Histogram<String> = Histogram::new();
    assert!(hist.is_empty());
    assert_eq!(hist.total(), 0);
    assert!(hist.sorted_by_count().is_empty());
}

#[test]
fn test_sorted_by_count_descending() {
    let mut hist: Histogram<String> = Histogram::new();
    for _ in 0..3 {
        hist.record("uTorrent".to_string());
    }
    hist.record("mktorrent".to_string());
    for _ in 0..2 {
        hist.record("Transmission".to_string());
    }

    let sorted = hist.sorted_by_count();
    assert_eq!(sorted[0], (&"uTorrent".to_string(), 3));
    assert_eq!(sorted[1], (&"Transmission".to_string(), 2));
    assert_eq!(sorted[2], (&"mktorrent".to_string(), 1));
}

#[test]
fn test_sorted_by_count_tie_breaks_reverse_lexicographic() {
    let mut hist: Histogram<String> = Histogram::new();
    hist.record("alpha".to_string());
    hist.record("beta".to_string());
    hist.record("gamma".to_string());

    let labels: Vec<&str> = hist
        .sorted_by_count()
        .into_iter()
        .map(|(label, _)| label.as_str())
        .collect();
    assert_eq!(labels, vec!["gamma", "beta", "alpha"]);
}

// ============================================================================
// ScanStats invariants
// ============================================================================

#[test]
fn test_per_file_histograms_sum_to_num_torrents() {
    let mut stats = ScanStats::new();
    stats.record(metrics(16384, "uTorrent", &["http://a/announce"]));
    stats.record(metrics(16384, "mktorrent", &[]));
    stats.record(metrics(32768, "uTorrent", &["http://a/announce", "udp://b:80"]));

    assert_eq!(stats.num_torrents, 3);
    assert_eq!(stats.piece_sizes.total(), 3);
    assert_eq!(stats.piece_counts.total(), 3);
    assert_eq!(stats.total_sizes.total(), 3);
    assert_eq!(stats.metadata_sizes.total(), 3);
    assert_eq!(stats.creators.total(), 3);
}

#[test]
fn test_tracker_histogram_counts_per_entry_not_per_file() {
    let mut stats = ScanStats::new();
    stats.record(metrics(16384, "a", &["http://a/announce", "http://b/announce"]));
    stats.record(metrics(16384, "b", &[]));

    assert_eq!(stats.num_torrents, 2);
    // 2 increments from the first file, 0 from the second
    assert_eq!(stats.trackers.total(), 2);
}

#[test]
fn test_piece_size_scenario() {
    // 3 torrents with piece lengths 16384, 16384, 32768
    let mut stats = ScanStats::new();
    stats.record(metrics(16384, "a", &[]));
    stats.record(metrics(16384, "b", &[]));
    stats.record(metrics(32768, "c", &[]));

    assert_eq!(stats.piece_sizes.count(&16384), 2);
    assert_eq!(stats.piece_sizes.count(&32768), 1);
}

//! Report construction and rendering
//!
//! Post-processes accumulated histograms into ordered rows decoupled from
//! the text targets they end up in. Interactive mode prints human-readable
//! tables to one stream; batch mode writes each table to its own
//! fixed-name artifact.
//!
//! Percentages are `count * 100 / num_torrents`. A run with zero parsed
//! torrents never divides: every table renders as "nothing to report".

use crate::error::{Result, ScanError};
use crate::histogram::{Histogram, ScanStats};
use crate::metrics::PIECE_COUNT_QUANTUM;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Fixed artifact names for batch mode
pub const PIECE_SIZE_FILE: &str = "piece_size.dat";
pub const PIECE_COUNT_FILE: &str = "piece_count.dat";
pub const SIZE_FILE: &str = "size.dat";
pub const METADATA_SIZE_FILE: &str = "metadata_size.dat";
pub const CREATOR_FILE: &str = "creator.txt";
pub const TRACKER_FILE: &str = "tracker.txt";

/// One row of a numeric table: the bucket's display value (exact key or
/// midpoint) and its percentage of the torrent population
#[derive(Debug, Clone, PartialEq)]
pub struct NumericRow {
    pub key: i64,
    pub percent: f64,
}

/// One row of a string-keyed table
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRow {
    pub label: String,
    pub percent: f64,
}

/// All tables derived from one scan, ready for rendering.
///
/// Numeric tables are in ascending key order, string tables in descending
/// count order. When `num_torrents` is zero every table is empty.
#[derive(Debug, Clone)]
pub struct Report {
    pub num_torrents: u64,
    pub piece_sizes: Vec<NumericRow>,
    pub piece_counts: Vec<NumericRow>,
    pub total_sizes: Vec<NumericRow>,
    pub total_sizes_cdf: Vec<NumericRow>,
    pub metadata_sizes: Vec<NumericRow>,
    pub creators: Vec<LabelRow>,
    pub trackers: Vec<LabelRow>,
}

impl Report {
    /// Build a report from accumulated stats. `size_quantum_mib` must match
    /// the quantum the stats were bucketed with.
    pub fn from_stats(stats: &ScanStats, size_quantum_mib: u64) -> Self {
        let n = stats.num_torrents;
        if n == 0 {
            return Report::empty();
        }

        let half = size_quantum_mib / 2;
        let total_sizes = numeric_rows(&stats.total_sizes, n, |idx| {
            (idx * size_quantum_mib + half) as i64
        });
        let total_sizes_cdf = cdf_rows(&total_sizes);

        Report {
            num_torrents: n,
            piece_sizes: numeric_rows(&stats.piece_sizes, n, |size| size),
            piece_counts: numeric_rows(&stats.piece_counts, n, |idx| {
                (idx * PIECE_COUNT_QUANTUM + PIECE_COUNT_QUANTUM / 2) as i64
            }),
            total_sizes,
            total_sizes_cdf,
            metadata_sizes: numeric_rows(&stats.metadata_sizes, n, |idx| idx as i64),
            creators: label_rows(&stats.creators, n),
            trackers: label_rows(&stats.trackers, n),
        }
    }

    fn empty() -> Self {
        Report {
            num_torrents: 0,
            piece_sizes: Vec::new(),
            piece_counts: Vec::new(),
            total_sizes: Vec::new(),
            total_sizes_cdf: Vec::new(),
            metadata_sizes: Vec::new(),
            creators: Vec::new(),
            trackers: Vec::new(),
        }
    }
}

/// Rows for a numeric histogram in ascending key order, with each bucket
/// key mapped to its display value by `display_key`
pub fn numeric_rows<K, F>(hist: &Histogram<K>, num_torrents: u64, display_key: F) -> Vec<NumericRow>
where
    K: Ord + Copy,
    F: Fn(K) -> i64,
{
    hist.iter()
        .map(|(&key, count)| NumericRow {
            key: display_key(key),
            percent: percent(count, num_torrents),
        })
        .collect()
}

/// Running sum over `rows`: a CDF ending at 100.0 (within floating-point
/// tolerance) when the rows cover the whole population
pub fn cdf_rows(rows: &[NumericRow]) -> Vec<NumericRow> {
    let mut running = 0.0;
    rows.iter()
        .map(|row| {
            running += row.percent;
            NumericRow {
                key: row.key,
                percent: running,
            }
        })
        .collect()
}

/// Rows for a string histogram, descending by count
pub fn label_rows(hist: &Histogram<String>, num_torrents: u64) -> Vec<LabelRow> {
    hist.sorted_by_count()
        .into_iter()
        .map(|(label, count)| LabelRow {
            label: label.clone(),
            percent: percent(count, num_torrents),
        })
        .collect()
}

fn percent(count: u64, num_torrents: u64) -> f64 {
    debug_assert!(num_torrents > 0);
    count as f64 * 100.0 / num_torrents as f64
}

/// Print every table to `out` in the human-readable layout
pub fn render_interactive<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    if report.num_torrents == 0 {
        writeln!(out, "no torrents processed")?;
        for name in [
            "piece sizes",
            "piece counts",
            "creator",
            "trackers",
            "total size",
            "metadata size",
        ] {
            writeln!(out, "\n{}:\nnothing to report", name)?;
        }
        return Ok(());
    }

    writeln!(out, "\npiece sizes:")?;
    for row in &report.piece_sizes {
        writeln!(out, "{:5} kiB: {:.1} %", row.key / 1024, row.percent)?;
    }

    writeln!(out, "\npiece counts:")?;
    for row in &report.piece_counts {
        writeln!(out, "{:.4} %: {:5} pieces", row.percent, row.key)?;
    }

    writeln!(out, "\ncreator:")?;
    for row in &report.creators {
        writeln!(out, "{:.1} %: {}", row.percent, row.label)?;
    }

    writeln!(out, "\ntrackers:")?;
    for row in &report.trackers {
        writeln!(out, "{:.4} %: {}", row.percent, row.label)?;
    }

    writeln!(out, "\ntotal size:")?;
    for row in &report.total_sizes {
        writeln!(out, "{:.4} %: {:5} MiB", row.percent, row.key)?;
    }

    writeln!(out, "\ntotal size (CDF):")?;
    for row in &report.total_sizes_cdf {
        writeln!(out, "{:.4} %: {:5} MiB", row.percent, row.key)?;
    }

    writeln!(out, "\nmetadata size:")?;
    for row in &report.metadata_sizes {
        writeln!(out, "{:.4} %: {:3} kiB", row.percent, row.key)?;
    }

    Ok(())
}

/// Write the six fixed-name artifacts into `dir`, overwriting existing
/// files. Numeric tables become tab-delimited midpoint/CDF pairs, string
/// tables percentage-then-label lines.
pub fn write_batch(report: &Report, dir: &Path) -> Result<()> {
    write_cdf_file(report, &report.piece_sizes, &dir.join(PIECE_SIZE_FILE))?;
    write_cdf_file(report, &report.piece_counts, &dir.join(PIECE_COUNT_FILE))?;
    write_cdf_file(report, &report.total_sizes, &dir.join(SIZE_FILE))?;
    write_cdf_file(report, &report.metadata_sizes, &dir.join(METADATA_SIZE_FILE))?;
    write_label_file(report, &report.creators, &dir.join(CREATOR_FILE))?;
    write_label_file(report, &report.trackers, &dir.join(TRACKER_FILE))?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ScanError::OutputCreate {
            file: path.to_path_buf(),
            source,
        })
}

fn write_cdf_file(report: &Report, rows: &[NumericRow], path: &Path) -> Result<()> {
    let mut out = create(path)?;
    if report.num_torrents == 0 {
        writeln!(out, "# nothing to report")?;
    } else {
        for row in cdf_rows(rows) {
            writeln!(out, "{}\t{:.4}", row.key, row.percent)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_label_file(report: &Report, rows: &[LabelRow], path: &Path) -> Result<()> {
    let mut out = create(path)?;
    if report.num_torrents == 0 {
        writeln!(out, "# nothing to report")?;
    } else {
        for row in rows {
            writeln!(out, "{:.4} %: {}", row.percent, row.label)?;
        }
    }
    out.flush()?;
    Ok(())
}

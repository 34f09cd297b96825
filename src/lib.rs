//! Frequency statistics over directories of .torrent files.
//!
//! The pipeline is: enumerate candidate files, parse each with the external
//! torrent parser, derive six bucketed metrics, and accumulate them into
//! per-metric histograms that the reporter renders interactively or as
//! delimited data files.

pub mod analysis;
pub mod args;
pub mod descriptor;
pub mod error;
pub mod histogram;
pub mod metrics;
pub mod report;
pub mod scan;

pub use args::parse_args;
pub use descriptor::{DescriptorProvider, LavaProvider, ParseError, TorrentDescriptor};
pub use error::ScanError;
pub use histogram::{Histogram, ScanStats};
pub use metrics::TorrentMetrics;
pub use report::Report;

//! Torrent descriptor extraction
//!
//! All bencode and torrent-info decoding is delegated to `lava_torrent`.
//! The parser sits behind the [`DescriptorProvider`] trait so the
//! aggregation pipeline can be driven by a stub in tests without touching
//! the real torrent format.

use lava_torrent::bencode::BencodeElem;
use lava_torrent::torrent::v1::Torrent;
use thiserror::Error;

/// Diagnostic reported by a descriptor provider for unparsable input
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ParseError(pub String);

/// The fields of a parsed .torrent file consumed by the metric extractor.
///
/// One descriptor is built per successfully parsed file and dropped right
/// after its metrics are recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct TorrentDescriptor {
    /// Piece size in bytes
    pub piece_length: i64,
    /// Number of pieces
    pub piece_count: usize,
    /// Total content size in bytes
    pub total_size: u64,
    /// The `created by` tag, empty when the torrent carries none
    pub creator: String,
    /// Announce URLs, flattened across tiers
    pub trackers: Vec<String>,
}

/// Opaque parser interface: raw file bytes in, descriptor or diagnostic out
pub trait DescriptorProvider {
    fn parse(&self, bytes: &[u8]) -> Result<TorrentDescriptor, ParseError>;
}

/// Descriptor provider backed by `lava_torrent`
#[derive(Debug, Default, Clone, Copy)]
pub struct LavaProvider;

impl DescriptorProvider for LavaProvider {
    fn parse(&self, bytes: &[u8]) -> Result<TorrentDescriptor, ParseError> {
        let torrent =
            Torrent::read_from_bytes(bytes).map_err(|err| ParseError(err.to_string()))?;
        Ok(TorrentDescriptor::from(torrent))
    }
}

impl From<Torrent> for TorrentDescriptor {
    fn from(torrent: Torrent) -> Self {
        let creator = match torrent
            .extra_fields
            .as_ref()
            .and_then(|fields| fields.get("created by"))
        {
            Some(BencodeElem::String(name)) => name.clone(),
            _ => String::new(),
        };

        // The announce-list (BEP 12) supersedes the single announce URL
        // when present.
        let trackers = match &torrent.announce_list {
            Some(tiers) => tiers.iter().flatten().cloned().collect(),
            None => torrent.announce.clone().into_iter().collect(),
        };

        TorrentDescriptor {
            piece_length: torrent.piece_length,
            piece_count: torrent.pieces.len(),
            total_size: torrent.length.max(0) as u64,
            creator,
            trackers,
        }
    }
}

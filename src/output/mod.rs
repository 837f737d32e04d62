//! Archive output for Vestnik
//!
//! Accepted pages are persisted as numbered files in the output directory;
//! the run ends with a single tab-separated index write mapping sequence
//! numbers back to source URLs.

mod archive;

pub use archive::{page_filename, ArchiveWriter};

/// One line of the index file: which saved file came from which URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    /// 1-based, dense sequence number assigned at acceptance
    pub sequence: u32,

    /// The URL the page was fetched from
    pub url: String,
}

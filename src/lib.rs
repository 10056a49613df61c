//! Structured parsing of 7-Zip report text.
//!
//! The `7z` command line tool has no machine-readable output mode. Its
//! technical listing (`7z l -slt`), its create/update summaries and its
//! diagnostics are human-oriented text. This crate turns a fully captured
//! report into typed values:
//!
//! - [`parse_listing`] - an [`Archive`] (7z, tar or zip) with its entries
//! - [`parse_create`] / [`parse_update`] - added/kept/deleted stats
//! - [`extract_error`] - the first error or warning block of a failed run
//! - [`parse`] - any of the above, picked from the report's banner line
//!
//! Running the archiver is left to the caller; every function here is a pure
//! function of its input and safe to call from any number of threads.
//!
//! ## Features
//! - `serde` - `Serialize`/`Deserialize` for all result types
//!
//! ## Example
//!
//! ```rust
//! let report = "\
//! Updating archive: source.tar
//!
//! --
//! Path = source.tar
//! Type = tar
//! Physical Size = 13312
//!
//! Add new data to archive: 3 folders, 6 files, 6865 bytes (7 KiB)
//!
//! Archive size: 13312 bytes (13 KiB)
//! ";
//! let result = sevenz_report::parse_update(report).unwrap();
//! assert_eq!(result.added.files, 6);
//! assert!(result.previous.is_none());
//! ```

pub mod error;
pub mod formats;
mod listing;
mod nested;
mod operation;
pub mod parsing;

pub use error::{ParseError, Result};
pub use formats::{ArchiveKind, ContainerKind, Operation};
pub use listing::{
    Archive, ArchiveInfo, ListingParser, ParseOptions, SevenZipArchive, TarArchive, ZipArchive,
};
pub use nested::{resolve_nested, NestedArchive};
pub use operation::{CreateReportParser, CreateResult, UpdateReportParser, UpdateResult};
pub use parsing::{
    ArchiveStats, ContainerInfo, EntryRef, ErrorExtractor, SevenZipEntry, TarEntry, ZipEntry,
};

/// Any report this crate understands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Report {
    Listing(Archive),
    Create(CreateResult),
    Update(UpdateResult),
}

impl Report {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Listing(_) => Operation::List,
            Self::Create(_) => Operation::Create,
            Self::Update(_) => Operation::Update,
        }
    }
}

/// Parse a report of any supported operation, dispatching on its banner.
pub fn parse(text: &str) -> Result<Report> {
    let banner = parsing::HeaderClassifier::banner(text)?;
    match banner.operation {
        Operation::List => parse_listing(text).map(Report::Listing),
        Operation::Create => parse_create(text).map(Report::Create),
        Operation::Update => parse_update(text).map(Report::Update),
    }
}

/// Parse a technical listing (`7z l -slt`).
pub fn parse_listing(text: &str) -> Result<Archive> {
    ListingParser::parse(text, &ParseOptions::default())
}

/// Parse a technical listing, keeping only the entries `opts` selects.
pub fn parse_listing_with(text: &str, opts: &ParseOptions) -> Result<Archive> {
    ListingParser::parse(text, opts)
}

/// Parse the stdout of a run that created a new archive.
pub fn parse_create(text: &str) -> Result<CreateResult> {
    CreateReportParser::parse(text)
}

/// Parse the stdout of a run that updated (added to or deleted from) an
/// existing archive.
pub fn parse_update(text: &str) -> Result<UpdateResult> {
    UpdateReportParser::parse(text)
}

/// First error/warning block of combined stdout+stderr, verbatim.
pub fn extract_error(text: &str) -> Option<String> {
    ErrorExtractor::extract(text)
}

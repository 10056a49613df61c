//! Entry mappers, one per archive kind.
//!
//! Each kind owns a field table: the list of report keys it understands and
//! a `from_record` that reads them with the coercions the kind needs. Keys
//! outside the table are ignored, so newer archiver versions that print
//! extra fields still parse.

mod sevenzip;
mod tar;
mod zip;

pub use sevenzip::SevenZipEntry;
pub use tar::TarEntry;
pub use zip::ZipEntry;

use super::record::Record;
use crate::error::Result;
use crate::formats::ArchiveKind;

/// Maps one entry segment onto a typed entry.
pub trait FromRecord: Sized {
    const KIND: ArchiveKind;

    /// Keys this mapper reads.
    ///
    /// The table only drives diagnostics (tracing of ignored keys). It must
    /// list every key `from_record` reads.
    const FIELDS: &'static [&'static str];

    fn from_record(record: &Record<'_>) -> Result<Self>;

    /// Map a record, tracing the keys the table does not cover.
    fn map(record: &Record<'_>) -> Result<Self> {
        for (key, _) in record.fields() {
            if !Self::FIELDS.contains(&key) {
                tracing::trace!(kind = %Self::KIND, key, "ignoring unknown entry field");
            }
        }
        Self::from_record(record)
    }
}

/// Folder test for a Windows attribute string such as `D`, `RD` or
/// `HD_ drwxr-xr-x`.
///
/// The attribute letters are printed in bit order, so `D` can sit anywhere in
/// the leading token. When that token is empty the Unix mode after it decides.
pub(crate) fn attributes_mark_folder(attributes: &str) -> bool {
    let (windows, unix) = attributes
        .split_once(' ')
        .map_or((attributes, ""), |(windows, unix)| (windows, unix.trim()));
    let windows = windows.split('_').next().unwrap_or_default();
    if windows.is_empty() {
        unix.starts_with('d')
    } else {
        windows.contains('D')
    }
}

/// Borrowed view over an entry of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef<'a> {
    SevenZip(&'a SevenZipEntry),
    Tar(&'a TarEntry),
    Zip(&'a ZipEntry),
}

impl<'a> EntryRef<'a> {
    pub fn kind(&self) -> ArchiveKind {
        match self {
            Self::SevenZip(_) => ArchiveKind::SevenZip,
            Self::Tar(_) => ArchiveKind::Tar,
            Self::Zip(_) => ArchiveKind::Zip,
        }
    }

    pub fn path(&self) -> &'a str {
        match self {
            Self::SevenZip(e) => &e.path,
            Self::Tar(e) => &e.path,
            Self::Zip(e) => &e.path,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Self::SevenZip(e) => e.size,
            Self::Tar(e) => e.size,
            Self::Zip(e) => e.size,
        }
    }

    pub fn packed_size(&self) -> Option<u64> {
        match self {
            Self::SevenZip(e) => e.packed_size,
            Self::Tar(e) => e.packed_size,
            Self::Zip(e) => e.packed_size,
        }
    }

    pub fn modified(&self) -> Option<&'a str> {
        match self {
            Self::SevenZip(e) => e.modified.as_deref(),
            Self::Tar(e) => e.modified.as_deref(),
            Self::Zip(e) => e.modified.as_deref(),
        }
    }

    pub fn is_folder(&self) -> bool {
        match self {
            Self::SevenZip(e) => e.folder,
            Self::Tar(e) => e.folder,
            Self::Zip(e) => e.folder,
        }
    }

    /// Whether the entry's data is encrypted. Tar has no encryption.
    pub fn is_encrypted(&self) -> bool {
        match self {
            Self::SevenZip(e) => e.encrypted,
            Self::Tar(_) => false,
            Self::Zip(e) => e.encrypted,
        }
    }
}

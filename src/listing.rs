//! Listing parser - technical archive listings into typed archives.

use std::iter::Peekable;

use crate::error::{ParseError, Result};
use crate::formats::{ArchiveKind, Operation};
use crate::parsing::entry::{EntryRef, FromRecord, SevenZipEntry, TarEntry, ZipEntry};
use crate::parsing::header::{ContainerInfo, HeaderClassifier, ListingHeader};
use crate::parsing::record::Record;
use crate::parsing::segment::Segments;

/// Filter options for listing.
#[derive(Default)]
pub struct ParseOptions {
    /// Filter function: return true to keep an entry (path, entry index).
    pub filter: Option<Box<dyn Fn(&str, usize) -> bool + Send + Sync>>,
    /// Maximum number of entries to return.
    pub max_entries: Option<usize>,
}

impl ParseOptions {
    fn keeps(&self, path: &str, index: usize) -> bool {
        self.filter.as_ref().is_none_or(|filter| filter(path, index))
    }
}

impl std::fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseOptions")
            .field("filter", &self.filter.is_some())
            .field("max_entries", &self.max_entries)
            .finish()
    }
}

/// Header fields every archive kind reports.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchiveInfo {
    pub path: String,
    pub physical_size: u64,
    pub headers_size: Option<u64>,
    /// Entries the archiver listed, before any filter or limit was applied.
    pub listed_entries: usize,
    /// Non key-value lines the archiver printed inside the header block.
    pub warnings: Vec<String>,
    pub container: Option<ContainerInfo>,
}

impl ArchiveInfo {
    fn from_header(record: &Record<'_>, container: Option<ContainerInfo>) -> Result<Self> {
        let warnings: Vec<String> = record.notes().iter().map(|s| s.to_string()).collect();
        if !warnings.is_empty() {
            tracing::warn!(?warnings, "archiver reported warnings in the archive header");
        }
        Ok(Self {
            path: record.required("Path")?.to_string(),
            physical_size: record.required_number("Physical Size")?,
            headers_size: record.number("Headers Size")?,
            listed_entries: 0,
            warnings,
            container,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SevenZipArchive {
    pub info: ArchiveInfo,
    /// Coders used across the archive, e.g. `["LZMA2:24", "7zAES"]`.
    pub method: Vec<String>,
    pub solid: bool,
    pub blocks: Option<u64>,
    pub entries: Vec<SevenZipEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TarArchive {
    pub info: ArchiveInfo,
    pub code_page: Option<String>,
    /// Header flavour, e.g. `GNU ASCII` or `POSIX ASCII`.
    pub characteristics: Option<String>,
    pub entries: Vec<TarEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZipArchive {
    pub info: ArchiveInfo,
    pub entries: Vec<ZipEntry>,
}

/// A listed archive. Entries always match the archive's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Archive {
    #[cfg_attr(feature = "serde", serde(rename = "7z"))]
    SevenZip(SevenZipArchive),
    Tar(TarArchive),
    Zip(ZipArchive),
}

impl Archive {
    pub fn kind(&self) -> ArchiveKind {
        match self {
            Self::SevenZip(_) => ArchiveKind::SevenZip,
            Self::Tar(_) => ArchiveKind::Tar,
            Self::Zip(_) => ArchiveKind::Zip,
        }
    }

    pub fn info(&self) -> &ArchiveInfo {
        match self {
            Self::SevenZip(a) => &a.info,
            Self::Tar(a) => &a.info,
            Self::Zip(a) => &a.info,
        }
    }

    pub fn path(&self) -> &str {
        &self.info().path
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::SevenZip(a) => a.entries.len(),
            Self::Tar(a) => a.entries.len(),
            Self::Zip(a) => a.entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entry(&self, index: usize) -> Option<EntryRef<'_>> {
        match self {
            Self::SevenZip(a) => a.entries.get(index).map(EntryRef::SevenZip),
            Self::Tar(a) => a.entries.get(index).map(EntryRef::Tar),
            Self::Zip(a) => a.entries.get(index).map(EntryRef::Zip),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = EntryRef<'_>> + '_ {
        (0..self.len()).filter_map(move |index| self.entry(index))
    }

    /// Sum of unpacked sizes.
    pub fn total_size(&self) -> u64 {
        self.entries().map(|e| e.size()).sum()
    }
}

pub struct ListingParser;

impl ListingParser {
    pub fn parse(text: &str, opts: &ParseOptions) -> Result<Archive> {
        let banner = HeaderClassifier::banner(text)?;
        if banner.operation != Operation::List {
            return Err(ParseError::UnrecognizedHeader(format!(
                "expected a listing, found '{}'",
                banner.operation.banner()
            )));
        }

        let (header, mut segments) = HeaderClassifier::classify(text)?;
        let ListingHeader {
            kind,
            record,
            container,
        } = header;
        let mut info = ArchiveInfo::from_header(&record, container)?;

        let archive = match kind {
            ArchiveKind::SevenZip => {
                let entries = Self::entries(&mut segments, opts, &mut info)?;
                Archive::SevenZip(SevenZipArchive {
                    info,
                    method: record.tokens("Method"),
                    solid: record.flag("Solid"),
                    blocks: record.number("Blocks")?,
                    entries,
                })
            }
            ArchiveKind::Tar => {
                let entries = Self::entries(&mut segments, opts, &mut info)?;
                Archive::Tar(TarArchive {
                    info,
                    code_page: record.text_value("Code Page"),
                    characteristics: record.text_value("Characteristics"),
                    entries,
                })
            }
            ArchiveKind::Zip => {
                let entries = Self::entries(&mut segments, opts, &mut info)?;
                Archive::Zip(ZipArchive { info, entries })
            }
        };

        tracing::debug!(
            kind = %archive.kind(),
            path = archive.path(),
            entries = archive.len(),
            listed = archive.info().listed_entries,
            "parsed archive listing"
        );
        Ok(archive)
    }

    /// Map every remaining segment that carries fields, applying the filter
    /// and limit after mapping. The unfiltered count lands in `info`.
    fn entries<E: FromRecord>(
        segments: &mut Peekable<Segments<'_>>,
        opts: &ParseOptions,
        info: &mut ArchiveInfo,
    ) -> Result<Vec<E>> {
        let mut entries = Vec::new();
        let mut index = 0usize;

        for segment in segments {
            let record = segment.record();
            if record.is_empty() {
                tracing::trace!(index = segment.index, "skipping segment without fields");
                continue;
            }
            let entry = E::map(&record)?;
            let path = record.get("Path").unwrap_or_default();
            let keep = opts.keeps(path, index)
                && opts.max_entries.is_none_or(|max| entries.len() < max);
            if keep {
                entries.push(entry);
            }
            index += 1;
        }

        info.listed_entries = index;
        Ok(entries)
    }
}

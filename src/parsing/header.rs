//! Header classifier.
//!
//! A report announces its operation with a banner line (`Listing archive:`,
//! `Creating archive:`, `Updating archive:`). The archive itself is described
//! by a key-value block introduced by a dash separator and carrying a `Type`
//! field. When the archiver looked through a stream container first, two such
//! blocks follow each other: the container, then the archive inside it.

use std::iter::Peekable;

use super::record::Record;
use super::segment::{Segment, Segments};
use crate::error::{ParseError, Result};
use crate::formats::{ArchiveKind, ContainerKind, Operation};

/// The operation banner of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner<'a> {
    pub operation: Operation,
    /// Archive path as printed after the colon.
    pub path: &'a str,
}

/// Stream container the listed archive was wrapped in (e.g. `.tar.gz`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerInfo {
    pub path: String,
    pub kind: ContainerKind,
    pub physical_size: Option<u64>,
    pub headers_size: Option<u64>,
}

impl ContainerInfo {
    fn from_record(kind: ContainerKind, record: &Record<'_>) -> Result<Self> {
        Ok(Self {
            path: record.required("Path")?.to_string(),
            kind,
            physical_size: record.number("Physical Size")?,
            headers_size: record.number("Headers Size")?,
        })
    }
}

/// The classified header region of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingHeader<'a> {
    pub kind: ArchiveKind,
    /// Header block of the archive whose entries follow.
    pub record: Record<'a>,
    pub container: Option<ContainerInfo>,
}

/// A segment that describes an archive rather than banner text or an entry.
pub fn is_header(segment: &Segment<'_>) -> bool {
    segment.boundary.is_separator() && segment.record().contains("Type")
}

pub struct HeaderClassifier;

impl HeaderClassifier {
    /// Find the first operation banner line.
    pub fn banner(text: &str) -> Result<Banner<'_>> {
        let (operation, path) = text
            .lines()
            .find_map(Operation::from_line)
            .ok_or_else(|| ParseError::unrecognized(text))?;
        if path.is_empty() {
            return Err(ParseError::missing("archive path", text.trim()));
        }
        Ok(Banner { operation, path })
    }

    /// Locate and classify the header block(s) of a listing.
    ///
    /// Returns the header together with the remaining segments, which are the
    /// entry blocks.
    pub fn classify(text: &str) -> Result<(ListingHeader<'_>, Peekable<Segments<'_>>)> {
        let mut segments = Segments::new(text).peekable();

        let first = loop {
            let segment = segments
                .next()
                .ok_or_else(|| ParseError::unrecognized(text))?;
            if is_header(&segment) {
                break segment.record();
            }
            tracing::trace!(index = segment.index, "skipping preamble segment");
        };

        let mut records = vec![first];
        while let Some(segment) = segments.next_if(is_header) {
            records.push(segment.record());
        }
        if records.len() > 2 {
            tracing::debug!(
                depth = records.len(),
                "only the outermost container and innermost archive headers are kept"
            );
        }

        let record = records.pop().ok_or_else(|| ParseError::unrecognized(text))?;
        let kind = Self::archive_kind(&record)?;
        let container = match records.first() {
            Some(outer) => {
                let type_name = outer.required("Type")?;
                let container_kind = ContainerKind::from_type_name(type_name)
                    .ok_or_else(|| ParseError::UnrecognizedHeader(type_name.to_string()))?;
                Some(ContainerInfo::from_record(container_kind, outer)?)
            }
            None => None,
        };

        Ok((
            ListingHeader {
                kind,
                record,
                container,
            },
            segments,
        ))
    }

    /// Archive kind named by a header block's `Type` field.
    pub fn archive_kind(record: &Record<'_>) -> Result<ArchiveKind> {
        let type_name = record.required("Type")?;
        ArchiveKind::from_type_name(type_name).ok_or_else(|| {
            if ContainerKind::from_type_name(type_name).is_some() {
                ParseError::UnrecognizedHeader(format!(
                    "{} container without an inner archive",
                    type_name
                ))
            } else {
                ParseError::UnrecognizedHeader(type_name.to_string())
            }
        })
    }

    /// First archive header block anywhere in the report, if any.
    pub fn find_header(text: &str) -> Option<Record<'_>> {
        Segments::new(text)
            .find(is_header)
            .map(|segment| segment.record())
    }
}

//! Create and update report parsers.
//!
//! An update report first describes the archive as it was opened (the same
//! `--` header block a listing prints), then the stats of what was kept,
//! deleted and added, then the final archive size. A create report has no
//! header block at all.

use crate::error::{ParseError, Result};
use crate::formats::Operation;
use crate::parsing::header::HeaderClassifier;
use crate::parsing::stats::{ArchiveStats, StatsExtractor, StatsLine};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateResult {
    pub path: String,
    /// Final archive size in bytes.
    pub size: u64,
    pub added: ArchiveStats,
    pub files_read: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateResult {
    pub path: String,
    /// Final archive size in bytes.
    pub size: u64,
    /// `Type` of the opened archive, as printed (`tar`, `7z`, `zip`, ...).
    pub archive_type: String,
    /// Physical size of the archive before the update.
    pub physical_size: u64,
    pub headers_size: Option<u64>,
    pub code_page: Option<String>,
    pub characteristics: Option<String>,
    /// Data kept from the old archive.
    pub previous: Option<ArchiveStats>,
    pub deleted: Option<ArchiveStats>,
    pub added: ArchiveStats,
    pub files_read: Option<u64>,
}

fn expect_operation(text: &str, expected: Operation) -> Result<&str> {
    let banner = HeaderClassifier::banner(text)?;
    if banner.operation != expected {
        return Err(ParseError::UnrecognizedHeader(format!(
            "expected '{}', found '{}'",
            expected.banner(),
            banner.operation.banner()
        )));
    }
    Ok(banner.path)
}

pub struct CreateReportParser;

impl CreateReportParser {
    pub fn parse(text: &str) -> Result<CreateResult> {
        let path = expect_operation(text, Operation::Create)?;
        let result = CreateResult {
            path: path.to_string(),
            size: StatsExtractor::archive_size(text)?,
            added: StatsExtractor::added(text)?,
            files_read: StatsExtractor::files_read(text)?,
        };
        tracing::debug!(path = %result.path, size = result.size, "parsed create report");
        Ok(result)
    }
}

pub struct UpdateReportParser;

impl UpdateReportParser {
    pub fn parse(text: &str) -> Result<UpdateResult> {
        let path = expect_operation(text, Operation::Update)?;
        let header = HeaderClassifier::find_header(text)
            .ok_or_else(|| ParseError::missing("Type", text.trim()))?;

        let result = UpdateResult {
            path: path.to_string(),
            size: StatsExtractor::archive_size(text)?,
            archive_type: header.required("Type")?.to_string(),
            physical_size: header.required_number("Physical Size")?,
            headers_size: header.number("Headers Size")?,
            code_page: header.text_value("Code Page"),
            characteristics: header.text_value("Characteristics"),
            previous: StatsExtractor::extract(text, StatsLine::Keep)?,
            deleted: StatsExtractor::extract(text, StatsLine::Delete)?,
            added: StatsExtractor::added(text)?,
            files_read: StatsExtractor::files_read(text)?,
        };
        tracing::debug!(
            path = %result.path,
            size = result.size,
            kept = result.previous.is_some(),
            deleted = result.deleted.is_some(),
            "parsed update report"
        );
        Ok(result)
    }
}

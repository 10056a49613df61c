//! Stats extractor for create/update reports.
//!
//! ```text
//! Keep old data in archive: 3 folders, 8 files, 12585 bytes (13 KiB)
//! Delete data from archive: 1 file, 74192 bytes (73 KiB)
//! Add new data to archive: 0 files, 0 bytes
//!
//! Files read from disk: 7
//! Archive size: 2867200 bytes (2800 KiB)
//! ```
//!
//! The folder clause is dropped by the archiver when the count is zero.
//! The patterns are compiled once and shared read-only; every call gets
//! its own capture state.

use std::sync::LazyLock;

use regex::Regex;

use super::record::parse_decimal;
use crate::error::{ParseError, Result};

/// Folders, files and bytes affected by one step of a create/update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchiveStats {
    pub folders: u64,
    pub files: u64,
    pub bytes: u64,
}

impl ArchiveStats {
    pub fn new(folders: u64, files: u64, bytes: u64) -> Self {
        Self {
            folders,
            files,
            bytes,
        }
    }
}

/// The three stats lines an update report can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsLine {
    Add,
    Keep,
    Delete,
}

impl StatsLine {
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add new data to archive",
            Self::Keep => "Keep old data in archive",
            Self::Delete => "Delete data from archive",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Add => &*ADD,
            Self::Keep => &*KEEP,
            Self::Delete => &*DELETE,
        }
    }
}

fn stats_pattern(label: &str) -> Regex {
    let pattern = format!(
        r"(?m)^[ \t]*{}:[ \t]*(?:(\d+) folders?,[ \t]*)?(\d+) files?,[ \t]*(\d+) bytes?\b",
        regex::escape(label)
    );
    Regex::new(&pattern).expect("stats pattern is valid")
}

static ADD: LazyLock<Regex> = LazyLock::new(|| stats_pattern(StatsLine::Add.label()));
static KEEP: LazyLock<Regex> = LazyLock::new(|| stats_pattern(StatsLine::Keep.label()));
static DELETE: LazyLock<Regex> = LazyLock::new(|| stats_pattern(StatsLine::Delete.label()));

static ARCHIVE_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*Archive size:[ \t]*(\d+) bytes?\b")
        .expect("size pattern is valid")
});

static FILES_READ: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*Files read from disk:[ \t]*(\d+)")
        .expect("files-read pattern is valid")
});

pub struct StatsExtractor;

impl StatsExtractor {
    /// Stats from the first line of the given type, or `None` if the report
    /// has no such line.
    pub fn extract(text: &str, line: StatsLine) -> Result<Option<ArchiveStats>> {
        let Some(caps) = line.pattern().captures(text) else {
            return Ok(None);
        };
        let folders = match caps.get(1) {
            Some(m) => parse_decimal("folders", m.as_str())?,
            None => 0,
        };
        Ok(Some(ArchiveStats {
            folders,
            files: parse_decimal("files", &caps[2])?,
            bytes: parse_decimal("bytes", &caps[3])?,
        }))
    }

    /// The `Add new data to archive` stats, which every create/update report
    /// prints.
    pub fn added(text: &str) -> Result<ArchiveStats> {
        Self::extract(text, StatsLine::Add)?
            .ok_or_else(|| ParseError::missing("Add new data to archive", text.trim()))
    }

    /// Final archive size from `Archive size: N bytes`.
    pub fn archive_size(text: &str) -> Result<u64> {
        let caps = ARCHIVE_SIZE
            .captures(text)
            .ok_or_else(|| ParseError::missing("Archive size", text.trim()))?;
        parse_decimal("Archive size", &caps[1])
    }

    pub fn files_read(text: &str) -> Result<Option<u64>> {
        FILES_READ
            .captures(text)
            .map(|caps| parse_decimal("Files read from disk", &caps[1]))
            .transpose()
    }
}

//! Tar entry mapper.
//!
//! Older archiver versions print an explicit `Folder = +/-` marker; newer ones
//! drop it for some header flavours, in which case the folder flag comes from
//! the first character of `Mode` (`drwxr-xr-x`). Ownerless entries omit
//! `User ID`/`Group ID`, which then read as 0.

use super::FromRecord;
use crate::error::Result;
use crate::formats::ArchiveKind;
use crate::parsing::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TarEntry {
    pub path: String,
    pub folder: bool,
    pub size: u64,
    pub packed_size: Option<u64>,
    pub modified: Option<String>,
    pub created: Option<String>,
    pub accessed: Option<String>,
    /// Unix mode string, e.g. `-rw-r--r--`.
    pub mode: Option<String>,
    pub user: Option<String>,
    pub group: Option<String>,
    pub user_id: u64,
    pub group_id: u64,
    pub symbolic_link: Option<String>,
    pub hard_link: Option<String>,
    pub characteristics: Option<String>,
    pub host_os: Option<String>,
    pub device_major: Option<u64>,
    pub device_minor: Option<u64>,
}

impl TarEntry {
    pub fn is_link(&self) -> bool {
        self.symbolic_link.is_some() || self.hard_link.is_some()
    }
}

impl FromRecord for TarEntry {
    const KIND: ArchiveKind = ArchiveKind::Tar;

    const FIELDS: &'static [&'static str] = &[
        "Path",
        "Folder",
        "Size",
        "Packed Size",
        "Modified",
        "Created",
        "Accessed",
        "Mode",
        "User",
        "Group",
        "User ID",
        "Group ID",
        "Symbolic Link",
        "Hard Link",
        "Characteristics",
        "Host OS",
        "Device Major",
        "Device Minor",
    ];

    fn from_record(record: &Record<'_>) -> Result<Self> {
        let mode = record.text_value("Mode");
        let folder = record.marker("Folder").unwrap_or_else(|| {
            mode.as_deref().is_some_and(|mode| mode.starts_with('d'))
        });

        Ok(Self {
            path: record.required("Path")?.to_string(),
            folder,
            size: record.required_number("Size")?,
            packed_size: record.number("Packed Size")?,
            modified: record.text_value("Modified"),
            created: record.text_value("Created"),
            accessed: record.text_value("Accessed"),
            mode,
            user: record.text_value("User"),
            group: record.text_value("Group"),
            user_id: record.number("User ID")?.unwrap_or(0),
            group_id: record.number("Group ID")?.unwrap_or(0),
            symbolic_link: record.text_value("Symbolic Link"),
            hard_link: record.text_value("Hard Link"),
            characteristics: record.text_value("Characteristics"),
            host_os: record.text_value("Host OS"),
            device_major: record.number("Device Major")?,
            device_minor: record.number("Device Minor")?,
        })
    }
}

//! 7z entry mapper.
//!
//! A 7z technical listing prints, per entry:
//!
//! ```text
//! Path = docs/readme.txt
//! Size = 1024
//! Packed Size = 412
//! Modified = 2018-03-08 09:48:54
//! Attributes = A_ -rw-r--r--
//! CRC = 9A2B3C4D
//! Encrypted = -
//! Method = LZMA2:24
//! Block = 0
//! ```
//!
//! Entries inside a solid block after the first print an empty `Packed Size`.
//! Folders have no `CRC`, `Method` or `Block`.

use super::{attributes_mark_folder, FromRecord};
use crate::error::Result;
use crate::formats::ArchiveKind;
use crate::parsing::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SevenZipEntry {
    pub path: String,
    pub size: u64,
    pub packed_size: Option<u64>,
    pub modified: Option<String>,
    pub created: Option<String>,
    pub accessed: Option<String>,
    /// Raw attribute text, e.g. `A` or `D_ drwxr-xr-x`.
    pub attributes: Option<String>,
    pub crc: Option<u32>,
    pub encrypted: bool,
    /// Coder chain, one opaque token per coder (`LZMA2:24`, `7zAES:19`).
    pub method: Vec<String>,
    /// Index of the solid block holding the entry's data.
    pub block: Option<u64>,
    pub folder: bool,
}

impl FromRecord for SevenZipEntry {
    const KIND: ArchiveKind = ArchiveKind::SevenZip;

    const FIELDS: &'static [&'static str] = &[
        "Path",
        "Folder",
        "Size",
        "Packed Size",
        "Modified",
        "Created",
        "Accessed",
        "Attributes",
        "CRC",
        "Encrypted",
        "Method",
        "Block",
    ];

    fn from_record(record: &Record<'_>) -> Result<Self> {
        let attributes = record.text_value("Attributes");
        let folder = record
            .marker("Folder")
            .unwrap_or_else(|| attributes.as_deref().is_some_and(attributes_mark_folder));

        Ok(Self {
            path: record.required("Path")?.to_string(),
            size: record.required_number("Size")?,
            packed_size: record.number("Packed Size")?,
            modified: record.text_value("Modified"),
            created: record.text_value("Created"),
            accessed: record.text_value("Accessed"),
            attributes,
            crc: record.hex("CRC")?,
            encrypted: record.flag("Encrypted"),
            method: record.tokens("Method"),
            block: record.number("Block")?,
            folder,
        })
    }
}

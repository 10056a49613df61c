//! Zip entry mapper.

use super::{attributes_mark_folder, FromRecord};
use crate::error::Result;
use crate::formats::ArchiveKind;
use crate::parsing::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZipEntry {
    pub path: String,
    pub folder: bool,
    pub size: u64,
    pub packed_size: Option<u64>,
    pub modified: Option<String>,
    pub created: Option<String>,
    pub accessed: Option<String>,
    pub attributes: Option<String>,
    pub encrypted: bool,
    pub comment: Option<String>,
    pub crc: Option<u32>,
    /// Method tokens, e.g. `["ZipCrypto", "Deflate"]` or `["AES-256", "Deflate"]`.
    pub method: Vec<String>,
    pub characteristics: Option<String>,
    pub host_os: Option<String>,
    /// "Version needed to extract" from the local header.
    pub version: Option<u64>,
    pub volume_index: Option<u64>,
    /// Offset of the local header within the archive.
    pub offset: Option<u64>,
}

impl FromRecord for ZipEntry {
    const KIND: ArchiveKind = ArchiveKind::Zip;

    const FIELDS: &'static [&'static str] = &[
        "Path",
        "Folder",
        "Size",
        "Packed Size",
        "Modified",
        "Created",
        "Accessed",
        "Attributes",
        "Encrypted",
        "Comment",
        "CRC",
        "Method",
        "Characteristics",
        "Host OS",
        "Version",
        "Volume Index",
        "Offset",
    ];

    fn from_record(record: &Record<'_>) -> Result<Self> {
        let attributes = record.text_value("Attributes");
        let folder = record
            .marker("Folder")
            .unwrap_or_else(|| attributes.as_deref().is_some_and(attributes_mark_folder));

        Ok(Self {
            path: record.required("Path")?.to_string(),
            folder,
            size: record.required_number("Size")?,
            packed_size: record.number("Packed Size")?,
            modified: record.text_value("Modified"),
            created: record.text_value("Created"),
            accessed: record.text_value("Accessed"),
            attributes,
            encrypted: record.flag("Encrypted"),
            comment: record.text_value("Comment"),
            crc: record.hex("CRC")?,
            method: record.tokens("Method"),
            characteristics: record.text_value("Characteristics"),
            host_os: record.text_value("Host OS"),
            version: record.number("Version")?,
            volume_index: record.number("Volume Index")?,
            offset: record.number("Offset")?,
        })
    }
}

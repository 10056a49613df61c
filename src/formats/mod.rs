//! Archive kinds, container kinds and report operations.
//!
//! The archiver names formats in the `Type = <name>` header field and names the
//! operation in a banner line such as `Listing archive: foo.7z`.

use std::fmt;

/// Archive formats whose entries this crate maps into typed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArchiveKind {
    SevenZip,
    Tar,
    Zip,
}

impl ArchiveKind {
    pub const ALL: [ArchiveKind; 3] = [Self::SevenZip, Self::Tar, Self::Zip];

    /// Kind named by a `Type` header value.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name.trim() {
            "7z" => Some(Self::SevenZip),
            "tar" => Some(Self::Tar),
            "zip" => Some(Self::Zip),
            _ => None,
        }
    }

    /// The `Type` header value the archiver prints for this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::SevenZip => "7z",
            Self::Tar => "tar",
            Self::Zip => "zip",
        }
    }

    /// Kind implied by a file name's extension (case-insensitive).
    pub fn from_extension(path: &str) -> Option<Self> {
        let ext = path.rsplit_once('.')?.1;
        Self::ALL
            .into_iter()
            .find(|kind| ext.eq_ignore_ascii_case(kind.type_name()))
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Single-stream compression formats the archiver opens transparently
/// before listing the archive inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerKind {
    Gzip,
    Bzip2,
    Xz,
    Zstd,
    Lzma,
}

impl ContainerKind {
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name.trim() {
            "gzip" => Some(Self::Gzip),
            "bzip2" => Some(Self::Bzip2),
            "xz" => Some(Self::Xz),
            "zstd" => Some(Self::Zstd),
            "lzma" => Some(Self::Lzma),
            _ => None,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
            Self::Xz => "xz",
            Self::Zstd => "zstd",
            Self::Lzma => "lzma",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// The operation a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    List,
    Create,
    Update,
}

impl Operation {
    /// Banner prefix announcing the operation, including the trailing colon.
    pub fn banner(self) -> &'static str {
        match self {
            Self::List => "Listing archive:",
            Self::Create => "Creating archive:",
            Self::Update => "Updating archive:",
        }
    }

    /// Match a banner line, returning the operation and the archive path
    /// that follows the colon.
    pub fn from_line(line: &str) -> Option<(Self, &str)> {
        let line = line.trim();
        [Self::List, Self::Create, Self::Update]
            .into_iter()
            .find_map(|op| {
                line.strip_prefix(op.banner())
                    .map(|path| (op, path.trim()))
            })
    }
}

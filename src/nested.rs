//! Nested archive resolution.
//!
//! A common way to protect a tarball is to wrap it in an encrypted 7z. The
//! listing of the wrapper then holds a single entry which is itself an
//! archive. Resolution stops at that entry: listing the inner archive's own
//! contents takes a second archiver run against it.

use crate::formats::ArchiveKind;
use crate::listing::Archive;
use crate::parsing::entry::EntryRef;

/// An archive whose only entry is another archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedArchive<'a> {
    pub outer: &'a Archive,
    pub inner: EntryRef<'a>,
    /// Kind of the inner archive, from its file extension.
    pub inner_kind: ArchiveKind,
}

impl NestedArchive<'_> {
    /// Whether the inner archive's bytes are encrypted by the wrapper.
    pub fn is_encrypted(&self) -> bool {
        self.inner.is_encrypted()
    }
}

/// Recognise a wrapper archive: exactly one listed entry, not a folder,
/// named like an archive of a known kind.
///
/// The count is taken before any listing filter or limit, so a filtered view
/// of a larger archive is never a wrapper.
pub fn resolve_nested(archive: &Archive) -> Option<NestedArchive<'_>> {
    if archive.info().listed_entries != 1 || archive.len() != 1 {
        return None;
    }
    let inner = archive.entry(0)?;
    if inner.is_folder() {
        return None;
    }
    let inner_kind = ArchiveKind::from_extension(inner.path())?;
    tracing::debug!(
        outer = archive.path(),
        inner = inner.path(),
        kind = %inner_kind,
        "resolved nested archive"
    );
    Some(NestedArchive {
        outer: archive,
        inner,
        inner_kind,
    })
}

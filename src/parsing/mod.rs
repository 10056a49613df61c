//! Report text parsing modules.
//!
//! Leaves first: the tokenizer splits text into segments, the record parser
//! reads `Key = Value` pairs out of a segment, the classifier finds the
//! operation and archive kind, and the entry mappers turn records into typed
//! entries. Stats and diagnostics are pulled straight from the raw text.

pub mod diagnostic;
pub mod entry;
pub mod header;
pub mod record;
pub mod segment;
pub mod stats;

#[cfg(test)]
mod tests;

pub use diagnostic::ErrorExtractor;
pub use entry::{EntryRef, FromRecord, SevenZipEntry, TarEntry, ZipEntry};
pub use header::{Banner, ContainerInfo, HeaderClassifier, ListingHeader};
pub use record::Record;
pub use segment::{Boundary, Segment, Segments};
pub use stats::{ArchiveStats, StatsExtractor, StatsLine};

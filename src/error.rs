//! Error types for report parsing.
//!
//! This module provides the [`ParseError`] type which covers every way a
//! captured archiver report can fail to map onto the structured result types.
//!
//! ## Error Categories
//!
//! | Category | Errors | Description |
//! |----------|--------|-------------|
//! | Structure | [`UnrecognizedHeader`] | No operation/kind header, or an unknown `Type` |
//! | Fields | [`MissingField`] | A mandatory field or header line is absent |
//! | Values | [`MalformedNumber`] | A numeric field is not a valid integer |
//!
//! Process failures (spawn errors, non-zero exit codes) never show up here:
//! the parser only ever sees text that was already captured.
//!
//! ## Example
//!
//! ```rust
//! use sevenz_report::{parse_listing, ParseError};
//!
//! match parse_listing("Everything is Ok") {
//!     Ok(archive) => println!("{} entries", archive.len()),
//!     Err(ParseError::UnrecognizedHeader(seen)) => eprintln!("not a listing: {seen}"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! [`UnrecognizedHeader`]: ParseError::UnrecognizedHeader
//! [`MissingField`]: ParseError::MissingField
//! [`MalformedNumber`]: ParseError::MalformedNumber

use std::fmt;

/// Error type for report parsing.
///
/// Callers should treat any variant as a sign of either a malformed report or
/// an archiver version/locale this crate does not understand, and fall back
/// to showing the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A mandatory field or header line could not be located.
    ///
    /// `segment` holds the text of the block that was being mapped, so the
    /// offending input can be shown alongside the error.
    MissingField {
        /// Report key (e.g. `Path`) or line label (e.g. `Archive size`).
        field: &'static str,
        /// Text of the block the field was expected in.
        segment: String,
    },

    /// No interpretable operation/kind header was found.
    ///
    /// The `String` describes what was seen instead: an unknown `Type` value,
    /// or a short excerpt of the report.
    UnrecognizedHeader(String),

    /// A numeric field did not hold a valid integer.
    MalformedNumber {
        /// Report key the value was read from.
        field: &'static str,
        /// The raw token.
        value: String,
    },
}

impl ParseError {
    pub(crate) fn missing(field: &'static str, segment: impl Into<String>) -> Self {
        Self::MissingField {
            field,
            segment: segment.into(),
        }
    }

    pub(crate) fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedNumber {
            field,
            value: value.into(),
        }
    }

    /// Build an [`UnrecognizedHeader`](Self::UnrecognizedHeader) from the
    /// first non-blank line of `text`.
    pub(crate) fn unrecognized(text: &str) -> Self {
        let excerpt = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("<empty report>");
        Self::UnrecognizedHeader(excerpt.to_string())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field, segment } => {
                write!(f, "Missing field '{}' in block:\n{}", field, segment)
            }
            Self::UnrecognizedHeader(seen) => write!(f, "Unrecognized report header: {}", seen),
            Self::MalformedNumber { field, value } => {
                write!(f, "Malformed number in '{}': {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub type Result<T> = std::result::Result<T, ParseError>;

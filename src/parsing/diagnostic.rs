//! Error extractor.
//!
//! Combined stdout+stderr of a failed run mixes banner text with one or more
//! diagnostics. A diagnostic is a run of non-blank lines; runs are separated
//! by blank lines. Only the first run holding an error/warning marker line is
//! returned, verbatim.

use std::sync::LazyLock;

use regex::Regex;

/// `ERROR:`, `WARNINGS:`, `Command Line Error:`, `System ERROR:`, `Errors: 1`, ...
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:[a-z]+\s+){0,2}(?:errors?|warnings?)\s*:")
        .expect("marker pattern is valid")
});

/// One line of input with its byte span (terminator excluded).
struct Line<'a> {
    start: usize,
    end: usize,
    text: &'a str,
}

fn lines_with_offsets(text: &str) -> impl Iterator<Item = Line<'_>> {
    let mut pos = 0;
    text.split_inclusive('\n').map(move |raw| {
        let start = pos;
        pos += raw.len();
        let line = raw.trim_end_matches(['\n', '\r']);
        Line {
            start,
            end: start + line.len(),
            text: line,
        }
    })
}

pub struct ErrorExtractor;

impl ErrorExtractor {
    /// Whether a line opens an error or warning diagnostic.
    pub fn is_marker(line: &str) -> bool {
        MARKER.is_match(line)
    }

    /// The first logical error message, or `None` when the text carries no
    /// error/warning marker.
    pub fn extract(text: &str) -> Option<String> {
        let lines: Vec<Line<'_>> = lines_with_offsets(text).collect();
        let is_blank = |line: &Line<'_>| line.text.trim().is_empty();

        let marker = lines.iter().position(|line| Self::is_marker(line.text))?;
        let first = lines[..marker]
            .iter()
            .rposition(is_blank)
            .map_or(0, |blank| blank + 1);
        let last = lines[marker..]
            .iter()
            .position(is_blank)
            .map_or(lines.len(), |offset| marker + offset)
            - 1;

        tracing::debug!(first, last, "extracted diagnostic block");
        Some(text[lines[first].start..lines[last].end].to_string())
    }
}

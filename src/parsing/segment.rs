//! Block tokenizer.
//!
//! Splits a captured report into segments: maximal runs of lines that are
//! neither blank nor a separator (a line made only of `-`, at least two of
//! them). Each segment remembers what preceded it, which is how the listing
//! parser tells archive header blocks (introduced by `--`/`----`) from
//! banner text (introduced by blank lines).

use std::iter::FusedIterator;

use super::record::Record;

/// What separated a segment from the text before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Nothing but blank lines (or nothing at all) before the segment.
    Start,
    /// One or more blank lines.
    Blank,
    /// A dash separator line; the value is the dash count of the last one.
    Separator(usize),
}

impl Boundary {
    pub fn is_separator(self) -> bool {
        matches!(self, Self::Separator(_))
    }
}

/// One block of consecutive content lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Zero-based position in the segment sequence.
    pub index: usize,
    pub boundary: Boundary,
    /// The block's lines, verbatim, without the final line terminator.
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    pub fn lines(&self) -> std::str::Lines<'a> {
        self.text.lines()
    }

    pub fn record(&self) -> Record<'a> {
        Record::parse(self.text)
    }
}

enum LineKind {
    Blank,
    Separator(usize),
    Content,
}

fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.len() >= 2 && trimmed.bytes().all(|b| b == b'-') {
        LineKind::Separator(trimmed.len())
    } else {
        LineKind::Content
    }
}

/// Lazy, single-pass iterator over the segments of a report.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    input: &'a str,
    pos: usize,
    index: usize,
    pending: Boundary,
}

impl<'a> Segments<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            index: 0,
            pending: Boundary::Start,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let input = self.input;
        let mut boundary = self.pending;
        let mut start = None;
        let mut end = self.pos;

        while self.pos < input.len() {
            let line_end = input[self.pos..]
                .find('\n')
                .map_or(input.len(), |i| self.pos + i + 1);
            let line = input[self.pos..line_end].trim_end_matches(['\n', '\r']);

            match classify(line) {
                LineKind::Content => {
                    start.get_or_insert(self.pos);
                    end = self.pos + line.len();
                }
                LineKind::Blank if start.is_some() => {
                    self.pos = line_end;
                    self.pending = Boundary::Blank;
                    break;
                }
                LineKind::Separator(dashes) if start.is_some() => {
                    self.pos = line_end;
                    self.pending = Boundary::Separator(dashes);
                    break;
                }
                LineKind::Blank => {
                    // A separator followed by blank lines still counts as a separator.
                    if boundary == Boundary::Start && self.index > 0 {
                        boundary = Boundary::Blank;
                    }
                }
                LineKind::Separator(dashes) => boundary = Boundary::Separator(dashes),
            }
            self.pos = line_end;
        }

        let start = start?;
        let segment = Segment {
            index: self.index,
            boundary,
            text: &input[start..end],
        };
        self.index += 1;
        Some(segment)
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_separator_boundaries() {
        let text = "banner line\nsecond\n\n--\nPath = a.7z\nType = 7z\n\n----------\nPath = x\n\nPath = y\n";
        let segments: Vec<_> = Segments::new(text).collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].boundary, Boundary::Start);
        assert_eq!(segments[0].text, "banner line\nsecond");
        assert_eq!(segments[1].boundary, Boundary::Separator(2));
        assert_eq!(segments[1].text, "Path = a.7z\nType = 7z");
        assert_eq!(segments[2].boundary, Boundary::Separator(10));
        assert_eq!(segments[3].boundary, Boundary::Blank);
        assert_eq!(segments[3].index, 3);
    }

    #[test]
    fn test_crlf_and_missing_trailing_newline() {
        let text = "a = 1\r\nb = 2\r\n\r\nc = 3";
        let segments: Vec<_> = Segments::new(text).collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "a = 1\r\nb = 2");
        assert_eq!(segments[1].text, "c = 3");
    }

    #[test]
    fn test_separator_then_blank_keeps_separator() {
        let segments: Vec<_> = Segments::new("x\n----\n\n\ny\n").collect();
        assert_eq!(segments[1].boundary, Boundary::Separator(4));
    }

    #[test]
    fn test_single_dash_is_content() {
        let segments: Vec<_> = Segments::new("-\nPath = -\n").collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "-\nPath = -");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(Segments::new("").count(), 0);
        assert_eq!(Segments::new("\n \n----\n").count(), 0);
    }

    #[test]
    fn test_fused_after_end() {
        let mut segments = Segments::new("only\n");
        assert!(segments.next().is_some());
        assert!(segments.next().is_none());
        assert!(segments.next().is_none());
    }
}

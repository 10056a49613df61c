//! Key-value record parser.
//!
//! Technical listings print one `Key = Value` pair per line. A pair whose
//! value is empty (`Created = `) is kept as present-but-absent: the key shows
//! up in [`Record::contains`] while every value accessor returns `None`.
//! Lines that are not pairs (archiver warnings inside a header block) are
//! collected as notes.

use crate::error::{ParseError, Result};

/// Ordered `Key = Value` fields of one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    text: &'a str,
    fields: Vec<(&'a str, Option<&'a str>)>,
    notes: Vec<&'a str>,
}

/// Split a line into key and value, or `None` if it is not a pair.
fn split_pair(line: &str) -> Option<(&str, Option<&str>)> {
    let (key, rest) = line.split_once(" =")?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    // The archiver writes exactly one space after `=`; anything beyond it is
    // part of the value.
    let value = rest.strip_prefix(' ').unwrap_or(rest);
    let value = (!value.trim().is_empty()).then_some(value);
    Some((key, value))
}

impl<'a> Record<'a> {
    pub fn parse(text: &'a str) -> Self {
        let mut fields = Vec::new();
        let mut notes = Vec::new();
        for line in text.lines() {
            match split_pair(line) {
                Some(pair) => fields.push(pair),
                None if !line.trim().is_empty() => notes.push(line.trim()),
                None => {}
            }
        }
        Self {
            text,
            fields,
            notes,
        }
    }

    /// The segment text this record was parsed from.
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Fields in input order; empty values are `None`.
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + '_ {
        self.fields.iter().copied()
    }

    /// Non-pair lines, trimmed.
    pub fn notes(&self) -> &[&'a str] {
        &self.notes
    }

    /// Whether the key was printed at all, even with an empty value.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| *k == key)
    }

    /// Value of the first occurrence of `key`.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| *v)
    }

    pub fn required(&self, key: &'static str) -> Result<&'a str> {
        self.get(key)
            .ok_or_else(|| ParseError::missing(key, self.text))
    }

    pub fn text_value(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    pub fn number(&self, key: &'static str) -> Result<Option<u64>> {
        self.get(key).map(|v| parse_decimal(key, v)).transpose()
    }

    pub fn required_number(&self, key: &'static str) -> Result<u64> {
        parse_decimal(key, self.required(key)?)
    }

    /// `+` is true; `-`, any other token, and absence are false.
    pub fn flag(&self, key: &str) -> bool {
        self.marker(key).unwrap_or(false)
    }

    /// `Some` only when the key carries a `+` or `-` marker.
    pub fn marker(&self, key: &str) -> Option<bool> {
        match self.get(key)?.trim() {
            "+" => Some(true),
            "-" => Some(false),
            _ => None,
        }
    }

    /// Whitespace-separated tokens; empty when absent.
    pub fn tokens(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Hexadecimal value such as a CRC.
    pub fn hex(&self, key: &'static str) -> Result<Option<u32>> {
        self.get(key)
            .map(|v| {
                u32::from_str_radix(v.trim(), 16).map_err(|_| ParseError::malformed(key, v))
            })
            .transpose()
    }
}

pub(crate) fn parse_decimal(field: &'static str, value: &str) -> Result<u64> {
    let digits = value.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::malformed(field, value));
    }
    digits
        .parse()
        .map_err(|_| ParseError::malformed(field, value))
}

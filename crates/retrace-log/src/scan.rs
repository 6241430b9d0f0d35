// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Newline-delimited record scanning
//!
//! Log output arrives as one large text blob. [`LineRecords`] walks it in a
//! single pass, yielding byte-offset boundaries plus a borrowed slice per
//! record — nothing is copied until a consumer decides to keep a field.

/// One newline-delimited record within a larger text blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    /// Byte offset of the first byte of the record
    pub start: usize,
    /// Byte offset one past the last content byte (excludes the `\n`)
    pub end: usize,
    /// The record content, without its terminator
    pub content: &'a str,
    /// Whether the record was terminated by `\n`.
    ///
    /// False only for a final record that runs to end of input; such a
    /// record is still valid.
    pub terminated: bool,
}

/// Lazy iterator over the newline-delimited records of a text blob
#[derive(Debug, Clone)]
pub struct LineRecords<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> LineRecords<'a> {
    /// Scan from the start of the text
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Scan from an arbitrary byte offset, e.g. to resume after a caller
    /// stopped consuming mid-stream
    #[must_use]
    pub fn from_offset(text: &'a str, offset: usize) -> Self {
        Self {
            text,
            pos: offset.min(text.len()),
        }
    }

    /// Byte offset the next record would start at
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for LineRecords<'a> {
    type Item = LineRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        let rest = &self.text[start..];
        match rest.find('\n') {
            Some(rel) => {
                let end = start + rel;
                self.pos = end + 1;
                Some(LineRecord {
                    start,
                    end,
                    content: &self.text[start..end],
                    terminated: true,
                })
            }
            None => {
                let end = self.text.len();
                self.pos = end;
                Some(LineRecord {
                    start,
                    end,
                    content: &self.text[start..end],
                    terminated: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_nothing() {
        assert_eq!(LineRecords::new("").count(), 0);
    }

    #[test]
    fn test_terminated_records() {
        let records: Vec<_> = LineRecords::new("a\nbb\n").collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].content, "a");
        assert!(records[0].terminated);
        assert_eq!((records[1].start, records[1].end), (2, 4));
        assert_eq!(records[1].content, "bb");
        assert!(records[1].terminated);
    }

    #[test]
    fn test_trailing_record_without_terminator() {
        let records: Vec<_> = LineRecords::new("a\ntail").collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].content, "tail");
        assert!(!records[1].terminated);
    }

    #[test]
    fn test_blank_records_preserved() {
        let records: Vec<_> = LineRecords::new("\n\nx\n").collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].content, "");
        assert_eq!(records[1].content, "");
        assert_eq!(records[2].content, "x");
    }

    #[test]
    fn test_restart_from_offset() {
        let text = "one\ntwo\nthree\n";
        let mut scan = LineRecords::new(text);
        let first = scan.next().expect("first record");
        assert_eq!(first.content, "one");

        let resumed: Vec<_> = LineRecords::from_offset(text, scan.offset())
            .map(|r| r.content)
            .collect();
        assert_eq!(resumed, vec!["two", "three"]);
    }
}

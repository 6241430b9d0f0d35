// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Classified diff line types
//!
//! Input lines arrive already classified by the diff producer; this module
//! only gives them an owned, addressable shape. A line's index in its
//! sequence is the stable key everything downstream (hunk resolution,
//! selection mapping, patch synthesis) operates on.

use serde::{Deserialize, Serialize};

/// Classification of one rendered diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffLineType {
    /// Padding opposite the other column's change in a split view
    None,
    /// Unchanged context, present on both sides
    Normal,
    /// Synthetic separator marking an elided gap between hunks
    Indicator,
    /// Line present only in the new file
    Added,
    /// Line present only in the old file
    Deleted,
}

impl DiffLineType {
    /// Whether this line is an actual content change
    #[must_use]
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Added | Self::Deleted)
    }
}

/// A byte offset range highlighted within a line's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRange {
    /// Start offset, inclusive
    pub start: usize,
    /// End offset, exclusive
    pub end: usize,
}

/// One rendered diff line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// Line classification
    pub line_type: DiffLineType,
    /// Line content, without terminator
    pub content: String,
    /// Line number in the old file, when the line exists there
    pub old_line: Option<usize>,
    /// Line number in the new file, when the line exists there
    pub new_line: Option<usize>,
    /// Intra-line change highlights, in offset order
    pub highlights: Vec<HighlightRange>,
    /// Whether this is the last line of a file with no trailing newline
    pub no_new_line_eof: bool,
}

impl DiffLine {
    fn with_type(
        line_type: DiffLineType,
        content: impl Into<String>,
        old_line: Option<usize>,
        new_line: Option<usize>,
    ) -> Self {
        Self {
            line_type,
            content: content.into(),
            old_line,
            new_line,
            highlights: Vec::new(),
            no_new_line_eof: false,
        }
    }

    /// Unchanged context present on both sides
    #[must_use]
    pub fn normal(content: impl Into<String>, old_line: usize, new_line: usize) -> Self {
        Self::with_type(DiffLineType::Normal, content, Some(old_line), Some(new_line))
    }

    /// Line added in the new file
    #[must_use]
    pub fn added(content: impl Into<String>, new_line: usize) -> Self {
        Self::with_type(DiffLineType::Added, content, None, Some(new_line))
    }

    /// Line deleted from the old file
    #[must_use]
    pub fn deleted(content: impl Into<String>, old_line: usize) -> Self {
        Self::with_type(DiffLineType::Deleted, content, Some(old_line), None)
    }

    /// Synthetic hunk gap separator
    #[must_use]
    pub fn indicator(content: impl Into<String>) -> Self {
        Self::with_type(DiffLineType::Indicator, content, None, None)
    }

    /// Padding line for the empty side of a split view
    #[must_use]
    pub fn placeholder() -> Self {
        Self::with_type(DiffLineType::None, String::new(), None, None)
    }

    /// Whether this line is an actual content change
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.line_type.is_change()
    }
}

// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Split-view projection of a combined diff
//!
//! A split view renders the old and new files as separate columns. This
//! module derives both columns from the combined line sequence — added
//! lines go to the new column, deleted lines to the old, everything else
//! to both, with placeholder padding keeping the columns equally tall —
//! and remembers, for every column line, which combined index it came
//! from. That recorded mapping is what makes side-to-combined translation
//! a pure function of the line sequences.

use crate::line::{DiffLine, DiffLineType};
use crate::selection::SideIndexTranslator;

/// Old/new column projection of a combined diff-line sequence
#[derive(Debug, Clone, Default)]
pub struct TwoSideDiff {
    /// The old-file column, padded to the common height
    pub old: Vec<DiffLine>,
    /// The new-file column, padded to the common height
    pub new: Vec<DiffLine>,
    old_to_combined: Vec<Option<usize>>,
    new_to_combined: Vec<Option<usize>>,
    combined_len: usize,
}

impl TwoSideDiff {
    /// Project a combined sequence into old/new columns
    #[must_use]
    pub fn from_combined(lines: &[DiffLine]) -> Self {
        let mut twoside = Self {
            combined_len: lines.len(),
            ..Self::default()
        };

        for (idx, line) in lines.iter().enumerate() {
            match line.line_type {
                DiffLineType::Added => {
                    twoside.new.push(line.clone());
                    twoside.new_to_combined.push(Some(idx));
                }
                DiffLineType::Deleted => {
                    twoside.old.push(line.clone());
                    twoside.old_to_combined.push(Some(idx));
                }
                _ => {
                    twoside.fill_empty_lines();
                    twoside.old.push(line.clone());
                    twoside.old_to_combined.push(Some(idx));
                    twoside.new.push(line.clone());
                    twoside.new_to_combined.push(Some(idx));
                }
            }
        }
        twoside.fill_empty_lines();

        twoside
    }

    /// Pad the shorter column with placeholders up to the common height
    fn fill_empty_lines(&mut self) {
        while self.old.len() < self.new.len() {
            self.old.push(DiffLine::placeholder());
            self.old_to_combined.push(None);
        }
        while self.new.len() < self.old.len() {
            self.new.push(DiffLine::placeholder());
            self.new_to_combined.push(None);
        }
    }

    /// Column height (both columns are padded to the same length)
    #[must_use]
    pub fn height(&self) -> usize {
        self.old.len()
    }

    fn side(&self, is_old_side: bool) -> (&[DiffLine], &[Option<usize>]) {
        if is_old_side {
            (&self.old, &self.old_to_combined)
        } else {
            (&self.new, &self.new_to_combined)
        }
    }

    /// Map a side-resolved change block back to combined indices for a
    /// hover-style whole-block selection.
    ///
    /// A block ending on the column's last line maps to the combined
    /// sequence's last index, so trailing padding never truncates it.
    #[must_use]
    pub fn block_to_combined(
        &self,
        start: usize,
        end: usize,
        is_old_side: bool,
    ) -> Option<(usize, usize)> {
        let (lines, map) = self.side(is_old_side);
        if lines.is_empty() || self.combined_len == 0 {
            return None;
        }

        let end = end.min(lines.len() - 1);
        let start = start.min(end);

        let combined_start = (start..=end).find_map(|i| map[i])?;
        let combined_end = if end == lines.len() - 1 {
            self.combined_len - 1
        } else {
            (start..=end).rev().find_map(|i| map[i])?
        };

        Some((combined_start, combined_end))
    }
}

impl SideIndexTranslator for TwoSideDiff {
    fn to_combined_range(
        &self,
        start: usize,
        end: usize,
        is_old_side: bool,
    ) -> Option<(usize, usize)> {
        let (lines, map) = self.side(is_old_side);
        if lines.is_empty() {
            return None;
        }

        let end = end.min(lines.len() - 1);
        let start = start.min(end);

        // Shrink the range to content lines; a drag may start or end on
        // padding.
        let first = (start..=end).find(|&i| lines[i].line_type != DiffLineType::None)?;
        let last = (first..=end).rev().find(|&i| lines[i].line_type != DiffLineType::None)?;

        Some((map[first]?, map[last]?))
    }
}

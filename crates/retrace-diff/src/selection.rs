// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Selection mapping
//!
//! Turns a resolved index range into a [`DiffSelection`]: the side/range
//! descriptor patch synthesis consumes. Selections always carry indices
//! into the **combined** line sequence — a single-side range is translated
//! first — because the synthesizer only operates on the combined
//! representation.

use serde::{Deserialize, Serialize};

use crate::error::DiffError;
use crate::line::{DiffLine, DiffLineType};

/// Range and side descriptor for a user's visual selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSelection {
    /// First selected combined-sequence index, inclusive
    pub start_idx: usize,
    /// Last selected combined-sequence index, inclusive
    pub end_idx: usize,
    /// Whether the selection was made in the combined (unified) view
    pub combined: bool,
    /// For split views, whether the old column was selected
    pub is_old_side: bool,
    /// Whether the range contains changes belonging to the viewed side
    pub has_changes: bool,
    /// Whether changed lines remain outside the selection once it is
    /// applied — when false the caller may use a whole-file operation
    /// instead of synthesizing a partial patch
    pub has_left_changes: bool,
    /// Added lines before the range; the synthesizer re-anchors hunk
    /// headers with these
    pub ignored_adds: usize,
    /// Deleted lines before the range
    pub ignored_deletes: usize,
}

impl DiffSelection {
    /// Whether this selection should replace a previously computed one.
    ///
    /// Selection mapping runs on every pointer move; callers keep the last
    /// value and skip downstream invalidation when nothing changed.
    #[must_use]
    pub fn replaces(&self, old: Option<&DiffSelection>) -> bool {
        old.is_none_or(|old| self != old)
    }
}

/// Translates single-side line indices into combined-sequence indices.
///
/// Implemented by [`crate::twoside::TwoSideDiff`]; viewers with their own
/// split model can provide any pure equivalent.
pub trait SideIndexTranslator {
    /// Translate an inclusive side range into an inclusive combined range,
    /// or `None` when the range holds no content lines
    fn to_combined_range(
        &self,
        start: usize,
        end: usize,
        is_old_side: bool,
    ) -> Option<(usize, usize)>;
}

/// Synthesizes patch bytes from a selection; applied/staged by an external
/// side-effecting step
pub trait PatchSynthesizer {
    /// Build patch bytes covering the selected lines, inverted when
    /// `reverse` is set
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::EmptySelection`] when the selection holds no
    /// changed lines.
    fn synthesize(
        &self,
        lines: &[DiffLine],
        selection: &DiffSelection,
        reverse: bool,
    ) -> Result<Vec<u8>, DiffError>;
}

/// Build a selection from an inclusive combined-sequence range.
///
/// `combined` and `is_old_side` describe the view the range came from and
/// steer which in-range changes count as selected: in a split view, added
/// lines seen from the old column (and deleted lines seen from the new
/// column) belong to the other side, so they count as left-over instead.
#[must_use]
pub fn make_selection(
    lines: &[DiffLine],
    start_idx: usize,
    end_idx: usize,
    combined: bool,
    is_old_side: bool,
) -> DiffSelection {
    let (start_idx, end_idx) = if start_idx <= end_idx {
        (start_idx, end_idx)
    } else {
        (end_idx, start_idx)
    };

    let mut selection = DiffSelection {
        start_idx,
        end_idx,
        combined,
        is_old_side,
        has_changes: false,
        has_left_changes: false,
        ignored_adds: 0,
        ignored_deletes: 0,
    };

    if lines.is_empty() {
        return selection;
    }

    let end_idx = end_idx.min(lines.len() - 1);
    let start_idx = start_idx.min(end_idx);
    selection.start_idx = start_idx;
    selection.end_idx = end_idx;

    for line in &lines[..start_idx] {
        match line.line_type {
            DiffLineType::Added => {
                selection.has_left_changes = true;
                selection.ignored_adds += 1;
            }
            DiffLineType::Deleted => {
                selection.has_left_changes = true;
                selection.ignored_deletes += 1;
            }
            _ => {}
        }
    }

    for line in &lines[start_idx..=end_idx] {
        match line.line_type {
            DiffLineType::Added => {
                if !combined && is_old_side {
                    selection.has_left_changes = true;
                } else {
                    selection.has_changes = true;
                }
            }
            DiffLineType::Deleted => {
                if !combined && !is_old_side {
                    selection.has_left_changes = true;
                } else {
                    selection.has_changes = true;
                }
            }
            _ => {}
        }
    }

    if !selection.has_left_changes {
        for line in &lines[end_idx + 1..] {
            if line.is_change() {
                selection.has_left_changes = true;
                break;
            }
        }
    }

    selection
}

/// Build a selection from a single-side range, translating it into
/// combined indices first.
///
/// Returns `None` when the side range holds no content lines to map.
#[must_use]
pub fn map_side_selection(
    lines: &[DiffLine],
    translator: &dyn SideIndexTranslator,
    start: usize,
    end: usize,
    is_old_side: bool,
) -> Option<DiffSelection> {
    let (start_idx, end_idx) = translator.to_combined_range(start, end, is_old_side)?;
    Some(make_selection(lines, start_idx, end_idx, false, is_old_side))
}

// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Change block resolution
//!
//! Given an anchor index into a classified diff-line sequence — the line
//! under the pointer — [`find_change_block`] expands outward to the
//! contiguous block of changes the viewer should highlight and offer for
//! partial staging.
//!
//! Boundary rules, applied symmetrically in both directions:
//!
//! - An [`Indicator`](crate::line::DiffLineType::Indicator) line is a hard
//!   stop; the boundary sits at the indicator's own index.
//! - Two consecutive [`Normal`](crate::line::DiffLineType::Normal) lines
//!   are a soft stop; one line of context belongs to the block, a second
//!   one already belongs to the neighboring hunk's context.
//! - Anything else resets the context run and counts as a modified line.
//!
//! The block is only a block if some modified line was seen; anchoring
//! inside pure context selects nothing.

use crate::line::{DiffLine, DiffLineType};

/// Consecutive context lines that end a block
const CONTEXT_RUN_STOP: usize = 2;

/// Resolve the inclusive change block containing `anchor`.
///
/// Returns `None` when the anchor sits in pure context, lies outside the
/// sequence, or — matching the viewer's historical behavior — when the
/// backward scan runs off the start of the sequence without hitting a
/// boundary. Rendered diffs open every file with an indicator line, so the
/// last case only arises on synthetic sequences.
#[must_use]
pub fn find_change_block(lines: &[DiffLine], anchor: usize) -> Option<(usize, usize)> {
    if anchor >= lines.len() {
        return None;
    }

    let mut start = None;
    let mut normal_run = 0usize;
    let mut modified = 0usize;

    for i in (0..=anchor).rev() {
        match lines[i].line_type {
            DiffLineType::Indicator => {
                start = Some(i);
                break;
            }
            DiffLineType::Normal => {
                normal_run += 1;
                if normal_run >= CONTEXT_RUN_STOP {
                    start = Some(i);
                    break;
                }
            }
            _ => {
                normal_run = 0;
                modified += 1;
            }
        }
    }

    let mut end = None;
    normal_run = usize::from(lines[anchor].line_type == DiffLineType::Normal);

    for (i, line) in lines.iter().enumerate().skip(anchor + 1) {
        match line.line_type {
            DiffLineType::Indicator => {
                end = Some(i);
                break;
            }
            DiffLineType::Normal => {
                normal_run += 1;
                if normal_run >= CONTEXT_RUN_STOP {
                    end = Some(i);
                    break;
                }
            }
            _ => {
                normal_run = 0;
                modified += 1;
            }
        }
    }

    let start = start?;
    let end = end.unwrap_or(lines.len() - 1);

    (modified > 0).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::DiffLine;

    /// Build a line sequence from a compact type pattern:
    /// `N` normal, `A` added, `D` deleted, `I` indicator, `.` placeholder.
    fn lines(pattern: &str) -> Vec<DiffLine> {
        pattern
            .chars()
            .enumerate()
            .map(|(i, c)| match c {
                'N' => DiffLine::normal("ctx", i + 1, i + 1),
                'A' => DiffLine::added("new", i + 1),
                'D' => DiffLine::deleted("old", i + 1),
                'I' => DiffLine::indicator("@@"),
                '.' => DiffLine::placeholder(),
                other => panic!("unknown pattern char {other}"),
            })
            .collect()
    }

    #[test]
    fn test_two_context_rule_fixture() {
        // Anchor on the Deleted line at index 2: backward takes both
        // leading context lines, forward stops at the second consecutive
        // context line (index 5).
        let seq = lines("NNDANNND");
        assert_eq!(find_change_block(&seq, 2), Some((0, 5)));
    }

    #[test]
    fn test_trailing_change_runs_to_sequence_end() {
        let seq = lines("NNDANNND");
        assert_eq!(find_change_block(&seq, 7), Some((5, 7)));
    }

    #[test]
    fn test_indicator_is_hard_stop_both_directions() {
        let seq = lines("IDNNN");
        assert_eq!(find_change_block(&seq, 1), Some((0, 3)));

        let seq = lines("IANIDN");
        assert_eq!(find_change_block(&seq, 1), Some((0, 3)));
        assert_eq!(find_change_block(&seq, 4), Some((3, 5)));
    }

    #[test]
    fn test_pure_context_selects_nothing() {
        let seq = lines("NNNNN");
        for anchor in 0..seq.len() {
            assert_eq!(find_change_block(&seq, anchor), None);
        }
    }

    #[test]
    fn test_indicator_and_context_only_selects_nothing() {
        let seq = lines("INNI");
        for anchor in 0..seq.len() {
            assert_eq!(find_change_block(&seq, anchor), None);
        }
    }

    #[test]
    fn test_placeholder_counts_as_modified() {
        // A padding line pads the opposite column's change, so anchoring
        // on it still selects the block.
        let seq = lines("IN.NI");
        assert_eq!(find_change_block(&seq, 2), Some((0, 4)));
    }

    #[test]
    fn test_anchor_out_of_bounds() {
        let seq = lines("IDA");
        assert_eq!(find_change_block(&seq, 3), None);
        assert_eq!(find_change_block(&[], 0), None);
    }

    #[test]
    fn test_backward_exhaustion_yields_no_block() {
        // No indicator and fewer than two context lines above the anchor:
        // the backward scan runs off the start and the block is rejected.
        let seq = lines("DANN");
        assert_eq!(find_change_block(&seq, 0), None);
        let seq = lines("NDANN");
        assert_eq!(find_change_block(&seq, 1), None);
    }

    #[test]
    fn test_resolution_is_stable_across_changed_anchors() {
        let seq = lines("NNDANNND");
        let range = find_change_block(&seq, 2).expect("block");
        for anchor in range.0..=range.1 {
            if seq[anchor].is_change() {
                assert_eq!(find_change_block(&seq, anchor), Some(range));
            }
        }
    }

    #[test]
    fn test_single_context_line_between_changes_joins_blocks() {
        let seq = lines("IDNAI");
        assert_eq!(find_change_block(&seq, 1), Some((0, 4)));
        assert_eq!(find_change_block(&seq, 3), Some((0, 4)));
    }
}

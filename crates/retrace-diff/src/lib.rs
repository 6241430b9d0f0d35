// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! retrace-diff: diff hunk and selection resolution for retrace
//!
//! This library crate takes an already-classified diff-line sequence and
//! answers the two questions an interactive diff viewer keeps asking:
//! which contiguous change block contains this line, and what selection
//! descriptor does this picked range amount to. Both answers are pure
//! functions over the line sequence, cheap enough to run on every pointer
//! move.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use retrace_diff::{DiffLine, find_change_block, make_selection};
//!
//! let lines = vec![
//!     DiffLine::indicator("@@ -1,3 +1,3 @@"),
//!     DiffLine::normal("fn main() {", 1, 1),
//!     DiffLine::deleted("    start();", 2),
//!     DiffLine::added("    run();", 2),
//!     DiffLine::normal("}", 3, 3),
//! ];
//!
//! let (start, end) = find_change_block(&lines, 2).expect("a change block");
//! let selection = make_selection(&lines, start, end, true, false);
//! assert!(selection.has_changes);
//! assert!(!selection.has_left_changes);
//! ```

pub mod error;
pub mod hunk;
pub mod line;
pub mod selection;
pub mod twoside;

pub use error::DiffError;
pub use hunk::find_change_block;
pub use line::{DiffLine, DiffLineType, HighlightRange};
pub use selection::{
    DiffSelection, PatchSynthesizer, SideIndexTranslator, make_selection, map_side_selection,
};
pub use twoside::TwoSideDiff;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::DiffError;
    pub use crate::hunk::find_change_block;
    pub use crate::line::{DiffLine, DiffLineType};
    pub use crate::selection::{DiffSelection, make_selection, map_side_selection};
    pub use crate::twoside::TwoSideDiff;
}

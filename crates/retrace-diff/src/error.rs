// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Error types for retrace-diff

use thiserror::Error;

/// Errors that can occur while materializing a selection into a patch
#[derive(Debug, Error)]
pub enum DiffError {
    /// The selection covers no changed lines, so there is nothing to
    /// synthesize
    #[error("selection contains no changed lines")]
    EmptySelection,

    /// Error writing patch bytes
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

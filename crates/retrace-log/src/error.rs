// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Error types for retrace-log

use thiserror::Error;

/// Errors that can occur during commit log processing
#[derive(Debug, Error)]
pub enum LogError {
    /// A timestamp field did not parse as unsigned epoch seconds.
    ///
    /// This is fatal for the whole parse: no partial commit list is
    /// returned.
    #[error("invalid timestamp field: {value:?}")]
    Timestamp {
        /// The raw field that failed to parse
        value: String,
        /// The underlying integer parse failure
        source: std::num::ParseIntError,
    },

    /// The merge-reachability follow-up query failed at the transport layer
    #[error("reachability query failed: {message}")]
    Query {
        /// Description reported by the query collaborator
        message: String,
    },
}

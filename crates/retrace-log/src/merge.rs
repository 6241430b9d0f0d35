// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Merge-reachability approximation
//!
//! The primary history query is windowed (most recent N commits matching a
//! filter), so the commit HEAD points at may fall outside the window — no
//! commit gets flagged merged through its decorators. This module
//! approximates "the most recent result commit that is an ancestor of
//! HEAD" with one bounded follow-up query instead of a full graph walk:
//! fetch every SHA reachable from HEAD with committer time at or after the
//! oldest fetched commit, and mark the first result commit in that set.
//!
//! The time bound makes this an approximation: ties at the boundary
//! timestamp, author/committer clock skew, and non-monotonic histories can
//! mark the wrong commit or none. That imprecision is the accepted cost of
//! avoiding an ancestry walk and is part of the observable contract.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;

use crate::error::LogError;
use crate::parser::ParsedLog;

/// Follow-up query collaborator: SHAs reachable from HEAD since a bound.
///
/// `bound` is a local-calendar `YYYY-MM-DD HH:MM:SS` string (see
/// [`crate::commit::Commit::committer_time_str`]); the reply is a flat
/// CR/LF-delimited SHA list with no other fields.
#[async_trait]
pub trait ReachableShaQuery {
    /// Run the bounded reachability query and return its raw output
    async fn reachable_since(&self, bound: &str) -> Result<String, LogError>;
}

/// Mark the first HEAD-reachable commit in a parsed log as merged.
///
/// Skipped entirely — no round trip — when the primary pass already found
/// a head-decorated commit or the result list is empty. Otherwise at most
/// one commit is marked: the first, in list order, whose SHA appears in
/// the follow-up query's reply.
///
/// # Errors
///
/// Propagates [`LogError::Query`] from the collaborator.
pub async fn approximate_merge_base<Q>(query: &Q, log: &mut ParsedLog) -> Result<(), LogError>
where
    Q: ReachableShaQuery + Sync + ?Sized,
{
    if log.head_found || log.commits.is_empty() {
        return Ok(());
    }

    let bound = log
        .commits
        .last()
        .map(|c| c.committer_time_str())
        .unwrap_or_default();

    let raw = query.reachable_since(&bound).await?;
    let reachable: HashSet<&str> = raw
        .split(['\r', '\n'])
        .filter(|s| !s.is_empty())
        .collect();
    if reachable.is_empty() {
        return Ok(());
    }

    for commit in &mut log.commits {
        if reachable.contains(commit.sha.as_str()) {
            debug!(sha = %commit.sha, "marked first reachable commit as merged");
            commit.is_merged = true;
            break;
        }
    }

    Ok(())
}

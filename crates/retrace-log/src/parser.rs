// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Commit log parsing
//!
//! Two parsing modes over the same eight-field record layout:
//!
//! - [`parse_log`] consumes the primary history query's output, one commit
//!   per eight newline-delimited fields.
//! - [`parse_log_filtered`] consumes the filename-search variant, where
//!   each eight-field header is followed by the commit's file paths and
//!   commits are kept only when a path matches the filter.
//!
//! The record layout is `SHA` / space-separated parent SHAs / raw
//! decorator field / `Name±Email` author / author epoch / `Name±Email`
//! committer / committer epoch / subject. See
//! [`crate::query::COMMIT_LOG_FORMAT`] for the producing format string.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::commit::{Commit, Decorator, DecoratorKind, UserStore};
use crate::error::LogError;
use crate::scan::LineRecords;

/// Parent fields shorter than this are stray noise (a blank line, a
/// truncated token), not a SHA list.
const MIN_PARENT_FIELD_LEN: usize = 8;

/// Tokenizer for the raw decorator field of a log record
pub trait DecoratorParser {
    /// Split a raw decorator field into typed decorators
    fn parse(&self, raw: &str) -> Vec<Decorator>;
}

/// Default [`DecoratorParser`] for `--decorate=full` ref notation.
///
/// Recognizes `HEAD -> refs/heads/...`, detached `HEAD`, `refs/heads/...`,
/// `refs/remotes/...` and `tag: refs/tags/...` entries; symbolic
/// `.../HEAD` refs are skipped. Current-head decorators sort to the front.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefDecoratorParser;

impl DecoratorParser for RefDecoratorParser {
    fn parse(&self, raw: &str) -> Vec<Decorator> {
        let mut decorators = Vec::new();
        if raw.len() < 3 {
            return decorators;
        }

        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry.is_empty() || entry.ends_with("/HEAD") {
                continue;
            }

            if let Some(tag) = entry.strip_prefix("tag: refs/tags/") {
                decorators.push(Decorator::new(DecoratorKind::Tag, tag));
            } else if let Some(branch) = entry.strip_prefix("HEAD -> refs/heads/") {
                decorators.insert(0, Decorator::new(DecoratorKind::CurrentBranchHead, branch));
            } else if entry == "HEAD" {
                decorators.insert(0, Decorator::new(DecoratorKind::CurrentCommitHead, entry));
            } else if let Some(branch) = entry.strip_prefix("refs/heads/") {
                decorators.push(Decorator::new(DecoratorKind::LocalBranchHead, branch));
            } else if let Some(remote) = entry.strip_prefix("refs/remotes/") {
                decorators.push(Decorator::new(DecoratorKind::RemoteBranchHead, remote));
            }
        }

        decorators
    }
}

/// Outcome of a primary log parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLog {
    /// Parsed commits, newest first (query order)
    pub commits: Vec<Commit>,
    /// Whether any commit carried a current-head decorator.
    ///
    /// When false and the list is non-empty, the merge-reachability
    /// approximator has work to do.
    pub head_found: bool,
}

/// Outcome of a filename-filtered log parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredLog {
    /// Commits with at least one matching file path
    pub commits: Vec<Commit>,
    /// Number of commit headers recognized, matching or not — lets a
    /// caller report "N of M commits scanned" for paged search
    pub total_scanned: usize,
}

/// Parse primary history query output into commits.
///
/// One commit per eight newline-delimited fields. A trailing record
/// without a final `\n` is assigned as the last commit's subject, whatever
/// field the cursor was expecting. Empty input yields an empty result.
///
/// # Errors
///
/// Returns [`LogError::Timestamp`] if an author or committer epoch field
/// does not parse; the whole result is discarded in that case.
pub fn parse_log<D: DecoratorParser + ?Sized>(
    text: &str,
    users: &mut UserStore,
    decorators: &D,
) -> Result<ParsedLog, LogError> {
    let mut commits: Vec<Commit> = Vec::new();
    let mut head_found = false;
    let mut cursor = 0usize;

    for record in LineRecords::new(text) {
        if !record.terminated {
            if let Some(last) = commits.last_mut() {
                last.subject = record.content.to_string();
            }
            break;
        }

        let line = record.content;
        if cursor == 0 {
            commits.push(Commit::new(line.to_string()));
            cursor = 1;
            continue;
        }

        let Some(current) = commits.last_mut() else {
            break;
        };

        match cursor {
            1 => parse_parents(line, current),
            2 => {
                current.decorators = decorators.parse(line);
                if current
                    .decorators
                    .iter()
                    .any(|d| d.kind.is_current_head())
                {
                    current.is_merged = true;
                    head_found = true;
                }
            }
            3 => current.author = users.find_or_add(line),
            4 => current.author_time = parse_epoch(line)?,
            5 => current.committer = users.find_or_add(line),
            6 => current.committer_time = parse_epoch(line)?,
            _ => {
                current.subject = line.to_string();
                cursor = 0;
                continue;
            }
        }
        cursor += 1;
    }

    debug!(
        commits = commits.len(),
        head_found, "parsed primary commit log"
    );

    Ok(ParsedLog {
        commits,
        head_found,
    })
}

/// Parse filename-search query output into commits.
///
/// A line of exactly 40 hex characters, seen while not mid-header, starts
/// a new commit; the next seven lines fill the remaining header fields;
/// every following non-empty line is a candidate file path until the next
/// header. A commit is kept only when some path's final segment contains
/// `filter` case-insensitively. An empty filter keeps nothing.
///
/// # Errors
///
/// Returns [`LogError::Timestamp`] if an epoch field does not parse.
pub fn parse_log_filtered<D: DecoratorParser + ?Sized>(
    text: &str,
    filter: &str,
    users: &mut UserStore,
    decorators: &D,
) -> Result<FilteredLog, LogError> {
    let filter_lower = filter.to_lowercase();

    let mut commits: Vec<Commit> = Vec::new();
    let mut current = Commit::new(String::new());
    let mut cursor = 1usize;
    let mut in_header = false;
    let mut has_match = false;
    let mut total_scanned = 0usize;

    for record in LineRecords::new(text) {
        let line = record.content;

        if !in_header && Commit::is_valid_sha(line) {
            total_scanned += 1;

            if has_match && !current.sha.is_empty() {
                commits.push(std::mem::replace(&mut current, Commit::new(String::new())));
            }

            current.sha = line.to_string();
            current.parents.clear();
            current.decorators.clear();
            cursor = 1;
            has_match = false;
            in_header = true;
            continue;
        }

        if in_header {
            match cursor {
                1 => parse_parents(line, &mut current),
                2 => {
                    current.decorators = decorators.parse(line);
                    if current
                        .decorators
                        .iter()
                        .any(|d| d.kind.is_current_head())
                    {
                        current.is_merged = true;
                    }
                }
                3 => current.author = users.find_or_add(line),
                4 => current.author_time = parse_epoch(line)?,
                5 => current.committer = users.find_or_add(line),
                6 => current.committer_time = parse_epoch(line)?,
                _ => {
                    current.subject = line.to_string();
                    in_header = false;
                }
            }
            cursor += 1;
        } else if !line.is_empty() && !filter_lower.is_empty() {
            let file_name = Path::new(line)
                .file_name()
                .map(|n| n.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if file_name.contains(&filter_lower) {
                has_match = true;
            }
        }
    }

    if has_match && !current.sha.is_empty() {
        commits.push(current);
    }

    debug!(
        commits = commits.len(),
        total_scanned, "parsed name-filtered commit log"
    );

    Ok(FilteredLog {
        commits,
        total_scanned,
    })
}

fn parse_parents(raw: &str, commit: &mut Commit) {
    if raw.len() < MIN_PARENT_FIELD_LEN {
        if !raw.is_empty() {
            warn!(field = %raw, "parent field too short, treating as no parents");
        }
        return;
    }

    commit
        .parents
        .extend(raw.split(' ').filter(|t| !t.is_empty()).map(str::to_string));
}

fn parse_epoch(raw: &str) -> Result<u64, LogError> {
    raw.parse::<u64>().map_err(|source| LogError::Timestamp {
        value: raw.to_string(),
        source,
    })
}

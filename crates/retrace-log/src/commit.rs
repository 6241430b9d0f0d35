// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Commit, decorator and user identity types

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// The kind of ref annotation attached to a commit in log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecoratorKind {
    /// The branch currently checked out (`HEAD -> refs/heads/...`)
    CurrentBranchHead,
    /// A detached `HEAD` pointing directly at the commit
    CurrentCommitHead,
    /// A local branch head other than the current one
    LocalBranchHead,
    /// A remote-tracking branch head
    RemoteBranchHead,
    /// A tag
    Tag,
}

impl DecoratorKind {
    /// Whether this decorator marks the commit HEAD currently points at.
    ///
    /// Only these kinds flag a commit as merged during primary parsing;
    /// other branch heads say nothing about reachability from HEAD.
    #[must_use]
    pub fn is_current_head(&self) -> bool {
        matches!(self, Self::CurrentBranchHead | Self::CurrentCommitHead)
    }
}

/// A ref annotation (branch head, remote head, tag) on a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decorator {
    /// What kind of ref this is
    pub kind: DecoratorKind,
    /// Short ref name (branch, remote branch or tag name)
    pub name: String,
}

impl Decorator {
    /// Create a decorator
    #[must_use]
    pub fn new(kind: DecoratorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// A commit author or committer identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// Deduplicating store for [`User`] identities.
///
/// Log output repeats the same `Name±Email` pair for nearly every commit;
/// interning through this store makes every repeat share one allocation.
/// The store's lifetime is controlled by the caller — typically one per
/// repository view — rather than being process-global.
#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<String, Arc<User>>,
}

impl UserStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a raw `Name±Email` field to a shared identity.
    ///
    /// A field without the `±` separator is treated as a bare name with an
    /// empty email.
    pub fn find_or_add(&mut self, raw: &str) -> Arc<User> {
        if let Some(user) = self.users.get(raw) {
            return Arc::clone(user);
        }

        let (name, email) = raw.split_once('±').unwrap_or((raw, ""));
        let user = Arc::new(User {
            name: name.to_string(),
            email: email.to_string(),
        });
        self.users.insert(raw.to_string(), Arc::clone(&user));
        user
    }

    /// Number of distinct identities seen so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no identity has been interned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Represents a parsed commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Parent commit SHAs, in parent order
    pub parents: Vec<String>,
    /// Ref annotations attached to this commit
    pub decorators: Vec<Decorator>,
    /// Author identity
    pub author: Arc<User>,
    /// Committer identity
    pub committer: Arc<User>,
    /// Author timestamp, unsigned epoch seconds
    pub author_time: u64,
    /// Committer timestamp, unsigned epoch seconds
    pub committer_time: u64,
    /// First line of the commit message
    pub subject: String,
    /// Whether this commit is known to be reachable from HEAD
    pub is_merged: bool,
}

impl Commit {
    /// Create a commit with the given SHA and empty remaining fields
    #[must_use]
    pub fn new(sha: String) -> Self {
        Self {
            sha,
            parents: Vec::new(),
            decorators: Vec::new(),
            author: Arc::default(),
            committer: Arc::default(),
            author_time: 0,
            committer_time: 0,
            subject: String::new(),
            is_merged: false,
        }
    }

    /// Validate that a SHA is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..7.min(self.sha.len())]
    }

    /// Check if this is a merge commit (has multiple parents)
    #[must_use]
    pub fn is_merge_commit(&self) -> bool {
        self.parents.len() > 1
    }

    /// Check if this is a root commit (has no parents)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Committer time as a local-calendar `YYYY-MM-DD HH:MM:SS` string.
    ///
    /// This is the lower-bound format the merge-reachability follow-up
    /// query passes to `--since`, which interprets bare timestamps in
    /// local time.
    #[must_use]
    pub fn committer_time_str(&self) -> String {
        let secs = i64::try_from(self.committer_time).unwrap_or(i64::MAX);
        Local
            .timestamp_opt(secs, 0)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

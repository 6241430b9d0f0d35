// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

//! Log query argument construction
//!
//! Builders for the argv passed to the external history tool. Process
//! invocation itself lives behind a collaborator; these functions only
//! decide which tokens it receives, so they stay pure and testable. All
//! builders return individual argv tokens — no shell quoting is applied
//! or needed.

use serde::{Deserialize, Serialize};

/// The eight-field `--format` layout consumed by
/// [`crate::parser::parse_log`].
///
/// `±` separates name from email; it is assumed never to occur in a name.
pub const COMMIT_LOG_FORMAT: &str = "%H%n%P%n%D%n%aN±%aE%n%at%n%cN±%cE%n%ct%n%s";

/// Window size for search queries
const SEARCH_LIMIT: &str = "-1000";

/// How a history search interprets its filter string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitSearchMethod {
    /// Case-insensitive author match
    ByAuthor,
    /// Case-insensitive committer match
    ByCommitter,
    /// All whitespace-separated words must appear in the message
    ByMessage,
    /// Commits touching the given pathspec
    ByPath,
    /// Commits touching a file whose name contains the filter; handled by
    /// [`crate::parser::parse_log_filtered`]
    ByFileName,
    /// Commits whose patch text contains the filter (`-G`)
    ByContent,
}

/// Arguments for the primary bounded history window.
///
/// `limits` carries the caller's windowing tokens (`-n`, ref names,
/// pathspecs) verbatim.
#[must_use]
pub fn history_query_args(limits: &[&str]) -> Vec<String> {
    let mut args = vec![
        "log".to_string(),
        "--no-show-signature".to_string(),
        "--decorate=full".to_string(),
        format!("--format={COMMIT_LOG_FORMAT}"),
    ];
    args.extend(limits.iter().map(|s| (*s).to_string()));
    args
}

/// Arguments for a history search.
///
/// `skip` is honored for [`CommitSearchMethod::ByFileName`] only, where
/// paged search hands it through verbatim; other methods always start at
/// the window head.
#[must_use]
pub fn search_query_args(
    filter: &str,
    method: CommitSearchMethod,
    only_current_branch: bool,
    skip: usize,
) -> Vec<String> {
    let mut args = vec!["log".to_string(), SEARCH_LIMIT.to_string()];

    if method == CommitSearchMethod::ByFileName && skip > 0 {
        args.push(format!("--skip={skip}"));
    }

    args.push("--date-order".to_string());
    args.push("--no-show-signature".to_string());
    args.push("--decorate=full".to_string());

    if method == CommitSearchMethod::ByFileName {
        // The extra %n yields the blank line separating the header from
        // the file list.
        args.push("--name-only".to_string());
        args.push(format!("--format={COMMIT_LOG_FORMAT}%n"));
    } else {
        args.push(format!("--format={COMMIT_LOG_FORMAT}"));
    }

    if !only_current_branch {
        args.push("--branches".to_string());
        args.push("--remotes".to_string());
    }

    match method {
        CommitSearchMethod::ByAuthor => {
            args.push("-i".to_string());
            args.push(format!("--author={filter}"));
        }
        CommitSearchMethod::ByCommitter => {
            args.push("-i".to_string());
            args.push(format!("--committer={filter}"));
        }
        CommitSearchMethod::ByMessage => {
            for word in filter.split_whitespace() {
                args.push(format!("--grep={word}"));
            }
            args.push("--all-match".to_string());
            args.push("-i".to_string());
        }
        CommitSearchMethod::ByPath => {
            args.push("--".to_string());
            args.push(filter.to_string());
        }
        CommitSearchMethod::ByFileName => {}
        CommitSearchMethod::ByContent => {
            args.push(format!("-G{filter}"));
        }
    }

    args
}

/// Arguments for the merge-reachability follow-up query: every SHA
/// reachable from HEAD with committer time at or after `bound`
#[must_use]
pub fn reachable_since_args(bound: &str) -> Vec<String> {
    vec![
        "log".to_string(),
        format!("--since={bound}"),
        "--format=%H".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_history_args_carry_limits_verbatim() {
        let args = history_query_args(&["-n", "200", "main"]);
        assert_eq!(args[0], "log");
        assert!(args.contains(&format!("--format={COMMIT_LOG_FORMAT}")));
        assert_eq!(&args[args.len() - 3..], ["-n", "200", "main"]);
    }

    #[test]
    fn test_message_search_splits_words() {
        let args = search_query_args("fix race", CommitSearchMethod::ByMessage, true, 0);
        assert!(args.contains(&"--grep=fix".to_string()));
        assert!(args.contains(&"--grep=race".to_string()));
        assert!(args.contains(&"--all-match".to_string()));
        assert!(!args.contains(&"--branches".to_string()));
    }

    #[test]
    fn test_all_branches_scope() {
        let args = search_query_args("jane", CommitSearchMethod::ByAuthor, false, 0);
        assert!(args.contains(&"--branches".to_string()));
        assert!(args.contains(&"--remotes".to_string()));
        assert!(args.contains(&"--author=jane".to_string()));
    }

    #[test]
    fn test_filename_search_uses_name_only_and_skip() {
        let args = search_query_args("scan.rs", CommitSearchMethod::ByFileName, true, 1000);
        assert!(args.contains(&"--skip=1000".to_string()));
        assert!(args.contains(&"--name-only".to_string()));
        assert!(args.contains(&format!("--format={COMMIT_LOG_FORMAT}%n")));
        // The filter drives post-parse filtering, not the query itself.
        assert!(!args.iter().any(|a| a.contains("scan.rs")));
    }

    #[test]
    fn test_skip_ignored_outside_filename_search() {
        let args = search_query_args("x", CommitSearchMethod::ByContent, true, 500);
        assert!(!args.iter().any(|a| a.starts_with("--skip")));
        assert!(args.contains(&"-Gx".to_string()));
    }

    #[test]
    fn test_pathspec_terminator() {
        let args = search_query_args("src/scan.rs", CommitSearchMethod::ByPath, true, 0);
        let dashdash = args.iter().position(|a| a == "--").expect("-- present");
        assert_eq!(args[dashdash + 1], "src/scan.rs");
    }

    #[test]
    fn test_reachable_since_args() {
        let args = reachable_since_args("2026-01-15 12:00:00");
        assert_eq!(
            args,
            vec!["log", "--since=2026-01-15 12:00:00", "--format=%H"]
        );
    }
}

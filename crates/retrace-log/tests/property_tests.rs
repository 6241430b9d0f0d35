//! Property tests for retrace-log
//!
//! Rendering arbitrary well-formed commits and parsing the result must be
//! lossless, whatever the field contents.

use proptest::prelude::*;
use retrace_log::commit::UserStore;
use retrace_log::parser::{RefDecoratorParser, parse_log, parse_log_filtered};

#[derive(Debug, Clone)]
struct ArbCommit {
    sha: String,
    parents: Vec<String>,
    author: String,
    author_email: String,
    author_time: u64,
    committer: String,
    committer_email: String,
    committer_time: u64,
    subject: String,
}

fn sha_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-f]{40}").expect("valid regex")
}

fn ident_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z .-]{0,19}").expect("valid regex")
}

fn subject_strategy() -> impl Strategy<Value = String> {
    // Printable ASCII; newlines would start the next record.
    proptest::string::string_regex("[ -~]{0,60}").expect("valid regex")
}

fn commit_strategy() -> impl Strategy<Value = ArbCommit> {
    (
        sha_strategy(),
        proptest::collection::vec(sha_strategy(), 0..3),
        ident_strategy(),
        ident_strategy(),
        any::<u32>(),
        ident_strategy(),
        ident_strategy(),
        any::<u32>(),
        subject_strategy(),
    )
        .prop_map(
            |(sha, parents, author, author_email, at, committer, committer_email, ct, subject)| {
                ArbCommit {
                    sha,
                    parents,
                    author,
                    author_email,
                    author_time: u64::from(at),
                    committer,
                    committer_email,
                    committer_time: u64::from(ct),
                    subject,
                }
            },
        )
}

fn render(commits: &[ArbCommit]) -> String {
    let mut out = String::new();
    for c in commits {
        out.push_str(&format!(
            "{}\n{}\n\n{}±{}\n{}\n{}±{}\n{}\n{}\n",
            c.sha,
            c.parents.join(" "),
            c.author,
            c.author_email,
            c.author_time,
            c.committer,
            c.committer_email,
            c.committer_time,
            c.subject
        ));
    }
    out
}

proptest! {
    #[test]
    fn roundtrip_preserves_every_field(commits in proptest::collection::vec(commit_strategy(), 0..12)) {
        let mut users = UserStore::new();
        let parsed = parse_log(&render(&commits), &mut users, &RefDecoratorParser)
            .expect("well-formed input must parse");

        prop_assert_eq!(parsed.commits.len(), commits.len());
        for (got, want) in parsed.commits.iter().zip(&commits) {
            prop_assert_eq!(&got.sha, &want.sha);
            prop_assert_eq!(&got.parents, &want.parents);
            prop_assert_eq!(&got.author.name, &want.author);
            prop_assert_eq!(&got.author.email, &want.author_email);
            prop_assert_eq!(got.author_time, want.author_time);
            prop_assert_eq!(&got.committer.name, &want.committer);
            prop_assert_eq!(&got.committer.email, &want.committer_email);
            prop_assert_eq!(got.committer_time, want.committer_time);
            prop_assert_eq!(&got.subject, &want.subject);
        }
    }

    #[test]
    fn parent_count_matches_token_count(commits in proptest::collection::vec(commit_strategy(), 1..8)) {
        let mut users = UserStore::new();
        let parsed = parse_log(&render(&commits), &mut users, &RefDecoratorParser)
            .expect("well-formed input must parse");

        for (got, want) in parsed.commits.iter().zip(&commits) {
            prop_assert_eq!(got.parents.len(), want.parents.len());
        }
    }

    #[test]
    fn filtered_total_counts_all_headers(
        commits in proptest::collection::vec(commit_strategy(), 0..10),
        filter in "[a-z]{1,8}",
    ) {
        let mut rendered = String::new();
        for c in &commits {
            rendered.push_str(&format!(
                "{}\n{}\n\n{}±{}\n{}\n{}±{}\n{}\n{}\n\n",
                c.sha,
                c.parents.join(" "),
                c.author,
                c.author_email,
                c.author_time,
                c.committer,
                c.committer_email,
                c.committer_time,
                c.subject
            ));
            rendered.push_str("src/some/path.txt\n");
        }

        let mut users = UserStore::new();
        let result = parse_log_filtered(&rendered, &filter, &mut users, &RefDecoratorParser)
            .expect("well-formed input must parse");

        prop_assert_eq!(result.total_scanned, commits.len());
        // Whatever matched, nothing outside the scanned set may appear.
        prop_assert!(result.commits.len() <= commits.len());
    }
}

use crate::error::{RankError, Result};
use crate::types::commit::Commit;
use crate::types::config::MalformedPolicy;
use tracing::warn;

pub const REQUIRED_FIELDS: usize = 6;

const TIMESTAMP: usize = 0;
const USER: usize = 1;
const REPOSITORY: usize = 2;
const FILES_CHANGED: usize = 3;
const ADDITIONS: usize = 4;
const DELETIONS: usize = 5;

/// Commits parsed from a record set, plus the rows left out under `skip`.
#[derive(Debug, Default)]
pub struct ParsedCommits {
    pub commits: Vec<Commit>,
    pub skipped: Vec<RankError>,
}

/// Parses one data row. `row` is the record index used in error messages.
///
/// Fields are positional: `timestamp, user, repository, files, additions,
/// deletions`. Extra columns are ignored and string fields are kept verbatim.
pub fn parse_commit<S: AsRef<str>>(row: usize, record: &[S]) -> Result<Commit> {
    if record.len() < REQUIRED_FIELDS {
        return Err(RankError::malformed(
            row,
            format!(
                "expected at least {REQUIRED_FIELDS} fields, found {}",
                record.len()
            ),
        ));
    }

    let timestamp = parse_field::<i64, S>(row, record, TIMESTAMP, "timestamp")?;
    let files_changed = parse_field::<u64, S>(row, record, FILES_CHANGED, "files_changed")?;
    let additions = parse_field::<u64, S>(row, record, ADDITIONS, "additions")?;
    let deletions = parse_field::<u64, S>(row, record, DELETIONS, "deletions")?;

    let repository_name = record[REPOSITORY].as_ref();
    if repository_name.is_empty() {
        return Err(RankError::malformed(row, "repository name is empty"));
    }
    if additions.checked_add(deletions).is_none() {
        return Err(RankError::malformed(row, "additions + deletions overflows"));
    }

    Ok(Commit::new(
        repository_name,
        record[USER].as_ref(),
        files_changed,
        additions,
        deletions,
        timestamp,
    ))
}

fn parse_field<T: std::str::FromStr, S: AsRef<str>>(
    row: usize,
    record: &[S],
    index: usize,
    name: &str,
) -> Result<T> {
    let raw = record[index].as_ref();
    raw.parse::<T>().map_err(|_| {
        RankError::malformed(row, format!("{name} is not a valid integer: {raw:?}"))
    })
}

/// Parses every record after the header row.
///
/// Under [`MalformedPolicy::Abort`] the first bad row fails the whole call and
/// no commits are returned.
pub fn parse_records<S: AsRef<str>>(
    records: &[Vec<S>],
    policy: MalformedPolicy,
) -> Result<ParsedCommits> {
    let mut parsed = ParsedCommits {
        commits: Vec::with_capacity(records.len().saturating_sub(1)),
        skipped: Vec::new(),
    };

    for (row, record) in records.iter().enumerate().skip(1) {
        match parse_commit(row, record) {
            Ok(commit) => parsed.commits.push(commit),
            Err(err) => match policy {
                MalformedPolicy::Abort => return Err(err),
                MalformedPolicy::Skip => {
                    warn!("skipping row: {err}");
                    parsed.skipped.push(err);
                }
            },
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|field| field.to_string()).collect()
    }

    fn header() -> Vec<String> {
        row(&[
            "timestamp",
            "username",
            "repository",
            "files",
            "additions",
            "deletions",
        ])
    }

    #[test]
    fn parse_commit_reads_positional_fields() {
        let commit = parse_commit(1, &row(&["1700000000", "alice", "r1", "3", "10", "5"]))
            .expect("row should parse");

        assert_eq!(commit.timestamp, 1_700_000_000);
        assert_eq!(commit.user, "alice");
        assert_eq!(commit.repository_name, "r1");
        assert_eq!(commit.files_changed, 3);
        assert_eq!(commit.additions, 10);
        assert_eq!(commit.deletions, 5);
        assert_eq!(commit.total_lines_changed, 15);
    }

    #[test]
    fn parse_commit_ignores_extra_columns_and_keeps_strings_verbatim() {
        let commit = parse_commit(
            4,
            &row(&["10", " Bob ", "Org/Repo", "0", "0", "0", "extra", "more"]),
        )
        .expect("row should parse");

        assert_eq!(commit.user, " Bob ");
        assert_eq!(commit.repository_name, "Org/Repo");
        assert_eq!(commit.total_lines_changed, 0);
    }

    #[test]
    fn parse_commit_is_idempotent() {
        let record = row(&["5", "u", "r", "1", "2", "3"]);
        assert_eq!(
            parse_commit(1, &record).expect("first parse"),
            parse_commit(1, &record).expect("second parse")
        );
    }

    #[test]
    fn parse_commit_rejects_short_rows() {
        let err = parse_commit(7, &row(&["5", "u", "r", "1", "2"])).expect_err("short row");
        match err {
            RankError::MalformedRecord { row, reason } => {
                assert_eq!(row, 7);
                assert!(reason.contains("at least 6 fields"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_commit_rejects_non_numeric_and_negative_counts() {
        for record in [
            row(&["x", "u", "r", "1", "2", "3"]),
            row(&["5", "u", "r", "one", "2", "3"]),
            row(&["5", "u", "r", "1", "ten", "3"]),
            row(&["5", "u", "r", "1", "2", "3.5"]),
            row(&["5", "u", "r", "1", "-2", "3"]),
            row(&["5", "u", "r", "1", " 2", "3"]),
        ] {
            assert!(
                matches!(
                    parse_commit(1, &record),
                    Err(RankError::MalformedRecord { row: 1, .. })
                ),
                "{record:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_commit_accepts_negative_timestamp() {
        let commit = parse_commit(1, &row(&["-86400", "u", "r", "1", "2", "3"]))
            .expect("pre-epoch timestamp should parse");
        assert_eq!(commit.timestamp, -86_400);
    }

    #[test]
    fn parse_records_skips_header() {
        let records = vec![header(), row(&["1", "u", "r1", "1", "1", "1"])];
        let parsed = parse_records(&records, MalformedPolicy::Abort).expect("records parse");
        assert_eq!(parsed.commits.len(), 1);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn parse_records_header_only_is_empty() {
        let parsed =
            parse_records(&[header()], MalformedPolicy::Abort).expect("header only is fine");
        assert!(parsed.commits.is_empty());

        let none: Vec<Vec<String>> = Vec::new();
        let parsed = parse_records(&none, MalformedPolicy::Abort).expect("no rows is fine");
        assert!(parsed.commits.is_empty());
    }

    #[test]
    fn parse_records_aborts_on_first_malformed_row() {
        let records = vec![
            header(),
            row(&["1", "u", "r1", "1", "1", "1"]),
            row(&["2", "u", "r1", "1", "abc", "1"]),
            row(&["3", "u", "r1", "1", "1", "1"]),
        ];
        let err = parse_records(&records, MalformedPolicy::Abort).expect_err("should abort");
        assert!(matches!(err, RankError::MalformedRecord { row: 2, .. }));
    }

    #[test]
    fn parse_records_skip_policy_collects_bad_rows() {
        let records = vec![
            header(),
            row(&["1", "u", "r1", "1", "1", "1"]),
            row(&["2", "u", "r1"]),
            row(&["3", "u", "r2", "1", "1", "1"]),
        ];
        let parsed = parse_records(&records, MalformedPolicy::Skip).expect("skip mode parses");
        assert_eq!(parsed.commits.len(), 2);
        assert_eq!(parsed.skipped.len(), 1);
        assert!(matches!(
            parsed.skipped[0],
            RankError::MalformedRecord { row: 2, .. }
        ));
    }
}

/// One commit row from the activity ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub repository_name: String,
    pub user: String,
    pub files_changed: u64,
    pub additions: u64,
    pub deletions: u64,
    pub total_lines_changed: u64,
    /// Unix epoch seconds.
    pub timestamp: i64,
}

impl Commit {
    pub fn new(
        repository_name: impl Into<String>,
        user: impl Into<String>,
        files_changed: u64,
        additions: u64,
        deletions: u64,
        timestamp: i64,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            user: user.into(),
            files_changed,
            additions,
            deletions,
            total_lines_changed: additions + deletions,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_lines_changed_is_derived() {
        let commit = Commit::new("r1", "alice", 2, 10, 5, 1_700_000_000);
        assert_eq!(commit.total_lines_changed, 15);
    }
}

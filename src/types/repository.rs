use crate::error::RankError;
use crate::types::commit::Commit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Repository {
    pub name: String,
    pub additions: u64,
    pub deletions: u64,
    pub total_lines_changed: u64,
    pub files: u64,
    pub score: f64,
}

impl Repository {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            additions: 0,
            deletions: 0,
            total_lines_changed: 0,
            files: 0,
            score: 0.0,
        }
    }

    /// Folds the raw line and file counts of `commit` into the running sums.
    ///
    /// Leaves the sums untouched when any of them would overflow.
    pub fn add_commit(&mut self, commit: &Commit) -> Result<(), RankError> {
        self.add_counts(
            commit.files_changed,
            commit.additions,
            commit.deletions,
            commit.total_lines_changed,
        )
    }

    fn add_counts(
        &mut self,
        files: u64,
        additions: u64,
        deletions: u64,
        total_lines_changed: u64,
    ) -> Result<(), RankError> {
        let files = self.checked_sum("files", self.files, files)?;
        let additions = self.checked_sum("additions", self.additions, additions)?;
        let deletions = self.checked_sum("deletions", self.deletions, deletions)?;
        let total_lines_changed = self.checked_sum(
            "total_lines_changed",
            self.total_lines_changed,
            total_lines_changed,
        )?;

        self.files = files;
        self.additions = additions;
        self.deletions = deletions;
        self.total_lines_changed = total_lines_changed;
        Ok(())
    }

    fn checked_sum(&self, field: &'static str, total: u64, delta: u64) -> Result<u64, RankError> {
        total
            .checked_add(delta)
            .ok_or_else(|| RankError::CountOverflow {
                repository: self.name.clone(),
                field,
            })
    }

    pub fn add_weighted(&mut self, commit: &Commit, weight: f64) {
        self.score += commit.total_lines_changed as f64 * weight;
    }

    /// Sums another partial aggregate of the same repository into this one.
    #[cfg(test)]
    pub fn merge(&mut self, other: &Repository) -> Result<(), RankError> {
        self.add_counts(
            other.files,
            other.additions,
            other.deletions,
            other.total_lines_changed,
        )?;
        self.score += other.score;
        Ok(())
    }
}

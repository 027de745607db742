pub mod decay;

pub use decay::DecayRate;

use crate::error::Result;
use crate::types::commit::Commit;
use crate::types::repository::Repository;
use std::collections::HashMap;
use tracing::{debug, info};

/// Oldest and newest commit timestamps of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub oldest: i64,
    pub newest: i64,
}

impl TimeSpan {
    /// `None` for an empty batch.
    pub fn of(commits: &[Commit]) -> Option<Self> {
        commits.iter().fold(None, |span, commit| {
            let point = TimeSpan {
                oldest: commit.timestamp,
                newest: commit.timestamp,
            };
            Some(match span {
                Some(span) => span.merge(point),
                None => point,
            })
        })
    }

    pub fn merge(self, other: TimeSpan) -> TimeSpan {
        TimeSpan {
            oldest: self.oldest.min(other.oldest),
            newest: self.newest.max(other.newest),
        }
    }

    /// Seconds between `timestamp` and the newest commit.
    pub fn age_of(&self, timestamp: i64) -> u64 {
        self.newest.abs_diff(timestamp)
    }

    pub fn duration_secs(&self) -> u64 {
        self.newest.abs_diff(self.oldest)
    }
}

/// Per-run aggregation state. Owns every [`Repository`] until [`finish`](Self::finish).
#[derive(Debug)]
pub struct RankingContext {
    decay: DecayRate,
    span: Option<TimeSpan>,
    repositories: HashMap<String, Repository>,
}

impl RankingContext {
    pub fn new(decay: DecayRate) -> Self {
        Self {
            decay,
            span: None,
            repositories: HashMap::new(),
        }
    }

    pub fn span(&self) -> Option<TimeSpan> {
        self.span
    }

    /// Folds raw counts of `commits` into their repositories and widens the span.
    pub fn aggregate(&mut self, commits: &[Commit]) -> Result<()> {
        if let Some(batch) = TimeSpan::of(commits) {
            self.span = Some(match self.span {
                Some(span) => span.merge(batch),
                None => batch,
            });
        }
        for commit in commits {
            self.repositories
                .entry(commit.repository_name.clone())
                .or_insert_with(|| Repository::new(commit.repository_name.clone()))
                .add_commit(commit)?;
        }
        Ok(())
    }

    /// Adds each commit's decay-weighted line delta to its repository score.
    ///
    /// Ages are measured against the newest timestamp seen by [`aggregate`](Self::aggregate),
    /// so every commit must have been aggregated first.
    pub fn score(&mut self, commits: &[Commit]) {
        let Some(span) = self.span else {
            return;
        };
        for commit in commits {
            let weight = self.decay.weight(span.age_of(commit.timestamp));
            self.repositories
                .entry(commit.repository_name.clone())
                .or_insert_with(|| Repository::new(commit.repository_name.clone()))
                .add_weighted(commit, weight);
        }
    }

    /// Combines a context built from another shard of the same batch.
    ///
    /// Only valid for contexts that have aggregated but not yet scored.
    #[cfg(test)]
    pub fn merge(&mut self, other: RankingContext) -> Result<()> {
        if let Some(other_span) = other.span {
            self.span = Some(match self.span {
                Some(span) => span.merge(other_span),
                None => other_span,
            });
        }
        for (name, repository) in other.repositories {
            match self.repositories.get_mut(&name) {
                Some(existing) => existing.merge(&repository)?,
                None => {
                    self.repositories.insert(name, repository);
                }
            }
        }
        Ok(())
    }

    pub fn finish(self) -> Ranking {
        Ranking {
            decay_rate: self.decay.value(),
            span: self.span,
            repositories: self.repositories.into_values().collect(),
        }
    }
}

/// Unordered result of a ranking run.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub decay_rate: f64,
    pub span: Option<TimeSpan>,
    pub repositories: Vec<Repository>,
}

/// Scores every repository in `commits`. An empty batch yields no repositories.
pub fn rank(commits: &[Commit], decay: DecayRate) -> Result<Ranking> {
    let mut context = RankingContext::new(decay);
    context.aggregate(commits)?;

    if let Some(span) = context.span() {
        info!(
            "time range: oldest={}, newest={} (diff: {} seconds)",
            span.oldest,
            span.newest,
            span.duration_secs()
        );
    } else {
        info!("no commits to rank");
    }
    debug!("using decay rate: {:.10}", decay.value());

    context.score(commits);
    Ok(context.finish())
}

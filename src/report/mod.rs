pub mod csv;
pub mod json;
pub mod md;

use crate::error::{RankError, Result};
use crate::rank::Ranking;
use crate::types::repository::Repository;
use std::cmp::Ordering;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Md,
}

impl OutputFormat {
    /// Format implied by an output path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(OutputFormat::Json),
            Some("csv") => Ok(OutputFormat::Csv),
            Some("md") => Ok(OutputFormat::Md),
            _ => Err(RankError::InvalidOutputPath(path.display().to_string())),
        }
    }
}

/// Sorts by score descending, ties broken by name ascending.
pub fn sort_ranked(repositories: &mut [Repository]) {
    repositories.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Sorts the ranking and keeps at most `tail` repositories.
pub fn top(mut ranking: Ranking, tail: usize) -> Ranking {
    sort_ranked(&mut ranking.repositories);
    ranking.repositories.truncate(tail);
    ranking
}

pub fn render(ranking: &Ranking, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(&ranking.repositories).map_err(RankError::Json),
        OutputFormat::Csv => self::csv::to_csv(&ranking.repositories),
        OutputFormat::Md => Ok(md::to_markdown(ranking)),
    }
}

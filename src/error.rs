use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("input file must be a csv file: {0}")]
    InvalidInputPath(String),

    #[error("output file must be a csv, json or md file: {0}")]
    InvalidOutputPath(String),

    #[error("{field} total overflows for repository {repository}")]
    CountOverflow {
        repository: String,
        field: &'static str,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl RankError {
    pub fn malformed(row: usize, reason: impl Into<String>) -> Self {
        RankError::MalformedRecord {
            row,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's input rather than the environment.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            RankError::MalformedRecord { .. }
                | RankError::InvalidConfiguration(_)
                | RankError::InvalidInputPath(_)
                | RankError::InvalidOutputPath(_)
                | RankError::CountOverflow { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RankError>;

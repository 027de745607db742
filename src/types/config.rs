use crate::error::RankError;
use crate::rank::DecayRate;
use serde::Deserialize;

pub const DEFAULT_TARGET_WEIGHT: f64 = 0.3;
pub const DEFAULT_HALF_LIFE_DAYS: u32 = 30;
pub const DEFAULT_TAIL: usize = 20;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankConfig {
    pub decay: Option<DecayConfig>,
    pub ingest: Option<IngestConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecayConfig {
    pub target_weight: Option<f64>,
    pub half_life_days: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    pub on_malformed: Option<MalformedPolicy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub tail: Option<usize>,
}

/// What to do with a row that cannot be parsed into a commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    #[default]
    Abort,
    Skip,
}

/// Fully resolved settings for one ranking run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankSettings {
    pub target_weight: f64,
    pub half_life_days: u32,
    pub on_malformed: MalformedPolicy,
    pub tail: usize,
}

impl Default for RankSettings {
    fn default() -> Self {
        Self {
            target_weight: DEFAULT_TARGET_WEIGHT,
            half_life_days: DEFAULT_HALF_LIFE_DAYS,
            on_malformed: MalformedPolicy::Abort,
            tail: DEFAULT_TAIL,
        }
    }
}

impl RankSettings {
    pub fn decay_rate(&self) -> Result<DecayRate, RankError> {
        DecayRate::new(self.target_weight, self.half_life_days)
    }

    pub fn validate(&self) -> Result<(), RankError> {
        self.decay_rate().map(|_| ())
    }
}

impl RankConfig {
    pub fn settings(&self) -> RankSettings {
        let defaults = RankSettings::default();
        let decay = self.decay.as_ref();
        RankSettings {
            target_weight: decay
                .and_then(|decay| decay.target_weight)
                .unwrap_or(defaults.target_weight),
            half_life_days: decay
                .and_then(|decay| decay.half_life_days)
                .unwrap_or(defaults.half_life_days),
            on_malformed: self
                .ingest
                .as_ref()
                .and_then(|ingest| ingest.on_malformed)
                .unwrap_or(defaults.on_malformed),
            tail: self
                .output
                .as_ref()
                .and_then(|output| output.tail)
                .unwrap_or(defaults.tail),
        }
    }
}

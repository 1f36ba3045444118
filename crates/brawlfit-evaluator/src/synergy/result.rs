use arrayvec::ArrayVec;
use serde::Serialize;

use crate::synergy::rule::RuleHit;

/// Upper bound on the number of reasons in a result.
pub const MAX_REASONS: usize = 10;

pub const STRENGTH_PREFIX: &str = "\u{2705} ";
pub const WEAKNESS_PREFIX: &str = "\u{26a0}\u{fe0f} ";

/// Lowest possible synergy score.
pub const MIN_SCORE: u32 = 0;
/// Highest possible synergy score.
pub const MAX_SCORE: u32 = 100;

/// Outcome of scoring one team on one map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynergyResult {
    /// Final score in `0..=100`.
    pub score: u32,
    /// Prefixed strengths followed by prefixed weaknesses, at most [`MAX_REASONS`].
    pub reasons: ArrayVec<String, MAX_REASONS>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl SynergyResult {
    #[must_use]
    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.score)
    }
}

/// Builds the reasons list: strengths first, then weaknesses, truncated.
#[must_use]
pub fn build_reasons(strengths: &[String], weaknesses: &[String]) -> ArrayVec<String, MAX_REASONS> {
    strengths
        .iter()
        .map(|s| format!("{STRENGTH_PREFIX}{s}"))
        .chain(weaknesses.iter().map(|w| format!("{WEAKNESS_PREFIX}{w}")))
        .take(MAX_REASONS)
        .collect()
}

/// Score floor applied when a result has no weaknesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFloor {
    /// Four or more strengths.
    AtLeast80,
    /// Six or more strengths.
    AtLeast90,
}

impl ScoreFloor {
    #[must_use]
    pub fn select(strengths: usize, weaknesses: usize) -> Option<Self> {
        if weaknesses > 0 {
            return None;
        }
        match strengths {
            6.. => Some(Self::AtLeast90),
            4.. => Some(Self::AtLeast80),
            _ => None,
        }
    }

    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            Self::AtLeast80 => 80,
            Self::AtLeast90 => 90,
        }
    }
}

/// How the final score came about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Sum of all rule deltas, before clamping.
    pub raw_total: i32,
    /// `raw_total` clamped to `0..=100`.
    pub clamped: u32,
    pub floor: Option<ScoreFloor>,
    /// Rules that changed the score, in evaluation order.
    pub hits: Vec<RuleHit>,
}

/// Clamps a raw total to the score range, then raises it to the UX floor.
///
/// The floor only ever raises a score.
#[must_use]
pub fn normalize_score(raw_total: i32, floor: Option<ScoreFloor>) -> (u32, u32) {
    #[expect(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    let clamped = raw_total.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u32;
    let score = floor.map_or(clamped, |floor| clamped.max(floor.value()));
    (clamped, score)
}

/// Coarse reading of a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGrade {
    #[display("great")]
    Great,
    #[display("good")]
    Good,
    #[display("weak")]
    Weak,
    #[display("poor")]
    Poor,
}

impl ScoreGrade {
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            75.. => Self::Great,
            55.. => Self::Good,
            35.. => Self::Weak,
            _ => Self::Poor,
        }
    }
}

//! Synergy Rule Engine: scores a team's fit on a map.
//!
//! # Procedure
//!
//! 1. Aggregate the team into [`TeamFeatures`].
//! 2. Read the map's mode from its first `mode:` tag.
//! 3. Run the rule table ([`rules::all_rules`]) in order: global rules, the
//!    rules of the map's mode, then map-tag tweaks. Each fired rule adds or
//!    subtracts its points and records a strength or weakness message.
//! 4. Clamp the total to `0..=100` and, when there are no weaknesses, raise it
//!    to the floor earned by the number of strengths ([`ScoreFloor`]).
//! 5. List strengths then weaknesses as reasons, at most [`MAX_REASONS`].
//!
//! Scoring is a pure function of its inputs: every call builds its own
//! [`ScoreAccumulator`] and keeps nothing afterwards.
//!
//! # Example
//!
//! ```
//! use brawlfit_evaluator::{
//!     entity::TaggedEntity,
//!     synergy::score_team_on_map,
//!     team::Team,
//! };
//!
//! let a = TaggedEntity::new(1_u64, "A", ["range:long", "damage:poke", "control:1"]);
//! let b = TaggedEntity::new(2_u64, "B", ["range:mid", "control:2", "has:areadamage"]);
//! let c = TaggedEntity::new(3_u64, "C", ["range:short", "tankiness:high", "anti_tank:high"]);
//! let map = TaggedEntity::new(10_u64, "Hard Rock Mine", ["mode:gem grab"]);
//!
//! let result = score_team_on_map(&Team::new([&a, &b, &c]), &map);
//! assert!(result.score <= 100);
//! assert!(result.weaknesses.contains(&"No reliable gem carrier".to_owned()));
//! ```

use serde::Serialize;
use tracing::debug;

use crate::{
    entity::Tagged,
    tag_index::TagIndex,
    team::Team,
    team_feature::TeamFeatures,
};

pub use self::{
    mode::GameMode,
    result::{
        MAX_REASONS, MAX_SCORE, MIN_SCORE, STRENGTH_PREFIX, ScoreBreakdown, ScoreFloor, ScoreGrade,
        SynergyResult, WEAKNESS_PREFIX, build_reasons, normalize_score,
    },
    rule::{Category, Effect, Rule, RuleContext, RuleHit, RuleStage, ScoreAccumulator, Tier},
};

mod mode;
mod result;
pub mod rule;
pub mod rules;

/// Map tag key holding the game mode.
pub const MODE_KEY: &str = "mode";

/// Full output of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub features: TeamFeatures,
    /// Raw `mode:` tag value of the map, lower-cased.
    pub mode_name: Option<String>,
    /// Recognized mode, if the raw name has a rule set.
    pub mode: Option<GameMode>,
    pub result: SynergyResult,
    pub breakdown: ScoreBreakdown,
}

/// Scores teams against a fixed rule table.
#[derive(Debug, Clone, Copy)]
pub struct SynergyEvaluator {
    rules: &'static [Rule],
}

impl Default for SynergyEvaluator {
    fn default() -> Self {
        Self::new(rules::all_rules())
    }
}

impl SynergyEvaluator {
    /// Creates an evaluator over `rules`.
    ///
    /// # Panics
    ///
    /// Panics if a rule of an earlier stage follows a rule of a later one.
    #[must_use]
    pub fn new(rules: &'static [Rule]) -> Self {
        assert!(
            rule::is_stage_ordered(rules),
            "rules must be ordered global, mode, map tweak"
        );
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    #[must_use]
    pub fn score<E, M>(&self, team: &Team<'_, E>, map: &M) -> SynergyResult
    where
        E: Tagged + ?Sized,
        M: Tagged + ?Sized,
    {
        self.evaluate(team, map).result
    }

    #[must_use]
    pub fn evaluate<E, M>(&self, team: &Team<'_, E>, map: &M) -> Evaluation
    where
        E: Tagged + ?Sized,
        M: Tagged + ?Sized,
    {
        let features = TeamFeatures::from_team(team);
        let map_tags = TagIndex::new(map.tags());
        let mode_name = map_tags.value_of(MODE_KEY).map(str::to_lowercase);
        let mode = mode_name.as_deref().and_then(GameMode::from_tag_value);
        debug!(map = map.name(), mode_name = ?mode_name, mode = ?mode, "scoring team");

        let ctx = RuleContext {
            features: &features,
            mode,
            map_tags: &map_tags,
        };
        let mut acc = ScoreAccumulator::new();
        for rule in self.rules {
            if let Some(effect) = rule.evaluate(&ctx) {
                let delta = acc.apply(rule.id, effect);
                debug!(rule = rule.id, delta, message = effect.message, "rule fired");
            }
        }

        let (raw_total, strengths, weaknesses, hits) = acc.into_parts();
        let floor = ScoreFloor::select(strengths.len(), weaknesses.len());
        let (clamped, score) = normalize_score(raw_total, floor);
        debug!(raw_total, clamped, score, ?floor, "score normalized");

        let reasons = build_reasons(&strengths, &weaknesses);
        Evaluation {
            features,
            mode_name,
            mode,
            result: SynergyResult {
                score,
                reasons,
                strengths,
                weaknesses,
            },
            breakdown: ScoreBreakdown {
                raw_total,
                clamped,
                floor,
                hits,
            },
        }
    }
}

/// Scores `team` on `map` with the built-in rule table.
#[must_use]
pub fn score_team_on_map<E, M>(team: &Team<'_, E>, map: &M) -> SynergyResult
where
    E: Tagged + ?Sized,
    M: Tagged + ?Sized,
{
    SynergyEvaluator::default().score(team, map)
}

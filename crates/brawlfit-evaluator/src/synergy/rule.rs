//! Rule descriptors and the per-call score accumulator.
//!
//! A [`Rule`] is a chain of [`Tier`]s: the first tier whose predicate holds
//! fires its [`Effect`] and the remaining tiers are skipped, the same shape as
//! an `if / else if / else` block. A [`RuleStage`] gates the whole rule and
//! fixes where it runs in the evaluation order.

use std::fmt;

use serde::Serialize;

use crate::{synergy::GameMode, tag_index::TagIndex, team_feature::TeamFeatures};

/// Everything a rule predicate may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub features: &'a TeamFeatures,
    pub mode: Option<GameMode>,
    pub map_tags: &'a TagIndex,
}

pub type Predicate = fn(&RuleContext<'_>) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strength,
    Weakness,
}

/// Point change and message produced by a fired tier.
///
/// `points` is a magnitude: strengths add it, weaknesses subtract it. A
/// non-positive magnitude changes nothing and records no message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub category: Category,
    pub points: i32,
    pub message: &'static str,
}

impl Effect {
    #[must_use]
    pub const fn strength(points: i32, message: &'static str) -> Self {
        Self {
            category: Category::Strength,
            points,
            message,
        }
    }

    #[must_use]
    pub const fn weakness(points: i32, message: &'static str) -> Self {
        Self {
            category: Category::Weakness,
            points,
            message,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Tier {
    pub when: Predicate,
    pub effect: Effect,
}

impl Tier {
    #[must_use]
    pub const fn when(when: Predicate, effect: Effect) -> Self {
        Self { when, effect }
    }

    /// Tier that always matches, closing a chain.
    #[must_use]
    pub const fn otherwise(effect: Effect) -> Self {
        Self {
            when: always,
            effect,
        }
    }
}

fn always(_: &RuleContext<'_>) -> bool {
    true
}

impl fmt::Debug for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tier")
            .field("effect", &self.effect)
            .finish_non_exhaustive()
    }
}

/// Evaluation stage of a rule, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStage {
    /// Runs for every map.
    Global,
    /// Runs only when the map's mode is one of the listed modes.
    Mode(&'static [GameMode]),
    /// Runs for every map; predicates read the map tags.
    MapTweak,
}

impl RuleStage {
    #[must_use]
    pub fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        match self {
            Self::Global | Self::MapTweak => true,
            Self::Mode(modes) => ctx.mode.is_some_and(|mode| modes.contains(&mode)),
        }
    }

    fn order(&self) -> u8 {
        match self {
            Self::Global => 0,
            Self::Mode(_) => 1,
            Self::MapTweak => 2,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub stage: RuleStage,
    pub tiers: &'static [Tier],
}

impl Rule {
    /// Effect of the first matching tier, if the stage applies.
    #[must_use]
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Effect> {
        if !self.stage.applies(ctx) {
            return None;
        }
        self.tiers
            .iter()
            .find(|tier| (tier.when)(ctx))
            .map(|tier| tier.effect)
    }
}

/// Returns `true` if `rules` never runs a later stage before an earlier one.
#[must_use]
pub fn is_stage_ordered(rules: &[Rule]) -> bool {
    rules
        .windows(2)
        .all(|w| w[0].stage.order() <= w[1].stage.order())
}

/// A rule that changed the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: &'static str,
    pub delta: i32,
    pub message: &'static str,
}

/// Running total and messages of one scoring call.
#[derive(Debug, Clone, Default)]
pub struct ScoreAccumulator {
    total: i32,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    hits: Vec<RuleHit>,
}

impl ScoreAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `points` and records a strength. Returns the applied delta.
    pub fn add(&mut self, rule: &'static str, points: i32, message: &'static str) -> i32 {
        if points <= 0 {
            return 0;
        }
        push_once(&mut self.strengths, message);
        self.record(rule, points, message)
    }

    /// Subtracts `points` and records a weakness. Returns the applied delta.
    pub fn sub(&mut self, rule: &'static str, points: i32, message: &'static str) -> i32 {
        if points <= 0 {
            return 0;
        }
        push_once(&mut self.weaknesses, message);
        self.record(rule, -points, message)
    }

    pub fn apply(&mut self, rule: &'static str, effect: Effect) -> i32 {
        match effect.category {
            Category::Strength => self.add(rule, effect.points, effect.message),
            Category::Weakness => self.sub(rule, effect.points, effect.message),
        }
    }

    fn record(&mut self, rule: &'static str, delta: i32, message: &'static str) -> i32 {
        self.total += delta;
        self.hits.push(RuleHit {
            rule,
            delta,
            message,
        });
        delta
    }

    #[must_use]
    pub fn total(&self) -> i32 {
        self.total
    }

    #[must_use]
    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    #[must_use]
    pub fn weaknesses(&self) -> &[String] {
        &self.weaknesses
    }

    #[must_use]
    pub fn into_parts(self) -> (i32, Vec<String>, Vec<String>, Vec<RuleHit>) {
        (self.total, self.strengths, self.weaknesses, self.hits)
    }
}

fn push_once(messages: &mut Vec<String>, message: &str) {
    if !messages.iter().any(|m| m == message) {
        messages.push(message.to_owned());
    }
}

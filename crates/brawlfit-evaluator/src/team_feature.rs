//! Team Feature Aggregator: reduces three tagged brawlers into one summary.
//!
//! # Pipeline
//!
//! For every member a [`TagIndex`] is built and queried for the recognized keys:
//!
//! | Key | Reduction |
//! |-----|-----------|
//! | `range` | bucket count over short / mid / long |
//! | `mobility`, `tankiness` | bucket count over low / med / high |
//! | `damage` | count over burst / sustained / poke |
//! | `anti_tank`, `anti_assassin`, `gem` | bucket count over low / med / high |
//! | `control`, `sustain` | mean over members that carry the key |
//! | `has:wallbreak`, `has:vision`, `has:areadamage` | any member |
//!
//! Values outside a key's vocabulary are ignored, they are not counted in any
//! bucket. Averages skip members without a parsable number in both the sum and
//! the denominator, and are `0.0` when no member has one.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::trace;

use crate::{entity::Tagged, tag_index::TagIndex, team::Team};

/// Tag keys and flags read by the aggregator.
pub mod keys {
    pub const RANGE: &str = "range";
    pub const MOBILITY: &str = "mobility";
    pub const DAMAGE: &str = "damage";
    pub const TANKINESS: &str = "tankiness";
    pub const CONTROL: &str = "control";
    pub const SUSTAIN: &str = "sustain";
    pub const ANTI_TANK: &str = "anti_tank";
    pub const ANTI_ASSASSIN: &str = "anti_assassin";
    pub const GEM: &str = "gem";

    pub const WALLBREAK: &str = "wallbreak";
    pub const VISION: &str = "vision";
    pub const AREA_DAMAGE: &str = "areadamage";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeBucket {
    Short,
    Mid,
    Long,
}

impl RangeBucket {
    #[must_use]
    pub fn from_tag_value(value: &str) -> Option<Self> {
        match value {
            "short" => Some(Self::Short),
            "mid" | "medium" => Some(Self::Mid),
            "long" => Some(Self::Long),
            _ => None,
        }
    }
}

/// Three-step ordinal rating used by most tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Med,
    High,
}

impl Level {
    #[must_use]
    pub fn from_tag_value(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "med" | "medium" => Some(Self::Med),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageProfile {
    Burst,
    Sustained,
    Poke,
}

impl DamageProfile {
    #[must_use]
    pub fn from_tag_value(value: &str) -> Option<Self> {
        match value {
            "burst" => Some(Self::Burst),
            "sustained" => Some(Self::Sustained),
            "poke" => Some(Self::Poke),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RangeCounts {
    pub short: u32,
    pub mid: u32,
    pub long: u32,
}

impl RangeCounts {
    fn add(&mut self, bucket: RangeBucket) {
        match bucket {
            RangeBucket::Short => self.short += 1,
            RangeBucket::Mid => self.mid += 1,
            RangeBucket::Long => self.long += 1,
        }
    }

    /// Number of distinct buckets with at least one member (0..=3).
    #[must_use]
    pub fn populated_buckets(&self) -> u32 {
        [self.short, self.mid, self.long]
            .into_iter()
            .map(|n| u32::from(n > 0))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub low: u32,
    pub med: u32,
    pub high: u32,
}

impl LevelCounts {
    fn add(&mut self, level: Level) {
        match level {
            Level::Low => self.low += 1,
            Level::Med => self.med += 1,
            Level::High => self.high += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DamageCounts {
    pub burst: u32,
    pub sustained: u32,
    pub poke: u32,
}

impl DamageCounts {
    fn add(&mut self, profile: DamageProfile) {
        match profile {
            DamageProfile::Burst => self.burst += 1,
            DamageProfile::Sustained => self.sustained += 1,
            DamageProfile::Poke => self.poke += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    fn value(self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / f64::from(self.count)
        }
    }
}

/// Team-level summary consumed by the rule engine.
///
/// Built fresh for each scoring call and thrown away afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamFeatures {
    pub range: RangeCounts,
    pub mobility: LevelCounts,
    pub damage: DamageCounts,
    pub tankiness: LevelCounts,

    pub avg_control: f64,
    pub avg_sustain: f64,

    pub anti_tank: LevelCounts,
    pub anti_assassin: LevelCounts,
    /// Gem carrier suitability.
    pub gem: LevelCounts,

    pub has_wallbreak: bool,
    pub has_vision: bool,
    pub has_area_damage: bool,

    /// Union of all member tags. Inspection only, never scored.
    pub team_tags: BTreeSet<String>,
}

impl TeamFeatures {
    #[must_use]
    pub fn from_team<E>(team: &Team<'_, E>) -> Self
    where
        E: Tagged + ?Sized,
    {
        Self::from_members(team.iter())
    }

    /// Aggregates any number of members.
    ///
    /// Scoring always goes through [`Self::from_team`]; this is the reduction
    /// itself, without the team size constraint.
    #[must_use]
    pub fn from_members<'a, I, E>(members: I) -> Self
    where
        I: IntoIterator<Item = &'a E>,
        E: Tagged + ?Sized + 'a,
    {
        let mut features = Self::default();
        let mut control = Mean::default();
        let mut sustain = Mean::default();

        for member in members {
            let index = TagIndex::new(member.tags());
            trace!(id = %member.id(), name = member.name(), tags = index.len(), "aggregating member");
            features.team_tags.extend(index.iter().map(str::to_owned));

            if let Some(bucket) = index.value_of(keys::RANGE).and_then(RangeBucket::from_tag_value) {
                features.range.add(bucket);
            }
            if let Some(level) = level_of(&index, keys::MOBILITY) {
                features.mobility.add(level);
            }
            if let Some(profile) = index
                .value_of(keys::DAMAGE)
                .and_then(DamageProfile::from_tag_value)
            {
                features.damage.add(profile);
            }
            if let Some(level) = level_of(&index, keys::TANKINESS) {
                features.tankiness.add(level);
            }

            control.push(index.number_of(keys::CONTROL));
            sustain.push(index.number_of(keys::SUSTAIN));

            if let Some(level) = level_of(&index, keys::ANTI_TANK) {
                features.anti_tank.add(level);
            }
            if let Some(level) = level_of(&index, keys::ANTI_ASSASSIN) {
                features.anti_assassin.add(level);
            }
            if let Some(level) = level_of(&index, keys::GEM) {
                features.gem.add(level);
            }

            features.has_wallbreak |= index.has_flag(keys::WALLBREAK);
            features.has_vision |= index.has_flag(keys::VISION);
            features.has_area_damage |= index.has_flag(keys::AREA_DAMAGE);
        }

        features.avg_control = control.value();
        features.avg_sustain = sustain.value();
        features
    }
}

fn level_of(index: &TagIndex, key: &str) -> Option<Level> {
    index.value_of(key).and_then(Level::from_tag_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::TaggedEntity;

    fn features(members: &[&[&str]]) -> TeamFeatures {
        let entities = members
            .iter()
            .enumerate()
            .map(|(i, tags)| TaggedEntity::new(i as u64, format!("b{i}"), tags.iter().copied()))
            .collect::<Vec<_>>();
        TeamFeatures::from_members(&entities)
    }

    #[test]
    fn test_range_synonyms_and_unknown_values() {
        let f = features(&[&["range:medium"], &["range:thrower"], &["range:mid"]]);
        assert_eq!(f.range, RangeCounts { short: 0, mid: 2, long: 0 });
        assert_eq!(f.range.populated_buckets(), 1);
    }

    #[test]
    fn test_populated_buckets_counts_distinct_buckets() {
        let f = features(&[&["range:long"], &["range:long"], &["range:long"]]);
        assert_eq!(f.range.long, 3);
        assert_eq!(f.range.populated_buckets(), 1);

        let f = features(&[&["range:long"], &["range:short"], &["range:mid"]]);
        assert_eq!(f.range.populated_buckets(), 3);
    }

    #[test]
    fn test_level_buckets() {
        let f = features(&[
            &["mobility:high", "tankiness:medium", "anti_tank:high", "gem:low"],
            &["mobility:med", "tankiness:low", "anti_assassin:med", "gem:very"],
            &["mobility:fast", "tankiness:high", "anti_tank:low"],
        ]);
        assert_eq!(f.mobility, LevelCounts { low: 0, med: 1, high: 1 });
        assert_eq!(f.tankiness, LevelCounts { low: 1, med: 1, high: 1 });
        assert_eq!(f.anti_tank, LevelCounts { low: 1, med: 0, high: 1 });
        assert_eq!(f.anti_assassin, LevelCounts { low: 0, med: 1, high: 0 });
        assert_eq!(f.gem, LevelCounts { low: 1, med: 0, high: 0 });
    }

    #[test]
    fn test_damage_profiles_are_exact() {
        let f = features(&[&["damage:burst"], &["damage:poke"], &["damage:medium"]]);
        assert_eq!(f.damage, DamageCounts { burst: 1, sustained: 0, poke: 1 });
    }

    #[test]
    fn test_averages_skip_missing_members() {
        let f = features(&[
            &["control:3", "sustain:1"],
            &["control:1"],
            &["sustain:abc"],
        ]);
        assert!((f.avg_control - 2.0).abs() < f64::EPSILON);
        assert!((f.avg_sustain - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_averages_default_to_zero() {
        let f = features(&[&["range:long"], &[], &["control:x"]]);
        assert!(f.avg_control.abs() < f64::EPSILON);
        assert!(f.avg_sustain.abs() < f64::EPSILON);
    }

    #[test]
    fn test_flags_are_any_member() {
        let f = features(&[&["has:wallbreak"], &["HAS:AREADAMAGE"], &["vision:true"]]);
        assert!(f.has_wallbreak);
        assert!(f.has_area_damage);
        assert!(!f.has_vision);
    }

    #[test]
    fn test_team_tags_union() {
        let f = features(&[&["range:long", "has:vision"], &["range:long"], &["Gem:High"]]);
        assert_eq!(
            f.team_tags.iter().map(String::as_str).collect::<Vec<_>>(),
            ["gem:high", "has:vision", "range:long"]
        );
    }

    #[test]
    fn test_from_team_matches_from_members() {
        let a = TaggedEntity::new(1_u64, "a", ["range:short", "control:2"]);
        let b = TaggedEntity::new(2_u64, "b", ["range:mid", "control:1"]);
        let c = TaggedEntity::new(3_u64, "c", ["range:long"]);
        let team = Team::new([&a, &b, &c]);
        assert_eq!(TeamFeatures::from_team(&team), TeamFeatures::from_members([&a, &b, &c]));
    }
}

//! The rule table, in evaluation order.
//!
//! Global rules come first, then the mode blocks, then map-tag tweaks. Each
//! rule's tiers read top to bottom; the first match fires.

use crate::synergy::{
    GameMode,
    rule::{Effect, Rule, RuleStage, Tier},
};

/// Flag that marks a map as elimination-style regardless of its mode.
pub const ELIMINATION_THEME_TAG: &str = "theme:elim";

#[must_use]
pub fn all_rules() -> &'static [Rule] {
    RULES
}

static RULES: &[Rule] = &[
    // global
    Rule {
        id: "range_diversity",
        stage: RuleStage::Global,
        tiers: &[
            Tier::when(
                |c| c.features.range.populated_buckets() == 3,
                Effect::strength(18, "Excellent range diversity (short + mid + long)"),
            ),
            Tier::when(
                |c| c.features.range.populated_buckets() == 2,
                Effect::strength(12, "Good range diversity"),
            ),
            Tier::otherwise(Effect::weakness(
                16,
                "Low range diversity (team is one-dimensional)",
            )),
        ],
    },
    Rule {
        id: "crowd_control",
        stage: RuleStage::Global,
        tiers: &[
            Tier::when(
                |c| c.features.avg_control >= 2.2,
                Effect::strength(16, "High crowd control presence"),
            ),
            Tier::when(
                |c| c.features.avg_control >= 1.5,
                Effect::strength(10, "Solid crowd control presence"),
            ),
            Tier::when(
                |c| c.features.avg_control <= 0.8,
                Effect::weakness(12, "Low crowd control"),
            ),
        ],
    },
    Rule {
        id: "sustain",
        stage: RuleStage::Global,
        tiers: &[
            Tier::when(
                |c| c.features.avg_sustain >= 1.8,
                Effect::strength(12, "Great sustain (healing/shields/regen)"),
            ),
            Tier::when(
                |c| c.features.avg_sustain >= 1.2,
                Effect::strength(7, "Good sustain"),
            ),
            Tier::when(
                |c| c.features.avg_sustain <= 0.5,
                Effect::weakness(8, "Low sustain (can get chipped out)"),
            ),
        ],
    },
    Rule {
        id: "anti_tank",
        stage: RuleStage::Global,
        tiers: &[
            Tier::when(
                |c| c.features.anti_tank.high >= 1,
                Effect::strength(14, "Has at least one strong anti-tank option"),
            ),
            Tier::when(
                |c| c.features.anti_tank.med >= 2,
                Effect::strength(8, "Decent anti-tank coverage"),
            ),
            Tier::when(
                |c| c.features.anti_tank.low >= 2,
                Effect::weakness(18, "Struggles into tanks"),
            ),
        ],
    },
    Rule {
        id: "anti_assassin",
        stage: RuleStage::Global,
        tiers: &[
            // high control doubles as dive defense
            Tier::when(
                |c| c.features.anti_assassin.high >= 1 || c.features.avg_control >= 2.0,
                Effect::strength(12, "Good defense into assassins / dives"),
            ),
            Tier::when(
                |c| c.features.anti_assassin.low >= 2,
                Effect::weakness(16, "Weak into assassins / dives"),
            ),
        ],
    },
    Rule {
        id: "wallbreak",
        stage: RuleStage::Global,
        tiers: &[Tier::when(
            |c| c.features.has_wallbreak,
            Effect::strength(8, "Has wallbreak utility"),
        )],
    },
    Rule {
        id: "vision",
        stage: RuleStage::Global,
        tiers: &[Tier::when(
            |c| c.features.has_vision,
            Effect::strength(6, "Has vision / bush-check utility"),
        )],
    },
    Rule {
        id: "area_damage",
        stage: RuleStage::Global,
        tiers: &[Tier::when(
            |c| c.features.has_area_damage,
            Effect::strength(8, "Has area damage (good vs grouped teams)"),
        )],
    },
    // bounty / knockout / wipeout
    Rule {
        id: "elimination_long_range",
        stage: RuleStage::Mode(GameMode::ELIMINATION),
        tiers: &[
            Tier::when(
                |c| c.features.range.long >= 1,
                Effect::strength(16, "Long range helps in elimination modes"),
            ),
            Tier::otherwise(Effect::weakness(
                18,
                "No long range (tough to take safe fights)",
            )),
        ],
    },
    Rule {
        id: "elimination_pick_potential",
        stage: RuleStage::Mode(GameMode::ELIMINATION),
        tiers: &[
            Tier::when(
                |c| c.features.damage.poke >= 1 || c.features.damage.burst >= 1,
                Effect::strength(12, "Has pick potential (poke/burst)"),
            ),
            Tier::otherwise(Effect::weakness(
                10,
                "Low pick potential (hard to secure kills)",
            )),
        ],
    },
    Rule {
        id: "elimination_risky_comp",
        stage: RuleStage::Mode(GameMode::ELIMINATION),
        tiers: &[Tier::when(
            |c| c.features.mobility.high >= 2 && c.features.tankiness.low >= 2,
            Effect::weakness(10, "Risky comp (squishy + dive-heavy)"),
        )],
    },
    // gem grab
    Rule {
        id: "gem_carrier",
        stage: RuleStage::Mode(&[GameMode::GemGrab]),
        tiers: &[
            Tier::when(
                |c| c.features.gem.high >= 1,
                Effect::strength(18, "Has a strong gem carrier"),
            ),
            Tier::when(
                |c| c.features.gem.med >= 1,
                Effect::strength(10, "Has a workable gem carrier"),
            ),
            Tier::otherwise(Effect::weakness(18, "No reliable gem carrier")),
        ],
    },
    Rule {
        id: "gem_mid_control",
        stage: RuleStage::Mode(&[GameMode::GemGrab]),
        tiers: &[
            Tier::when(
                |c| c.features.avg_control >= 1.8,
                Effect::strength(14, "Strong control for holding mid"),
            ),
            Tier::when(
                |c| c.features.avg_control >= 1.3,
                Effect::strength(8, "Decent control for holding mid"),
            ),
            Tier::otherwise(Effect::weakness(
                12,
                "Low control makes it hard to hold mid",
            )),
        ],
    },
    // brawl ball
    Rule {
        id: "ball_mobility",
        stage: RuleStage::Mode(&[GameMode::BrawlBall]),
        tiers: &[
            Tier::when(
                |c| c.features.mobility.high >= 1,
                Effect::strength(12, "Mobility helps create goal pressure"),
            ),
            Tier::otherwise(Effect::weakness(10, "Low mobility (hard to convert goals)")),
        ],
    },
    Rule {
        id: "ball_lane_control",
        stage: RuleStage::Mode(&[GameMode::BrawlBall]),
        tiers: &[
            Tier::when(
                |c| c.features.avg_control >= 1.5 || c.features.has_area_damage,
                Effect::strength(14, "Control/area damage helps win lanes"),
            ),
            Tier::otherwise(Effect::weakness(12, "Low control (hard to stop pushes)")),
        ],
    },
    Rule {
        id: "ball_frontline",
        stage: RuleStage::Mode(&[GameMode::BrawlBall]),
        tiers: &[
            Tier::when(
                |c| c.features.tankiness.high >= 1 || c.features.tankiness.med >= 2,
                Effect::strength(10, "Has frontline presence for ball fights"),
            ),
            Tier::otherwise(Effect::weakness(6, "Low frontline presence")),
        ],
    },
    // heist
    Rule {
        id: "heist_safe_damage",
        stage: RuleStage::Mode(&[GameMode::Heist]),
        tiers: &[
            Tier::when(
                |c| c.features.damage.sustained >= 1 || c.features.damage.burst >= 1,
                Effect::strength(20, "Has damage profile that can threaten the safe"),
            ),
            Tier::otherwise(Effect::weakness(26, "Low safe damage (hard to win Heist)")),
        ],
    },
    Rule {
        id: "heist_wallbreak",
        stage: RuleStage::Mode(&[GameMode::Heist]),
        tiers: &[Tier::when(
            |c| c.features.has_wallbreak,
            Effect::strength(10, "Wallbreak can open safe lanes"),
        )],
    },
    // hot zone
    Rule {
        id: "zone_control",
        stage: RuleStage::Mode(&[GameMode::HotZone]),
        tiers: &[
            Tier::when(
                |c| c.features.avg_control >= 2.0,
                Effect::strength(22, "Strong control for holding zones"),
            ),
            Tier::when(
                |c| c.features.avg_control >= 1.5,
                Effect::strength(14, "Decent control for holding zones"),
            ),
            Tier::otherwise(Effect::weakness(18, "Low control (hard to hold zone)")),
        ],
    },
    Rule {
        id: "zone_sustain",
        stage: RuleStage::Mode(&[GameMode::HotZone]),
        tiers: &[
            Tier::when(
                |c| c.features.avg_sustain >= 1.2,
                Effect::strength(12, "Sustain helps stay in zone"),
            ),
            Tier::otherwise(Effect::weakness(
                10,
                "Low sustain (can\u{2019}t stay in zone long)",
            )),
        ],
    },
    Rule {
        id: "zone_area_damage",
        stage: RuleStage::Mode(&[GameMode::HotZone]),
        tiers: &[Tier::when(
            |c| c.features.has_area_damage,
            Effect::strength(10, "Area damage is great for zone pressure"),
        )],
    },
    // map tweaks
    Rule {
        id: "elimination_map_long_range",
        stage: RuleStage::MapTweak,
        tiers: &[Tier::when(
            |c| c.map_tags.has(ELIMINATION_THEME_TAG) && c.features.range.long == 0,
            Effect::weakness(10, "Elimination-style map with no long range"),
        )],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::synergy::rule::{Category, is_stage_ordered};

    #[test]
    fn test_rules_are_stage_ordered() {
        assert!(is_stage_ordered(all_rules()));
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let mut ids = HashSet::new();
        for rule in all_rules() {
            assert!(ids.insert(rule.id), "duplicate rule id {}", rule.id);
        }
    }

    #[test]
    fn test_no_message_is_shared_between_rules() {
        let mut owners = std::collections::HashMap::new();
        for rule in all_rules() {
            for tier in rule.tiers {
                if let Some(other) = owners.insert(tier.effect.message, rule.id) {
                    assert_eq!(other, rule.id, "message {:?} reused", tier.effect.message);
                }
            }
        }
    }

    #[test]
    fn test_all_points_are_positive_magnitudes() {
        for rule in all_rules() {
            for tier in rule.tiers {
                assert!(tier.effect.points > 0, "{} has a zero tier", rule.id);
            }
        }
    }

    #[test]
    fn test_every_mode_has_rules() {
        for mode in GameMode::ALL {
            let count = all_rules()
                .iter()
                .filter(|r| matches!(r.stage, RuleStage::Mode(modes) if modes.contains(&mode)))
                .count();
            assert!(count > 0, "{mode} has no rules");
        }
    }

    #[test]
    fn test_global_weakness_literals() {
        let weaknesses = all_rules()
            .iter()
            .filter(|r| r.stage == RuleStage::Global)
            .flat_map(|r| r.tiers)
            .filter(|t| t.effect.category == Category::Weakness)
            .map(|t| (t.effect.message, t.effect.points))
            .collect::<Vec<_>>();
        assert_eq!(
            weaknesses,
            [
                ("Low range diversity (team is one-dimensional)", 16),
                ("Low crowd control", 12),
                ("Low sustain (can get chipped out)", 8),
                ("Struggles into tanks", 18),
                ("Weak into assassins / dives", 16),
            ]
        );
    }
}

//! Presentation of an evaluation as text or as a JSON report.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use brawlfit_evaluator::{
    entity::{EntityId, Tagged},
    synergy::{Evaluation, MAX_SCORE, ScoreBreakdown, ScoreGrade, SynergyResult},
};

/// Number of cells in the text score bar.
pub const BAR_WIDTH: usize = 20;

/// `[#####---------------]`, one cell per five points, rounded.
pub fn score_bar(score: u32) -> String {
    let score = score.min(MAX_SCORE) as usize;
    let filled = (score * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySummary<'a> {
    pub id: &'a EntityId,
    pub name: &'a str,
    /// Class and rarity of a brawler, environment of a map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl<'a> EntitySummary<'a> {
    pub fn of<T>(entity: &'a T) -> Self
    where
        T: Tagged + ?Sized,
    {
        Self {
            id: entity.id(),
            name: entity.name(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}

impl fmt::Display for EntitySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({detail})", self.name),
            None => f.write_str(self.name),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreReport<'a> {
    pub scored_at: DateTime<Utc>,
    pub map: EntitySummary<'a>,
    pub team: Vec<EntitySummary<'a>>,
    pub grade: ScoreGrade,
    pub result: &'a SynergyResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<&'a ScoreBreakdown>,
}

impl<'a> ScoreReport<'a> {
    pub fn new(
        map: EntitySummary<'a>,
        team: Vec<EntitySummary<'a>>,
        evaluation: &'a Evaluation,
        explain: bool,
    ) -> Self {
        Self {
            scored_at: Utc::now(),
            map,
            team,
            grade: evaluation.result.grade(),
            result: &evaluation.result,
            breakdown: explain.then_some(&evaluation.breakdown),
        }
    }
}

/// Human readable rendering of an evaluation.
#[derive(Debug)]
pub struct TextReport<'a> {
    pub map: EntitySummary<'a>,
    pub team: Vec<EntitySummary<'a>>,
    pub evaluation: &'a Evaluation,
    pub explain: bool,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Evaluation {
            mode_name,
            mode,
            result,
            breakdown,
            ..
        } = self.evaluation;

        let members = self.team.iter().map(ToString::to_string).collect::<Vec<_>>();
        writeln!(f, "Team:   {}", members.join(", "))?;
        write!(f, "Map:    {}", self.map.name)?;
        if let Some(environment) = &self.map.detail {
            write!(f, " [{environment}]")?;
        }
        match (mode, mode_name) {
            (Some(mode), _) => writeln!(f, " ({mode})")?,
            (None, Some(name)) => writeln!(f, " ({name}, no mode rules)")?,
            (None, None) => writeln!(f, " (no mode)")?,
        }
        writeln!(
            f,
            "Score:  {:>3}/{MAX_SCORE} {} {}",
            result.score,
            score_bar(result.score),
            result.grade()
        )?;

        if !result.reasons.is_empty() {
            writeln!(f)?;
            writeln!(f, "Reasons:")?;
            for reason in &result.reasons {
                writeln!(f, "  {reason}")?;
            }
        }

        if self.explain {
            writeln!(f)?;
            writeln!(f, "Breakdown:")?;
            for hit in &breakdown.hits {
                writeln!(f, "  {:>+4}  {:<28}{}", hit.delta, hit.rule, hit.message)?;
            }
            write!(
                f,
                "  raw {}, clamped {}",
                breakdown.raw_total, breakdown.clamped
            )?;
            if let Some(floor) = breakdown.floor {
                write!(f, ", floor {}", floor.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use brawlfit_evaluator::{entity::TaggedEntity, synergy::SynergyEvaluator, team::Team};

    use super::*;

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0), "[--------------------]");
        assert_eq!(score_bar(50), "[##########----------]");
        assert_eq!(score_bar(47), "[#########-----------]");
        assert_eq!(score_bar(100), "[####################]");
        assert_eq!(score_bar(250), "[####################]");
    }

    #[test]
    fn test_text_report() {
        let a = TaggedEntity::new(1_u64, "A", ["range:long", "gem:high"]);
        let b = TaggedEntity::new(2_u64, "B", ["range:mid"]);
        let c = TaggedEntity::new(3_u64, "C", ["range:short"]);
        let map = TaggedEntity::new(10_u64, "Mine", ["mode:gem grab"]);
        let team = Team::new([&a, &b, &c]);
        let evaluation = SynergyEvaluator::default().evaluate(&team, &map);

        let report = TextReport {
            map: EntitySummary::of(&map),
            team: team.iter().map(EntitySummary::of).collect(),
            evaluation: &evaluation,
            explain: true,
        }
        .to_string();

        assert!(report.starts_with("Team:   A, B, C\nMap:    Mine (gem grab)\n"));

        let report = TextReport {
            map: EntitySummary::of(&map).with_detail(Some("Mine".to_owned())),
            team: vec![
                EntitySummary::of(&a).with_detail(Some("SNIPER, Rare".to_owned())),
                EntitySummary::of(&b),
                EntitySummary::of(&c),
            ],
            evaluation: &evaluation,
            explain: false,
        }
        .to_string();
        assert!(report.starts_with(
            "Team:   A (SNIPER, Rare), B, C\nMap:    Mine [Mine] (gem grab)\n"
        ));
        assert!(!report.contains("Breakdown:"));
        assert!(report.contains("\u{2705} Excellent range diversity (short + mid + long)"));
        assert!(report.contains("+18  gem_carrier"));
        assert!(report.contains(&format!("raw {}", evaluation.breakdown.raw_total)));
    }

    #[test]
    fn test_json_report_omits_breakdown() {
        let a = TaggedEntity::new(1_u64, "A", ["range:long"]);
        let map = TaggedEntity::new(10_u64, "Mine", Vec::<String>::new());
        let team = Team::new([&a, &a, &a]);
        let evaluation = SynergyEvaluator::default().evaluate(&team, &map);

        let member = EntitySummary::of(&a).with_detail(Some("TANK, Epic".to_owned()));
        let report = ScoreReport::new(EntitySummary::of(&map), vec![member], &evaluation, false);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("breakdown").is_none());
        assert_eq!(json["team"][0]["detail"], "TANK, Epic");
        assert!(json["map"].get("detail").is_none());
        assert_eq!(json["map"]["id"], 10);
        assert_eq!(json["result"]["score"], evaluation.result.score);

        let report = ScoreReport::new(EntitySummary::of(&map), vec![], &evaluation, true);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["breakdown"]["hits"].is_array());
    }
}

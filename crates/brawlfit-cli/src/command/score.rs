use std::path::PathBuf;

use brawlfit_evaluator::synergy::SynergyEvaluator;
use tracing::info;

use crate::{
    report::{EntitySummary, ScoreReport, TextReport},
    util::Output,
};

use super::{SourceArg, TeamArg};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreArg {
    #[clap(flatten)]
    pub(super) team: TeamArg,
    /// Map id or name
    #[arg(long)]
    map: String,
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: Format,
    /// Show every rule that changed the score
    #[arg(long)]
    explain: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(sources: &SourceArg, arg: &ScoreArg) -> anyhow::Result<()> {
    let catalog = sources.load_catalog()?;
    let team = catalog.select_team(arg.team.team.as_slice())?;
    let map = catalog.select_map(&arg.map)?;

    let evaluation = SynergyEvaluator::default().evaluate(&team, map);
    info!(
        score = evaluation.result.score,
        raw_total = evaluation.breakdown.raw_total,
        "Scored team on {}",
        map.name
    );

    let map = EntitySummary::of(map).with_detail(map.environment.clone());
    let members = team
        .iter()
        .map(|brawler| EntitySummary::of(brawler).with_detail(brawler.detail()))
        .collect();
    match arg.format {
        Format::Text => {
            let report = TextReport {
                map,
                team: members,
                evaluation: &evaluation,
                explain: arg.explain,
            };
            let mut output = Output::from_output_path(arg.output.clone())?;
            output.write_text(&report.to_string())?;
        }
        Format::Json => {
            let report = ScoreReport::new(map, members, &evaluation, arg.explain);
            Output::save_json(&report, arg.output.clone())?;
        }
    }
    Ok(())
}

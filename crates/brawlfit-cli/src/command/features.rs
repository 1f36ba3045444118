use brawlfit_evaluator::team_feature::TeamFeatures;

use crate::util::Output;

use super::{SourceArg, TeamArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FeaturesArg {
    #[clap(flatten)]
    team: TeamArg,
}

pub(crate) fn run(sources: &SourceArg, arg: &FeaturesArg) -> anyhow::Result<()> {
    let catalog = sources.load_catalog()?;
    let team = catalog.select_team(arg.team.team.as_slice())?;
    let features = TeamFeatures::from_team(&team);
    Output::save_json(&features, None)
}

use std::path::PathBuf;

use brawlfit_catalog::Brawler;
use brawlfit_evaluator::entity::TaggedEntity;
use tracing::info;

use crate::util::{self, Output};

use super::SourceArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FlattenArg {
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(sources: &SourceArg, arg: &FlattenArg) -> anyhow::Result<()> {
    let file = util::read_brawler_file(&sources.brawlers)?;
    let flattened = file
        .brawlers
        .into_iter()
        .map(Brawler::from_raw)
        .map(|b| TaggedEntity {
            id: b.id,
            name: b.name,
            tags: b.tags,
        })
        .collect::<Vec<_>>();
    info!("Flattened {} brawlers", flattened.len());
    Output::save_json(&flattened, arg.output.clone())
}

use std::path::PathBuf;

use brawlfit_catalog::Catalog;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::{logging, util};

use self::{catalog::CatalogArg, features::FeaturesArg, flatten::FlattenArg, score::ScoreArg};

mod catalog;
mod features;
mod flatten;
mod score;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    sources: SourceArg,
    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// What to do with the catalogs
    #[command(subcommand)]
    mode: Mode,
}

/// Where the catalogs are read from.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SourceArg {
    /// Tagged brawler catalog
    #[arg(
        long,
        global = true,
        env = "BRAWLFIT_BRAWLERS",
        default_value = "data/brawlers.tagged.json"
    )]
    brawlers: PathBuf,
    /// Tagged map catalog
    #[arg(
        long,
        global = true,
        env = "BRAWLFIT_MAPS",
        default_value = "data/maps.tagged.json"
    )]
    maps: PathBuf,
}

impl SourceArg {
    pub(crate) fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let brawlers = util::read_brawler_file(&self.brawlers)?;
        let maps = util::read_map_file(&self.maps)?;
        let catalog = Catalog::from_files(brawlers, maps);
        info!(
            "Loaded {} brawlers and {} maps",
            catalog.brawlers().len(),
            catalog.maps().len()
        );
        Ok(catalog)
    }
}

/// Comma separated team picks, by id or name.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TeamArg {
    /// Three brawlers, e.g. `--team shelly,colt,poco`
    #[arg(long, value_delimiter = ',', required = true)]
    team: Vec<String>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score a team on a map
    Score(#[clap(flatten)] ScoreArg),
    /// Print the aggregated features of a team
    Features(#[clap(flatten)] FeaturesArg),
    /// List catalog entries with their tags
    Catalog(#[clap(flatten)] CatalogArg),
    /// Write the brawler catalog with flattened tags
    Flatten(#[clap(flatten)] FlattenArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(&args.log_level)?;
    match &args.mode {
        Mode::Score(arg) => score::run(&args.sources, arg)?,
        Mode::Features(arg) => features::run(&args.sources, arg)?,
        Mode::Catalog(arg) => catalog::run(&args.sources, arg)?,
        Mode::Flatten(arg) => flatten::run(&args.sources, arg)?,
    }
    Ok(())
}

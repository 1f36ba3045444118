use std::fmt::Write as _;

use brawlfit_evaluator::entity::Tagged;

use crate::util::Output;

use super::SourceArg;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Listing {
    #[default]
    Brawlers,
    Maps,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CatalogArg {
    /// Which catalog to list
    #[arg(value_enum, default_value_t)]
    listing: Listing,
}

pub(crate) fn run(sources: &SourceArg, arg: &CatalogArg) -> anyhow::Result<()> {
    let catalog = sources.load_catalog()?;
    let text = match arg.listing {
        Listing::Brawlers => list_entities(catalog.brawlers()),
        Listing::Maps => list_entities(catalog.maps()),
    };
    Output::stdout().write_text(&text)
}

fn list_entities<T>(entities: &[T]) -> String
where
    T: Tagged,
{
    let mut text = String::new();
    for entity in entities {
        let _ = writeln!(
            text,
            "{:>10}  {:<20} {}",
            entity.id().to_string(),
            entity.name(),
            entity.tags().join(" ")
        );
    }
    text
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use brawlfit_evaluator::{
    entity::Tagged,
    team::{InvalidTeamError, Team},
};

use crate::{
    brawler::{Brawler, RawBrawler},
    map::GameMap,
};

/// Top level of the tagged brawler file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrawlerFile {
    pub brawlers: Vec<RawBrawler>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectionError {
    #[display("pick exactly {expected} brawlers, got {actual}")]
    WrongTeamSize { expected: usize, actual: usize },
    #[display("unknown brawler '{query}'")]
    UnknownBrawler { query: String },
    #[display("{name} is picked more than once")]
    DuplicatePick { name: String },
    #[display("unknown map '{query}'")]
    UnknownMap { query: String },
}

impl From<InvalidTeamError> for SelectionError {
    fn from(err: InvalidTeamError) -> Self {
        match err {
            InvalidTeamError::WrongSize { expected, actual } => {
                Self::WrongTeamSize { expected, actual }
            }
        }
    }
}

/// Brawlers and maps available for scoring.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    brawlers: Vec<Brawler>,
    maps: Vec<GameMap>,
}

impl Catalog {
    #[must_use]
    pub fn new(brawlers: Vec<Brawler>, mut maps: Vec<GameMap>) -> Self {
        for map in &mut maps {
            map.normalize_tags();
        }
        Self { brawlers, maps }
    }

    /// Flattens the brawler file and normalizes map tags.
    #[must_use]
    pub fn from_files(brawlers: BrawlerFile, maps: Vec<GameMap>) -> Self {
        let brawlers = brawlers.brawlers.into_iter().map(Brawler::from_raw).collect();
        Self::new(brawlers, maps)
    }

    #[must_use]
    pub fn brawlers(&self) -> &[Brawler] {
        &self.brawlers
    }

    #[must_use]
    pub fn maps(&self) -> &[GameMap] {
        &self.maps
    }

    #[must_use]
    pub fn find_brawler(&self, query: &str) -> Option<&Brawler> {
        find_entity(&self.brawlers, query)
    }

    #[must_use]
    pub fn find_map(&self, query: &str) -> Option<&GameMap> {
        find_entity(&self.maps, query)
    }

    /// Resolves every query to a distinct brawler and builds a team.
    pub fn select_team<S>(&self, queries: &[S]) -> Result<Team<'_, Brawler>, SelectionError>
    where
        S: AsRef<str>,
    {
        let mut picks = Vec::with_capacity(queries.len());
        let mut seen = HashSet::new();
        for query in queries {
            let query = query.as_ref();
            let brawler = self
                .find_brawler(query)
                .ok_or_else(|| SelectionError::UnknownBrawler {
                    query: query.to_owned(),
                })?;
            if !seen.insert(&brawler.id) {
                return Err(SelectionError::DuplicatePick {
                    name: brawler.name.clone(),
                });
            }
            picks.push(brawler);
        }
        Ok(Team::try_from_slice(picks.as_slice())?)
    }

    pub fn select_map(&self, query: &str) -> Result<&GameMap, SelectionError> {
        self.find_map(query)
            .ok_or_else(|| SelectionError::UnknownMap {
                query: query.to_owned(),
            })
    }
}

fn find_entity<'a, T>(entities: &'a [T], query: &str) -> Option<&'a T>
where
    T: Tagged,
{
    let query = query.trim();
    entities
        .iter()
        .find(|e| e.id().to_string() == query)
        .or_else(|| {
            let query = query.to_lowercase();
            entities.iter().find(|e| e.name().to_lowercase() == query)
        })
}

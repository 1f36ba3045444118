//! Tagged brawler and map catalogs.
//!
//! Loads the catalog JSON files, flattens brawler attribute objects into the
//! `key:value` tags the evaluator reads, and resolves user picks into a
//! [`Team`](brawlfit_evaluator::team::Team) and a map.

pub mod brawler;
pub mod catalog;
pub mod flatten;
pub mod map;

pub use self::{
    brawler::{Brawler, RawBrawler},
    catalog::{BrawlerFile, Catalog, SelectionError},
    map::GameMap,
};

//! Tag-based team/map synergy scoring for three-brawler teams.
//!
//! Every brawler and map is described only by a flat sequence of tags
//! (`range:long`, `control:2`, `has:wallbreak`, `mode:hot zone`, ...). This crate
//! turns those tags into a 0-100 suitability score with human-readable reasons.
//!
//! # Architecture
//!
//! ```text
//! raw tag strings
//!     ↓ tag_index      (normalize, first-match lookups)
//! TagIndex per entity
//!     ↓ team_feature   (bucket counts, averages, flags)
//! TeamFeatures
//!     ↓ synergy        (ordered rule table + UX normalization)
//! SynergyResult { score, reasons, strengths, weaknesses }
//! ```
//!
//! # Modules
//!
//! - [`entity`] - The [`Tagged`](entity::Tagged) view the core reads entities through
//! - [`team`] - A team of exactly three borrowed members
//! - [`tag_index`] - Tag normalization and point lookups
//! - [`team_feature`] - Reduction of a team into [`TeamFeatures`](team_feature::TeamFeatures)
//! - [`synergy`] - The rule engine and its result types
//!
//! # Design Principles
//!
//! ## Total Functions
//!
//! Scoring never fails on well-formed inputs. Unknown keys, unknown values and
//! unparsable numbers simply do not count toward any feature. The only invalid
//! input is a team that does not have three members, which is rejected when a
//! [`Team`](team::Team) is built.
//!
//! ## Declarative Rules
//!
//! Rules are static descriptors evaluated in a fixed order, see
//! [`synergy::rules`]. Nothing is shared between calls.

pub mod entity;
pub mod synergy;
pub mod tag_index;
pub mod team;
pub mod team_feature;

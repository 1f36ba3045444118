//! Flattening of structured brawler attributes into tags.
//!
//! Catalog files describe a brawler with an attribute object such as
//!
//! ```json
//! { "rangeBucket": "long", "controlScore": 2, "wallbreak": true }
//! ```
//!
//! which flattens to `range:long`, `control:2`, `wallbreak:true` and
//! `has:wallbreak`. Attribute names go through [`KEY_RENAMES`] first, so the
//! scoring side only ever sees the short tag keys.

use serde_json::{Map, Number, Value};
use tracing::warn;

use brawlfit_evaluator::tag_index::FLAG_PREFIX;

/// Attribute name to tag key.
pub const KEY_RENAMES: &[(&str, &str)] = &[
    ("rangeBucket", "range"),
    ("damageProfile", "damage"),
    ("controlScore", "control"),
    ("sustainScore", "sustain"),
    ("gemCarrierSuitability", "gem"),
    ("antiTank", "anti_tank"),
    ("antiAssassin", "anti_assassin"),
];

#[must_use]
pub fn tag_key(attribute: &str) -> String {
    KEY_RENAMES
        .iter()
        .find(|(from, _)| *from == attribute)
        .map_or(attribute, |(_, to)| to)
        .to_lowercase()
}

/// Flattens an attribute object into tags, in attribute order.
///
/// - `null` attributes are skipped
/// - scalars become `key:value`, lower-cased
/// - `true` also adds the `has:key` flag
/// - arrays add one tag per scalar element, so a key may repeat
/// - nested objects are skipped
#[must_use]
pub fn flatten_attributes(attributes: &Map<String, Value>) -> Vec<String> {
    let mut tags = vec![];
    for (attribute, value) in attributes {
        let key = tag_key(attribute);
        match value {
            Value::Array(items) => {
                tags.extend(
                    items
                        .iter()
                        .filter_map(scalar_tag_value)
                        .map(|v| format!("{key}:{v}")),
                );
            }
            Value::Object(_) => {
                warn!(attribute = attribute.as_str(), "skipping nested attribute");
            }
            _ => {
                if let Some(v) = scalar_tag_value(value) {
                    tags.push(format!("{key}:{v}"));
                }
                if value == &Value::Bool(true) {
                    tags.push(format!("{FLAG_PREFIX}{key}"));
                }
            }
        }
    }
    tags
}

fn scalar_tag_value(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_tag_value(n)),
        Value::String(s) => Some(s.to_lowercase()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// `2.0` is written as `2`
fn number_tag_value(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

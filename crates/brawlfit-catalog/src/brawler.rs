use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use brawlfit_evaluator::entity::{EntityId, Tagged};

use crate::flatten::flatten_attributes;

/// A brawler record as stored in the tagged catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBrawler {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub star_powers: Vec<String>,
    #[serde(default)]
    pub gadgets: Vec<String>,
    #[serde(default)]
    pub tags: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_revision_notes: Option<Value>,
}

/// A brawler with its attributes flattened into tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Brawler {
    pub id: EntityId,
    pub name: String,
    pub class: Option<String>,
    pub rarity: Option<String>,
    pub tags: Vec<String>,
}

impl Brawler {
    #[must_use]
    pub fn from_raw(raw: RawBrawler) -> Self {
        let tags = flatten_attributes(&raw.tags);
        Self {
            id: raw.id,
            name: raw.name,
            class: raw.class,
            rarity: raw.rarity,
            tags,
        }
    }

    /// Class and rarity, whichever are known.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        let parts = [self.class.as_deref(), self.rarity.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

impl From<RawBrawler> for Brawler {
    fn from(raw: RawBrawler) -> Self {
        Self::from_raw(raw)
    }
}

impl Tagged for Brawler {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_raw_brawler_camel_case() {
        let raw: RawBrawler = serde_json::from_value(json!({
            "id": 16000000,
            "name": "SHELLY",
            "class": "Damage Dealer",
            "rarity": "Starting Brawler",
            "imageUrl": "https://example.invalid/shelly.png",
            "starPowers": ["Shell Shock", "Band-Aid"],
            "gadgets": ["Fast Forward"],
            "tags": { "rangeBucket": "short", "controlScore": 1 },
            "tagRevisionNotes": "manual",
        }))
        .unwrap();

        assert_eq!(raw.id, EntityId::Number(16_000_000));
        assert_eq!(raw.star_powers.len(), 2);
        assert_eq!(raw.image_url.as_deref(), Some("https://example.invalid/shelly.png"));

        let brawler = Brawler::from(raw);
        assert_eq!(brawler.tags, ["range:short", "control:1"]);
        assert_eq!(brawler.class.as_deref(), Some("Damage Dealer"));
        assert_eq!(
            brawler.detail().as_deref(),
            Some("Damage Dealer, Starting Brawler")
        );
    }

    #[test]
    fn test_minimal_raw_brawler() {
        let raw: RawBrawler = serde_json::from_value(json!({ "id": "x", "name": "X" })).unwrap();
        let brawler = Brawler::from_raw(raw);
        assert!(brawler.tags.is_empty());
        assert_eq!(brawler.detail(), None);
        assert_eq!(Tagged::id(&brawler).to_string(), "x");
    }
}

//! The entity seam between the catalog and the scoring core.
//!
//! The core only ever looks at an entity through [`Tagged`]: an id, a display
//! name and the flattened tag sequence. Whatever else a catalog record carries
//! (images, rarity, original attributes) is invisible to scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a brawler or a map.
///
/// Catalog files use numeric ids, hand-written inputs are free to use strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(u64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Read-only view of a tagged brawler or map.
pub trait Tagged {
    #[must_use]
    fn id(&self) -> &EntityId;
    #[must_use]
    fn name(&self) -> &str;
    /// Flattened tags in their original order.
    #[must_use]
    fn tags(&self) -> &[String];
}

impl<T> Tagged for &T
where
    T: Tagged + ?Sized,
{
    fn id(&self) -> &EntityId {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }
}

/// Minimal [`Tagged`] record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedEntity {
    pub id: EntityId,
    pub name: String,
    pub tags: Vec<String>,
}

impl TaggedEntity {
    #[must_use]
    pub fn new<I, T>(id: impl Into<EntityId>, name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl Tagged for TaggedEntity {
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

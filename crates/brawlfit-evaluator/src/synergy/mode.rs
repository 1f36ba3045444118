use serde::{Deserialize, Serialize};

/// Game modes with their own rule set.
///
/// Parsed from a map's `mode:` tag by exact (lower-cased) name. Any other mode
/// name scores with global rules only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[display("bounty")]
    Bounty,
    #[display("knockout")]
    Knockout,
    #[display("wipeout")]
    Wipeout,
    #[display("gem grab")]
    GemGrab,
    #[display("brawl ball")]
    BrawlBall,
    #[display("heist")]
    Heist,
    #[display("hot zone")]
    HotZone,
}

impl GameMode {
    pub const ALL: [Self; 7] = [
        Self::Bounty,
        Self::Knockout,
        Self::Wipeout,
        Self::GemGrab,
        Self::BrawlBall,
        Self::Heist,
        Self::HotZone,
    ];

    /// Modes where the round is decided by eliminations.
    pub const ELIMINATION: &[Self] = &[Self::Bounty, Self::Knockout, Self::Wipeout];

    #[must_use]
    pub fn from_tag_value(value: &str) -> Option<Self> {
        let value = value.to_lowercase();
        Self::ALL.into_iter().find(|mode| mode.to_string() == value)
    }
}

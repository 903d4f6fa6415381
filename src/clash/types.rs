//! Response shapes for the Clash Royale API.
//!
//! Only the fields this service reads are modeled; the API returns
//! plenty more and serde ignores the rest.

use serde::Deserialize;

/// Paged ranking list wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingList {
    #[serde(default)]
    pub items: Vec<RankedPlayer>,
}

/// One leaderboard entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    pub tag: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Absent for unranked entries
    #[serde(default)]
    pub rank: Option<u32>,
    pub trophies: u32,
}

/// One battle log entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    #[serde(default)]
    pub battle_time: Option<String>,
    #[serde(rename = "type", default)]
    pub battle_type: Option<String>,
    #[serde(default)]
    pub team: Vec<BattlePlayer>,
}

/// A participant on the `team` side of a battle.
///
/// Battle modes without deck data (e.g. boat battles) omit `cards`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlePlayer {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cards: Option<Vec<Card>>,
}

/// A single card in a deck.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub icon_urls: IconUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconUrls {
    #[serde(default)]
    pub medium: Option<String>,
}

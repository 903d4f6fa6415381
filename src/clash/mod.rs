//! Clash Royale REST API client.
//!
//! Thin authenticated wrapper over the two endpoints this service
//! needs: the global Path of Legends leaderboard and per-player
//! battle logs.

pub mod client;
pub mod types;

pub use client::{ClashClient, ClashError};
pub use types::{Battle, BattlePlayer, Card, IconUrls, RankedPlayer, RankingList};

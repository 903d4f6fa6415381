//! # Deck Scout
//!
//! Looks up the deck behind an Ultimate Champion medal count.
//!
//! ## Architecture
//!
//! - **clash**: Typed client for the Clash Royale REST API
//! - **deck**: Leaderboard and battle log selection logic
//! - **api**: REST API endpoints and the lookup page
//! - **config**: Configuration loading and validation

pub mod api;
pub mod clash;
pub mod config;
pub mod deck;

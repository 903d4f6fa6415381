//! Leaderboard and battle log selection logic.
//!
//! Pure scans over API responses; all network I/O lives in
//! [`crate::clash`].

use serde::Serialize;

use crate::clash::{Battle, RankedPlayer};

/// One card of a returned deck.
#[derive(Debug, Clone, Serialize)]
pub struct DeckCard {
    pub name: String,
    pub level: Option<u32>,
    /// Medium-size icon URL, when the API provides one
    pub icon: Option<String>,
}

/// Find the tag of the first ranked player holding exactly `medals`
/// trophies. Unranked entries are skipped.
pub fn find_tag_by_medals(players: &[RankedPlayer], medals: u32) -> Option<&str> {
    players
        .iter()
        .find(|p| p.rank.is_some() && p.trophies == medals)
        .map(|p| p.tag.as_str())
}

/// Extract the deck from the most recent battle that carries deck data.
///
/// Battle logs arrive most recent first, so the first team entry with
/// a `cards` array wins. An empty cards array still counts as deck
/// data.
pub fn latest_deck(battles: &[Battle]) -> Option<Vec<DeckCard>> {
    battles
        .iter()
        .find_map(|battle| battle.team.first().and_then(|p| p.cards.as_ref()))
        .map(|cards| {
            cards
                .iter()
                .map(|card| DeckCard {
                    name: card.name.clone(),
                    level: card.level,
                    icon: card.icon_urls.medium.clone(),
                })
                .collect()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clash::{BattlePlayer, Card, IconUrls};
    use pretty_assertions::assert_eq;

    fn ranked(tag: &str, rank: Option<u32>, trophies: u32) -> RankedPlayer {
        RankedPlayer {
            tag: tag.to_string(),
            name: None,
            rank,
            trophies,
        }
    }

    fn card(name: &str, level: u32, icon: Option<&str>) -> Card {
        Card {
            name: name.to_string(),
            level: Some(level),
            icon_urls: IconUrls {
                medium: icon.map(String::from),
            },
        }
    }

    fn battle(cards: Option<Vec<Card>>) -> Battle {
        Battle {
            battle_time: None,
            battle_type: None,
            team: vec![BattlePlayer {
                tag: Some("#ABC123".to_string()),
                name: None,
                cards,
            }],
        }
    }

    #[test]
    fn test_find_tag_matches_trophies() {
        let players = [
            ranked("#AAA", Some(1), 2100),
            ranked("#BBB", Some(2), 2054),
            ranked("#CCC", Some(3), 2054),
        ];

        assert_eq!(find_tag_by_medals(&players, 2054), Some("#BBB"));
    }

    #[test]
    fn test_find_tag_skips_unranked() {
        let players = [ranked("#AAA", None, 2054), ranked("#BBB", Some(2), 2054)];

        assert_eq!(find_tag_by_medals(&players, 2054), Some("#BBB"));
    }

    #[test]
    fn test_find_tag_no_match() {
        let players = [ranked("#AAA", Some(1), 2100)];

        assert_eq!(find_tag_by_medals(&players, 1), None);
    }

    #[test]
    fn test_find_tag_empty_leaderboard() {
        assert_eq!(find_tag_by_medals(&[], 2054), None);
    }

    #[test]
    fn test_latest_deck_picks_first_battle_with_cards() {
        let battles = [
            battle(None),
            battle(Some(vec![card(
                "Knight",
                14,
                Some("https://cdn.example/knight.png"),
            )])),
            battle(Some(vec![card("Archers", 13, None)])),
        ];

        let deck = latest_deck(&battles).unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck[0].name, "Knight");
        assert_eq!(deck[0].level, Some(14));
        assert_eq!(deck[0].icon.as_deref(), Some("https://cdn.example/knight.png"));
    }

    #[test]
    fn test_latest_deck_skips_empty_team() {
        let no_team = Battle {
            battle_time: None,
            battle_type: None,
            team: vec![],
        };
        let battles = [no_team, battle(Some(vec![card("Archers", 13, None)]))];

        let deck = latest_deck(&battles).unwrap();
        assert_eq!(deck[0].name, "Archers");
    }

    #[test]
    fn test_latest_deck_empty_cards_counts_as_deck() {
        let battles = [battle(Some(vec![])), battle(Some(vec![card("Knight", 14, None)]))];

        let deck = latest_deck(&battles).unwrap();
        assert!(deck.is_empty());
    }

    #[test]
    fn test_latest_deck_none_found() {
        let battles = [battle(None), battle(None)];

        assert!(latest_deck(&battles).is_none());
    }

    #[test]
    fn test_latest_deck_empty_log() {
        assert!(latest_deck(&[]).is_none());
    }
}

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::deck::{self, DeckCard};

#[derive(Debug, Deserialize)]
pub struct DeckRequest {
    /// Ultimate Champion medal count to search for
    pub medals: u32,
}

#[derive(Debug, Serialize)]
pub struct DeckResponse {
    pub deck: Vec<DeckCard>,
}

/// Resolve a medal count to the matching player's most recent deck.
///
/// Two upstream calls in sequence: global leaderboard, then the
/// matched player's battle log.
pub async fn get_deck(
    State(state): State<AppState>,
    payload: Result<Json<DeckRequest>, JsonRejection>,
) -> Result<Json<DeckResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let rankings = state
        .client
        .ultimate_champion_rankings()
        .await
        .map_err(|e| {
            warn!("Leaderboard fetch failed: {}", e);
            ApiError::Upstream("failed to fetch leaderboard".to_string())
        })?;

    let tag = deck::find_tag_by_medals(&rankings.items, request.medals)
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "player with {} medals not found on the leaderboard",
                request.medals
            ))
        })?
        .to_string();

    let battles = state.client.battle_log(&tag).await.map_err(|e| {
        warn!("Battle log fetch failed for {}: {}", tag, e);
        ApiError::Upstream("failed to fetch battle log".to_string())
    })?;

    let deck = deck::latest_deck(&battles)
        .ok_or_else(|| ApiError::NotFound("no deck found in recent battles".to_string()))?;

    Ok(Json(DeckResponse { deck }))
}

//! # Play Commands
//!
//! Rewards and punishments for plays of owned games. Both re-evaluate the
//! customer's tier afterwards.

use arcade_core::{PlayOutcome, TierChange};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreState;

/// One recorded play.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    pub login: String,
    pub game: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub cleared: bool,
}

/// Rewards a play.
pub fn reward_play(store: &StoreState, request: &PlayRequest) -> Result<PlayOutcome, ApiError> {
    debug!(login = %request.login, game = %request.game, score = request.score, "reward_play command");

    let outcome = store.with_store_mut(|s| {
        s.reward(&request.game, &request.login, request.score, request.cleared)
    })??;

    log_outcome("Play rewarded", request, &outcome);
    Ok(outcome)
}

/// Punishes a play.
pub fn punish_play(store: &StoreState, request: &PlayRequest) -> Result<PlayOutcome, ApiError> {
    debug!(login = %request.login, game = %request.game, score = request.score, "punish_play command");

    let outcome = store.with_store_mut(|s| {
        s.punish(&request.game, &request.login, request.score, request.cleared)
    })??;

    log_outcome("Play punished", request, &outcome);
    Ok(outcome)
}

fn log_outcome(message: &str, request: &PlayRequest, outcome: &PlayOutcome) {
    info!(
        login = %request.login,
        game = %request.game,
        delta = outcome.points_delta,
        points = outcome.points,
        "{}",
        message
    );
    if outcome.tier_change != TierChange::Unchanged {
        info!(login = %request.login, tier = %outcome.tier, change = ?outcome.tier_change, "Tier changed");
    }
}

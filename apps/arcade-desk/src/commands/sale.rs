//! # Sale Commands
//!
//! ## Sale Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sell_game({ name: "Tekken", price: "20", category: "Fighting",        │
//! │              playstyles: "", login: "mauro" })                          │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Parse price text into Money                                │    │
//! │  │  2. Lock store, run the sale (checks + purchase + tier rule)   │    │
//! │  │  3. Log tier change, if any                                    │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  { paid: 1800, balance: 2200, points: 200, tierChange: "unchanged" }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use arcade_core::{LoyaltyTier, Money, TierChange};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreState;

/// Raw sale input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellGameRequest {
    pub name: String,
    /// Decimal text, e.g. `"20"` or `"59.90"`
    pub price: String,
    pub category: String,
    /// Whitespace-separated playstyle labels, may be empty
    #[serde(default)]
    pub playstyles: String,
    pub login: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub login: String,
    pub game: String,
    pub paid: Money,
    pub balance: Money,
    pub points: i64,
    pub tier: LoyaltyTier,
    pub tier_change: TierChange,
}

/// Sells a game to a customer.
///
/// ## Errors
/// - `VALIDATION_ERROR`: unparseable price, bad name/category/playstyle
/// - `NOT_FOUND`: unknown login
/// - `INSUFFICIENT_BALANCE`: balance below the discounted price
/// - `CONFLICT`: the customer already owns the game
pub fn sell_game(store: &StoreState, request: SellGameRequest) -> Result<SaleResponse, ApiError> {
    debug!(login = %request.login, game = %request.name, price = %request.price, "sell_game command");

    let price = Money::parse_decimal(&request.price)?;

    let outcome = store.with_store_mut(|s| {
        s.sell_game(
            &request.name,
            price,
            &request.category,
            &request.playstyles,
            &request.login,
        )
    })??;

    info!(
        login = %request.login,
        game = %request.name,
        paid = %outcome.paid,
        balance = %outcome.balance,
        "Game sold"
    );
    if outcome.tier_change != TierChange::Unchanged {
        info!(login = %request.login, tier = %outcome.tier, change = ?outcome.tier_change, "Tier changed");
    }

    Ok(SaleResponse {
        login: request.login,
        game: request.name,
        paid: outcome.paid,
        balance: outcome.balance,
        points: outcome.points,
        tier: outcome.tier,
        tier_change: outcome.tier_change,
    })
}

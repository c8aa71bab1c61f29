//! # Factories
//!
//! Turn raw input into validated [`Game`]s and [`Customer`]s.
//!
//! ## Check Order
//! ```text
//! create_game:      name ─► price ─► playstyles ─► category
//! create_customer:  login ─► name ─► tier
//! ```
//! The first failing check wins. Neither factory has side effects.

use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::game::{Game, GameCategory};
use crate::money::Money;
use crate::playstyle::parse_playstyles;
use crate::tier::LoyaltyTier;
use crate::validation::{validate_price, validate_required};

/// Message carried by [`CoreError::InvalidGame`] for an unknown category.
pub const UNKNOWN_CATEGORY: &str = "unknown category";

/// Message carried by [`CoreError::InvalidUser`] when no tier matches.
pub const TIER_REQUIRED: &str = "a user requires an initial tier";

/// Builds a game from raw sale input.
///
/// `playstyles` is a whitespace-separated list of tag labels; blank text
/// means no tags.
///
/// ```rust
/// use arcade_core::factory::create_game;
/// use arcade_core::money::Money;
/// use arcade_core::playstyle::Playstyle;
///
/// let game = create_game("Tekken", Money::from_cents(2000), "fighting", "online competitive")
///     .unwrap();
/// assert!(game.has_playstyle(Playstyle::Competitive));
///
/// let err = create_game("Tekken", Money::from_cents(2000), "fighting", "solo").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid game: unknown playstyle: solo");
/// ```
pub fn create_game(
    name: &str,
    price: Money,
    category: &str,
    playstyles: &str,
) -> CoreResult<Game> {
    validate_required("name", name).map_err(|e| CoreError::InvalidGame(e.to_string()))?;
    validate_price(price).map_err(|e| CoreError::InvalidGame(e.to_string()))?;

    let tags = parse_playstyles(playstyles)
        .map_err(|unknown| CoreError::InvalidGame(format!("unknown playstyle: {}", unknown.0)))?;

    let category = GameCategory::from_label(category)
        .ok_or_else(|| CoreError::InvalidGame(UNKNOWN_CATEGORY.to_string()))?;

    Ok(Game::new(name.to_string(), price, category, tags))
}

/// Builds a customer with the tier named by `tier_label`.
///
/// ```rust
/// use arcade_core::factory::create_customer;
/// use arcade_core::tier::LoyaltyTier;
///
/// let jose = create_customer("Jose", "jose", "veteran").unwrap();
/// assert_eq!(jose.tier(), LoyaltyTier::Veteran);
/// assert_eq!(jose.points(), 1000);
///
/// assert!(create_customer("Jose", "jose", "platinum").is_err());
/// ```
pub fn create_customer(name: &str, login: &str, tier_label: &str) -> CoreResult<Customer> {
    validate_required("login", login).map_err(|e| CoreError::InvalidUser(e.to_string()))?;
    validate_required("name", name).map_err(|e| CoreError::InvalidUser(e.to_string()))?;

    let tier = LoyaltyTier::from_label(tier_label)
        .ok_or_else(|| CoreError::InvalidUser(TIER_REQUIRED.to_string()))?;

    Ok(Customer::new(name.to_string(), login.to_string(), tier))
}

//! # Customers
//!
//! The mutable aggregate of the store: identity, balance, loyalty tier,
//! points and the games bought so far.
//!
//! ## Points Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  registration ──► points = tier.starting_points()                      │
//! │                                                                         │
//! │  purchase ──────► points += tier.purchase_points(price)                │
//! │                                                                         │
//! │  reward ────────► points += play_points + tier.reward_points(game)     │
//! │                                                                         │
//! │  punishment ────► points += play_points - tier.punishment_points(game) │
//! │                                                                         │
//! │  credit top-up ─► balance only, points untouched                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::game::Game;
use crate::money::Money;
use crate::tier::LoyaltyTier;

// =============================================================================
// Purchase
// =============================================================================

/// Running totals of the plays recorded for one owned game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStats {
    pub plays: u32,
    pub clears: u32,
    /// Best score seen, `None` until the first play.
    pub high_score: Option<i64>,
}

impl PlayStats {
    fn record(&mut self, score: i64, cleared: bool) {
        self.plays += 1;
        if cleared {
            self.clears += 1;
        }
        self.high_score = Some(self.high_score.map_or(score, |best| best.max(score)));
    }
}

/// A game owned by a customer.
///
/// The price paid is frozen at sale time: a later tier change does not
/// rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub game: Game,
    pub paid: Money,
    pub purchased_at: DateTime<Utc>,
    pub stats: PlayStats,
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
///
/// Build through [`create_customer`](crate::factory::create_customer), which
/// validates the raw input first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    login: String,
    balance: Money,
    points: i64,
    tier: LoyaltyTier,
    purchases: BTreeMap<String, Purchase>,
    registered_at: DateTime<Utc>,
}

impl Customer {
    pub(crate) fn new(name: String, login: String, tier: LoyaltyTier) -> Self {
        Customer {
            name,
            login,
            balance: Money::zero(),
            points: tier.starting_points(),
            tier,
            purchases: BTreeMap::new(),
            registered_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn tier(&self) -> LoyaltyTier {
        self.tier
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Owned games, ordered by name.
    pub fn purchases(&self) -> impl Iterator<Item = &Purchase> {
        self.purchases.values()
    }

    pub fn purchase(&self, game_name: &str) -> Option<&Purchase> {
        self.purchases.get(game_name)
    }

    pub fn owns(&self, game_name: &str) -> bool {
        self.purchases.contains_key(game_name)
    }

    pub fn games_owned(&self) -> usize {
        self.purchases.len()
    }

    /// Sum of every price paid.
    pub fn total_spent(&self) -> Money {
        self.purchases.values().map(|p| p.paid).sum()
    }

    /// What this customer would pay for `price` right now.
    pub fn price_for(&self, price: Money) -> Money {
        self.tier.discounted(price)
    }

    /// Whether the balance covers `price` after the current discount,
    /// compared without rounding.
    pub fn can_afford(&self, price: Money) -> bool {
        self.tier.can_afford(self.balance, price)
    }

    pub(crate) fn set_tier(&mut self, tier: LoyaltyTier) {
        self.tier = tier;
    }

    /// Adds `amount` to the balance. Negative amounts are not rejected;
    /// the balance saturates at the `Money` bounds.
    pub fn credit_funds(&mut self, amount: Money) {
        self.balance += amount;
    }

    /// Records the sale of `game`.
    ///
    /// Does not check the balance: the store engine does that first, and
    /// this method may leave the balance negative.
    ///
    /// ## Errors
    /// [`CoreError::DuplicateGame`] if a game with the same name is owned.
    /// Nothing changes in that case.
    pub fn register_purchase(&mut self, game: Game) -> CoreResult<()> {
        if self.owns(game.name()) {
            return Err(CoreError::DuplicateGame(game.name().to_string()));
        }

        let paid = self.price_for(game.price());
        let earned = self.tier.purchase_points(game.price());

        self.balance -= paid;
        self.points = self.points.saturating_add(earned);
        self.purchases.insert(
            game.name().to_string(),
            Purchase {
                game,
                paid,
                purchased_at: Utc::now(),
                stats: PlayStats::default(),
            },
        );
        Ok(())
    }

    /// Rewards a play of an owned game and returns the points delta.
    ///
    /// ## Errors
    /// [`CoreError::GameNotOwned`] if no purchase has this name.
    pub fn apply_reward(&mut self, game_name: &str, score: i64, cleared: bool) -> CoreResult<i64> {
        let tier = self.tier;
        let purchase = self.owned_mut(game_name)?;
        purchase.stats.record(score, cleared);

        let delta = purchase.game.play_points(score, cleared) + tier.reward_points(&purchase.game);
        self.points = self.points.saturating_add(delta);
        Ok(delta)
    }

    /// Punishes a play of an owned game and returns the points delta.
    ///
    /// ## Errors
    /// [`CoreError::GameNotOwned`] if no purchase has this name.
    pub fn apply_punishment(
        &mut self,
        game_name: &str,
        score: i64,
        cleared: bool,
    ) -> CoreResult<i64> {
        let tier = self.tier;
        let purchase = self.owned_mut(game_name)?;
        purchase.stats.record(score, cleared);

        let delta =
            purchase.game.play_points(score, cleared) - tier.punishment_points(&purchase.game);
        self.points = self.points.saturating_add(delta);
        Ok(delta)
    }

    fn owned_mut(&mut self, game_name: &str) -> CoreResult<&mut Purchase> {
        self.purchases
            .get_mut(game_name)
            .ok_or_else(|| CoreError::GameNotOwned(game_name.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameCategory;
    use crate::playstyle::Playstyle;

    fn game(name: &str, cents: i64, category: GameCategory, tags: &[Playstyle]) -> Game {
        Game::new(
            name.to_string(),
            Money::from_cents(cents),
            category,
            tags.iter().copied().collect(),
        )
    }

    fn entry_customer() -> Customer {
        Customer::new("Mauro".to_string(), "mauro".to_string(), LoyaltyTier::Entry)
    }

    #[test]
    fn test_new_customer_starts_with_tier_points() {
        assert_eq!(entry_customer().points(), 0);
        let vet = Customer::new("Ana".to_string(), "ana".to_string(), LoyaltyTier::Veteran);
        assert_eq!(vet.points(), 1000);
        assert!(vet.balance().is_zero());
        assert_eq!(vet.games_owned(), 0);
    }

    #[test]
    fn test_credit_funds_never_touches_points() {
        let mut c = entry_customer();
        c.credit_funds(Money::from_cents(4000));
        c.credit_funds(Money::from_cents(-500));
        assert_eq!(c.balance().cents(), 3500);
        assert_eq!(c.points(), 0);
    }

    #[test]
    fn test_huge_credits_saturate() {
        let mut c = entry_customer();
        let huge = Money::parse_decimal("90000000000000000").unwrap();
        c.credit_funds(huge);
        c.credit_funds(huge);
        assert_eq!(c.balance(), Money::from_cents(i64::MAX));
        assert!(c.can_afford(Money::from_cents(i64::MAX)));
    }

    #[test]
    fn test_can_afford_uses_exact_price() {
        let mut c = entry_customer();
        c.credit_funds(Money::from_cents(13));
        assert!(!c.can_afford(Money::from_cents(15)));

        c.credit_funds(Money::from_cents(1));
        assert!(c.can_afford(Money::from_cents(15)));
    }

    #[test]
    fn test_register_purchase() {
        let mut c = entry_customer();
        c.credit_funds(Money::from_cents(4000));
        c.register_purchase(game("Tekken", 2000, GameCategory::Fighting, &[]))
            .unwrap();

        assert_eq!(c.balance().cents(), 2200);
        assert_eq!(c.points(), 200);
        assert!(c.owns("Tekken"));
        assert_eq!(c.purchase("Tekken").unwrap().paid.cents(), 1800);
        assert_eq!(c.total_spent().cents(), 1800);
    }

    #[test]
    fn test_register_purchase_may_leave_balance_negative() {
        let mut c = entry_customer();
        c.register_purchase(game("Celeste", 1000, GameCategory::Platformer, &[]))
            .unwrap();
        assert_eq!(c.balance().cents(), -900);
    }

    #[test]
    fn test_duplicate_purchase_leaves_customer_untouched() {
        let mut c = entry_customer();
        c.credit_funds(Money::from_cents(10_000));
        c.register_purchase(game("Tekken", 2000, GameCategory::Fighting, &[]))
            .unwrap();

        let before = c.clone();
        let err = c
            .register_purchase(game("Tekken", 500, GameCategory::Roleplaying, &[]))
            .unwrap_err();

        assert_eq!(err, CoreError::DuplicateGame("Tekken".to_string()));
        assert_eq!(c, before);
    }

    #[test]
    fn test_game_names_are_case_sensitive() {
        let mut c = entry_customer();
        c.register_purchase(game("Tekken", 0, GameCategory::Fighting, &[]))
            .unwrap();
        assert!(c
            .register_purchase(game("tekken", 0, GameCategory::Fighting, &[]))
            .is_ok());
        assert_eq!(c.games_owned(), 2);
    }

    #[test]
    fn test_apply_reward_adds_play_and_tier_points() {
        let mut c = entry_customer();
        c.register_purchase(game(
            "Street Fighter",
            0,
            GameCategory::Fighting,
            &[Playstyle::Offline, Playstyle::Multiplayer],
        ))
        .unwrap();

        let delta = c.apply_reward("Street Fighter", 5000, false).unwrap();
        // 5000 / 1000 = 5 play points + 30 offline + 10 multiplayer
        assert_eq!(delta, 45);
        assert_eq!(c.points(), 45);

        let stats = c.purchase("Street Fighter").unwrap().stats;
        assert_eq!(stats.plays, 1);
        assert_eq!(stats.high_score, Some(5000));
    }

    #[test]
    fn test_apply_punishment_subtracts_tier_points() {
        let mut c = entry_customer();
        c.register_purchase(game(
            "Overcooked",
            0,
            GameCategory::Platformer,
            &[Playstyle::Online, Playstyle::Cooperative],
        ))
        .unwrap();

        let delta = c.apply_punishment("Overcooked", 0, true).unwrap();
        // 20 for clearing - (10 online + 50 cooperative)
        assert_eq!(delta, -40);
        assert_eq!(c.points(), -40);

        let stats = c.purchase("Overcooked").unwrap().stats;
        assert_eq!(stats.clears, 1);
    }

    #[test]
    fn test_reward_for_unowned_game_fails() {
        let mut c = entry_customer();
        let before = c.clone();

        assert_eq!(
            c.apply_reward("Zelda", 10, true),
            Err(CoreError::GameNotOwned("Zelda".to_string()))
        );
        assert_eq!(
            c.apply_punishment("Zelda", 10, true),
            Err(CoreError::GameNotOwned("Zelda".to_string()))
        );
        assert_eq!(c, before);
    }

    #[test]
    fn test_play_stats_keep_best_score() {
        let mut c = entry_customer();
        c.register_purchase(game("Chrono", 0, GameCategory::Roleplaying, &[]))
            .unwrap();
        c.apply_reward("Chrono", 300, false).unwrap();
        c.apply_punishment("Chrono", -20, true).unwrap();
        c.apply_reward("Chrono", 120, false).unwrap();

        let stats = c.purchase("Chrono").unwrap().stats;
        assert_eq!(stats.plays, 3);
        assert_eq!(stats.clears, 1);
        assert_eq!(stats.high_score, Some(300));
        // three plays at 10 points each
        assert_eq!(c.points(), 30);
    }
}

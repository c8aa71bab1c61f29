//! # Store Engine
//!
//! Orchestrates every use case against the customer registry.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        StoreEngine                                      │
//! │                                                                         │
//! │  register ──────► DuplicateUser? ─► factory ─► insert                  │
//! │                                                                         │
//! │  credit_account ► unknown login? false : balance += amount             │
//! │                                                                         │
//! │  sell_game ─────► UserNotFound? ─► factory (InvalidGame?)              │
//! │                   ─► InsufficientBalance? ─► register_purchase         │
//! │                   (DuplicateGame?) ─► re-evaluate tier                 │
//! │                                                                         │
//! │  reward/punish ─► UserNotFound? ─► GameNotOwned? ─► re-evaluate tier   │
//! │                                                                         │
//! │  upgrade ───────► UserNotFound? ─► UserIneligible? ─► Veteran          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tier State Machine
//! ```text
//!            points > 1000 (while Entry)
//!   ┌───────┐ ───────────────────────────► ┌─────────┐
//!   │ Entry │                              │ Veteran │
//!   └───────┘ ◄─────────────────────────── └─────────┘
//!            downgrade guard: Entry AND points > 1000
//! ```
//! The downgrade guard is the same expression as the upgrade guard, so it
//! can never hold for a Veteran and the downgrade edge is unreachable. This
//! is kept as-is pending a product decision on the intended rule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::factory::{create_customer, create_game};
use crate::money::Money;
use crate::report::{CustomerSummary, ReportFormatter};
use crate::tier::{LoyaltyTier, VETERAN_POINTS_THRESHOLD};

/// Outcome of a tier re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierChange {
    Unchanged,
    Upgraded,
    Downgraded,
}

/// Result of a reward or punishment: the points delta and any tier move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayOutcome {
    pub points_delta: i64,
    pub points: i64,
    pub tier: LoyaltyTier,
    pub tier_change: TierChange,
}

/// Result of a successful sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleOutcome {
    pub paid: Money,
    pub balance: Money,
    pub points: i64,
    pub tier: LoyaltyTier,
    pub tier_change: TierChange,
}

/// Whether `customer` passes the upgrade guard.
pub fn eligible_for_upgrade(customer: &Customer) -> bool {
    customer.tier() == LoyaltyTier::Entry && customer.points() > VETERAN_POINTS_THRESHOLD
}

/// Whether `customer` passes the downgrade guard.
///
/// Identical to [`eligible_for_upgrade`]: the guard tests for Entry, not
/// Veteran. See the module docs.
pub fn eligible_for_downgrade(customer: &Customer) -> bool {
    customer.tier() == LoyaltyTier::Entry && customer.points() > VETERAN_POINTS_THRESHOLD
}

/// Runs the downgrade branch, then the upgrade branch, and reports the net
/// change.
pub fn reevaluate_tier(customer: &mut Customer) -> TierChange {
    let before = customer.tier();

    if eligible_for_downgrade(customer) {
        customer.set_tier(LoyaltyTier::Entry);
    }
    if eligible_for_upgrade(customer) {
        customer.set_tier(LoyaltyTier::Veteran);
    }

    match (before, customer.tier()) {
        (LoyaltyTier::Entry, LoyaltyTier::Veteran) => TierChange::Upgraded,
        (LoyaltyTier::Veteran, LoyaltyTier::Entry) => TierChange::Downgraded,
        _ => TierChange::Unchanged,
    }
}

/// The store: owns the registry of customers keyed by login.
#[derive(Debug, Clone, Default)]
pub struct StoreEngine {
    customers: BTreeMap<String, Customer>,
}

impl StoreEngine {
    /// Creates a store with an empty registry.
    pub fn new() -> Self {
        StoreEngine::default()
    }

    /// Registers a new customer.
    ///
    /// ## Errors
    /// - [`CoreError::DuplicateUser`] if `login` is taken (checked first)
    /// - [`CoreError::InvalidUser`] for a blank login or name, or a tier
    ///   label that names no tier
    pub fn register(&mut self, name: &str, login: &str, tier_label: &str) -> CoreResult<&Customer> {
        if self.customers.contains_key(login) {
            return Err(CoreError::DuplicateUser(login.to_string()));
        }

        let customer = create_customer(name, login, tier_label)?;
        Ok(self.customers.entry(login.to_string()).or_insert(customer))
    }

    /// Adds `amount` to a customer's balance. Returns `false` when the login
    /// is unknown, in which case nothing changes.
    pub fn credit_account(&mut self, login: &str, amount: Money) -> bool {
        match self.customers.get_mut(login) {
            Some(customer) => {
                customer.credit_funds(amount);
                true
            }
            None => false,
        }
    }

    /// Sells a game to a customer.
    ///
    /// The balance must cover the exact price after the customer's current
    /// discount; the amount charged is that price rounded up to the cent.
    /// The tier is re-evaluated once after the sale.
    ///
    /// ## Errors
    /// In check order: [`CoreError::UserNotFound`],
    /// [`CoreError::InvalidGame`], [`CoreError::InsufficientBalance`],
    /// [`CoreError::DuplicateGame`]. State is unchanged on error.
    pub fn sell_game(
        &mut self,
        name: &str,
        price: Money,
        category: &str,
        playstyles: &str,
        login: &str,
    ) -> CoreResult<SaleOutcome> {
        let customer = self.customer_mut(login)?;
        let game = create_game(name, price, category, playstyles)?;

        let required = customer.price_for(game.price());
        if !customer.can_afford(game.price()) {
            return Err(CoreError::InsufficientBalance {
                login: login.to_string(),
                available: customer.balance(),
                required,
            });
        }

        customer.register_purchase(game)?;
        let tier_change = reevaluate_tier(customer);

        Ok(SaleOutcome {
            paid: required,
            balance: customer.balance(),
            points: customer.points(),
            tier: customer.tier(),
            tier_change,
        })
    }

    /// Rewards a play of `game_name`, then re-evaluates the tier.
    ///
    /// ## Errors
    /// [`CoreError::UserNotFound`], [`CoreError::GameNotOwned`].
    pub fn reward(
        &mut self,
        game_name: &str,
        login: &str,
        score: i64,
        cleared: bool,
    ) -> CoreResult<PlayOutcome> {
        let customer = self.customer_mut(login)?;
        let points_delta = customer.apply_reward(game_name, score, cleared)?;
        Ok(Self::settle_play(customer, points_delta))
    }

    /// Punishes a play of `game_name`, then re-evaluates the tier.
    ///
    /// ## Errors
    /// [`CoreError::UserNotFound`], [`CoreError::GameNotOwned`].
    pub fn punish(
        &mut self,
        game_name: &str,
        login: &str,
        score: i64,
        cleared: bool,
    ) -> CoreResult<PlayOutcome> {
        let customer = self.customer_mut(login)?;
        let points_delta = customer.apply_punishment(game_name, score, cleared)?;
        Ok(Self::settle_play(customer, points_delta))
    }

    fn settle_play(customer: &mut Customer, points_delta: i64) -> PlayOutcome {
        let tier_change = reevaluate_tier(customer);
        PlayOutcome {
            points_delta,
            points: customer.points(),
            tier: customer.tier(),
            tier_change,
        }
    }

    /// Promotes an eligible Entry customer to Veteran on request.
    ///
    /// ## Errors
    /// [`CoreError::UserNotFound`], or [`CoreError::UserIneligible`] when the
    /// customer is not Entry with more than 1000 points.
    pub fn upgrade(&mut self, login: &str) -> CoreResult<LoyaltyTier> {
        let customer = self.customer_mut(login)?;
        if !eligible_for_upgrade(customer) {
            return Err(CoreError::UserIneligible(login.to_string()));
        }

        customer.set_tier(LoyaltyTier::Veteran);
        Ok(customer.tier())
    }

    /// Re-runs the tier rule for one customer outside of a play or sale.
    pub fn reevaluate(&mut self, login: &str) -> CoreResult<TierChange> {
        let customer = self.customer_mut(login)?;
        Ok(reevaluate_tier(customer))
    }

    pub fn balance(&self, login: &str) -> CoreResult<Money> {
        self.customer(login).map(Customer::balance)
    }

    pub fn points(&self, login: &str) -> CoreResult<i64> {
        self.customer(login).map(Customer::points)
    }

    pub fn customer(&self, login: &str) -> CoreResult<&Customer> {
        self.customers
            .get(login)
            .ok_or_else(|| CoreError::UserNotFound(login.to_string()))
    }

    fn customer_mut(&mut self, login: &str) -> CoreResult<&mut Customer> {
        self.customers
            .get_mut(login)
            .ok_or_else(|| CoreError::UserNotFound(login.to_string()))
    }

    /// All customers, ordered by login.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Structured report rows, ordered by login.
    pub fn summaries(&self) -> Vec<CustomerSummary> {
        self.customers().map(CustomerSummary::from).collect()
    }

    /// Report lines laid out by `formatter`.
    pub fn customer_report(&self, formatter: &dyn ReportFormatter) -> Vec<String> {
        let customers: Vec<&Customer> = self.customers().collect();
        formatter.format(&customers)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Loyalty Tiers
//!
//! A tier decides a customer's discount and every points formula.
//!
//! ```text
//! ┌──────────┬──────────┬────────┬───────────────┬─────────────────────┬───────────────────────────────┐
//! │ Tier     │ Discount │ Start  │ Purchase      │ Reward              │ Punishment                    │
//! ├──────────┼──────────┼────────┼───────────────┼─────────────────────┼───────────────────────────────┤
//! │ Entry    │ 10%      │ 0      │ floor(p) × 10 │ OFFLINE 30, MULTI 10│ ONLINE 10, COMP 20, COOP 50   │
//! │ Veteran  │ 20%      │ 1000   │ floor(p) × 15 │ ONLINE 10, COOP 20  │ COMP 20, OFFLINE 20           │
//! └──────────┴──────────┴────────┴───────────────┴─────────────────────┴───────────────────────────────┘
//! ```
//!
//! Tiers carry no per-customer state, so the enum is `Copy`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::Game;
use crate::money::Money;
use crate::playstyle::Playstyle;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount in basis points (1000 bps = 10%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Share of the price still paid, in basis points.
    #[inline]
    pub const fn remaining_bps(&self) -> u32 {
        10_000u32.saturating_sub(self.0)
    }
}

// =============================================================================
// Tier
// =============================================================================

/// Points threshold: an Entry customer strictly above it may be upgraded.
pub const VETERAN_POINTS_THRESHOLD: i64 = 1000;

const ENTRY_DISCOUNT: DiscountRate = DiscountRate::from_bps(1000);
const VETERAN_DISCOUNT: DiscountRate = DiscountRate::from_bps(2000);

const ENTRY_POINTS_PER_UNIT: i64 = 10;
const VETERAN_POINTS_PER_UNIT: i64 = 15;

const ENTRY_REWARDS: &[(Playstyle, i64)] = &[
    (Playstyle::Offline, 30),
    (Playstyle::Multiplayer, 10),
];
const ENTRY_PUNISHMENTS: &[(Playstyle, i64)] = &[
    (Playstyle::Online, 10),
    (Playstyle::Competitive, 20),
    (Playstyle::Cooperative, 50),
];
const VETERAN_REWARDS: &[(Playstyle, i64)] = &[
    (Playstyle::Online, 10),
    (Playstyle::Cooperative, 20),
];
const VETERAN_PUNISHMENTS: &[(Playstyle, i64)] = &[
    (Playstyle::Competitive, 20),
    (Playstyle::Offline, 20),
];

/// Loyalty tier of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    Entry,
    Veteran,
}

impl LoyaltyTier {
    /// Resolves a tier label, ignoring case. `noob` and `veterano` are
    /// accepted as older spellings.
    pub fn from_label(label: &str) -> Option<LoyaltyTier> {
        match label.trim().to_ascii_lowercase().as_str() {
            "entry" | "noob" => Some(LoyaltyTier::Entry),
            "veteran" | "veterano" => Some(LoyaltyTier::Veteran),
            _ => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            LoyaltyTier::Entry => "Entry",
            LoyaltyTier::Veteran => "Veteran",
        }
    }

    pub const fn discount_rate(&self) -> DiscountRate {
        match self {
            LoyaltyTier::Entry => ENTRY_DISCOUNT,
            LoyaltyTier::Veteran => VETERAN_DISCOUNT,
        }
    }

    pub const fn starting_points(&self) -> i64 {
        match self {
            LoyaltyTier::Entry => 0,
            LoyaltyTier::Veteran => VETERAN_POINTS_THRESHOLD,
        }
    }

    /// Price after this tier's discount, rounded up to the cent.
    #[inline]
    pub fn discounted(&self, price: Money) -> Money {
        price.apply_discount(self.discount_rate())
    }

    /// Whether `balance` covers the exact discounted `price`.
    #[inline]
    pub fn can_afford(&self, balance: Money, price: Money) -> bool {
        balance.covers(price, self.discount_rate())
    }

    /// Points for buying a game at `price`: `floor(price) × rate`.
    pub fn purchase_points(&self, price: Money) -> i64 {
        let per_unit = match self {
            LoyaltyTier::Entry => ENTRY_POINTS_PER_UNIT,
            LoyaltyTier::Veteran => VETERAN_POINTS_PER_UNIT,
        };
        price.floor_units() * per_unit
    }

    /// Bonus added when a play of `game` is rewarded.
    pub fn reward_points(&self, game: &Game) -> i64 {
        let table = match self {
            LoyaltyTier::Entry => ENTRY_REWARDS,
            LoyaltyTier::Veteran => VETERAN_REWARDS,
        };
        sum_matching(table, game)
    }

    /// Amount subtracted when a play of `game` is punished.
    pub fn punishment_points(&self, game: &Game) -> i64 {
        let table = match self {
            LoyaltyTier::Entry => ENTRY_PUNISHMENTS,
            LoyaltyTier::Veteran => VETERAN_PUNISHMENTS,
        };
        sum_matching(table, game)
    }
}

fn sum_matching(table: &[(Playstyle, i64)], game: &Game) -> i64 {
    table
        .iter()
        .filter(|(tag, _)| game.has_playstyle(*tag))
        .map(|(_, points)| points)
        .sum()
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

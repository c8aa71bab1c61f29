//! # arcade-core: Store Rules for the Arcade Desk
//!
//! This crate holds every rule of the game store: customers, loyalty tiers,
//! games, sales and play scoring. It does no I/O and never logs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Arcade Store Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  arcade-desk (app crate)                        │   │
//! │  │   config ──► seed replay ──► commands ──► report formatter     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut StoreEngine                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ arcade-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   store   │  │  factory  │  │ customer  │  │   tier    │  │   │
//! │  │   │  engine   │  │ Game/User │  │ Purchase  │  │  tables   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   game    │  │ playstyle │  │   money   │  │  report   │  │   │
//! │  │   │ category  │  │   tags    │  │   cents   │  │   seam    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • INTEGER MONEY                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The engine: registry plus every use case
//! - [`factory`] - Validated construction of games and customers
//! - [`customer`] - Customer aggregate and purchases
//! - [`tier`] - Loyalty tiers, discounts and points tables
//! - [`game`] - Games and categories
//! - [`playstyle`] - Playstyle tags
//! - [`money`] - Money in integer cents
//! - [`report`] - Report formatter seam and summaries
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level checks
//!
//! ## Example Usage
//!
//! ```rust
//! use arcade_core::{Money, StoreEngine};
//!
//! let mut store = StoreEngine::new();
//! store.register("Mauro", "mauro", "Entry").unwrap();
//! store.credit_account("mauro", Money::from_major_minor(40, 0));
//!
//! store
//!     .sell_game("Tekken", Money::from_major_minor(20, 0), "Fighting", "", "mauro")
//!     .unwrap();
//!
//! // Entry pays 90%: $40.00 - $18.00
//! assert_eq!(store.balance("mauro").unwrap().cents(), 2200);
//! assert_eq!(store.points("mauro").unwrap(), 200);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod customer;
pub mod error;
pub mod factory;
pub mod game;
pub mod money;
pub mod playstyle;
pub mod report;
pub mod store;
pub mod tier;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use customer::{Customer, PlayStats, Purchase};
pub use error::{CoreError, CoreResult, ValidationError};
pub use game::{Game, GameCategory};
pub use money::Money;
pub use playstyle::{Playstyle, Playstyles};
pub use report::{CustomerSummary, ReportFormatter};
pub use store::{PlayOutcome, SaleOutcome, StoreEngine, TierChange};
pub use tier::{DiscountRate, LoyaltyTier, VETERAN_POINTS_THRESHOLD};

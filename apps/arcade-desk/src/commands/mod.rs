//! # Commands Module
//!
//! Every operation the front desk can run against the store.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── customer.rs  ◄─── Registration, credit, lookups, manual upgrade
//! ├── sale.rs      ◄─── Game sales
//! ├── play.rs      ◄─── Rewards and punishments
//! ├── report.rs    ◄─── Customer report and summaries
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  sell_game(&store_state, SellGameRequest { .. })                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  parse raw input (price text ─► Money)                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  store_state.with_store_mut(|store| store.sell_game(..))               │
//! │         │           (one lock for the whole operation)                  │
//! │         ▼                                                               │
//! │  Result<SaleResponse, ApiError>  (serde-serializable either way)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod customer;
pub mod play;
pub mod report;
pub mod sale;

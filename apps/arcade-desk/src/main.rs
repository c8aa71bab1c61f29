//! # Arcade Desk Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Arcade Desk                                      │
//! │                                                                         │
//! │  main.rs ────► calls arcade_desk::run()                                 │
//! │                                                                         │
//! │  lib.rs ─────► config, logging, state, seed replay, report             │
//! │                                                                         │
//! │  commands/ ──► register_customer, sell_game, reward_play, ...          │
//! │                                                                         │
//! │  state/ ─────► StoreState, ConfigState                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Environment
//! - `ARCADE_SEED_FILE=seed.json` replays a seed file before the report
//! - `ARCADE_STORE_NAME`, `ARCADE_LOG`, `ARCADE_DEFAULT_TIER`, `RUST_LOG`

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    arcade_desk::run()
}

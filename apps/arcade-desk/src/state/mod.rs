//! # State Module
//!
//! Application state for the desk.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │   StoreState                 │   │   ConfigState                │   │
//! │  │                              │   │                              │   │
//! │  │  Arc<Mutex<StoreEngine>>     │   │  store_name                  │   │
//! │  │  (registry + every rule)     │   │  log_filter                  │   │
//! │  │                              │   │  seed_file, default_tier     │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: one lock per command, held for the whole operation      │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::ConfigState;
pub use store::StoreState;

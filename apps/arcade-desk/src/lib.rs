//! # Arcade Desk Library
//!
//! Front-desk layer of the arcade store: wires configuration, logging and
//! shared state around `arcade-core`, and exposes one command function per
//! store operation.
//!
//! ## Module Organization
//! ```text
//! arcade_desk/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Shared store engine
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── customer.rs ◄─── Registration, credit, lookups, upgrade
//! │   ├── sale.rs     ◄─── Game sales
//! │   ├── play.rs     ◄─── Rewards and punishments
//! │   ├── report.rs   ◄─── Customer report
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── formatter.rs    ◄─── Plain-text report formatter
//! ├── seed.rs         ◄─── Seed file replay
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod formatter;
pub mod seed;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, StoreState};

/// Runs the desk: replays the seed file, if any, and prints the report.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • ConfigState::from_env() (ARCADE_* over defaults)                  │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG if set, otherwise the configured filter                  │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • StoreState: empty store behind a Mutex                            │
/// │                                                                         │
/// │  4. Replay Seed File ─────────────────────────────────────────────────► │
/// │     • Only when ARCADE_SEED_FILE is set                                 │
/// │                                                                         │
/// │  5. Print Customer Report ────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigState::from_env();
    init_tracing(&config.log_filter);

    info!(store = %config.store_name, "Starting arcade desk");

    let store = StoreState::new();

    if let Some(path) = &config.seed_file {
        info!(?path, "Replaying seed file");
        let steps = seed::load_seed(path)?;
        seed::replay(&store, &config, steps);
    }

    for line in commands::report::customer_report(&store, &config)? {
        println!("{}", line);
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=arcade=trace` - Show trace for arcade crates only
/// - Default: `default_filter` (from `ARCADE_LOG`)
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

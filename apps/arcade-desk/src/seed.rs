//! # Seed Replay
//!
//! Loads a JSON list of desk operations and replays it through the command
//! layer, so seeded data obeys exactly the same rules as live input.
//!
//! ## File Format
//! ```json
//! [
//!   { "op": "register", "name": "Mauro", "login": "mauro", "tier": "Entry" },
//!   { "op": "credit", "login": "mauro", "amount": "40" },
//!   { "op": "sell", "name": "Tekken", "price": "20", "category": "Fighting",
//!     "playstyles": "", "login": "mauro" },
//!   { "op": "reward", "login": "mauro", "game": "Tekken", "score": 5000 },
//!   { "op": "punish", "login": "mauro", "game": "Tekken", "cleared": true },
//!   { "op": "upgrade", "login": "mauro" }
//! ]
//! ```
//!
//! A rejected step is logged and skipped; the rest of the file still runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::commands::customer::{credit_account, register_customer, upgrade_customer, RegisterRequest};
use crate::commands::play::{punish_play, reward_play, PlayRequest};
use crate::commands::sale::{sell_game, SellGameRequest};
use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};

/// Errors loading a seed file. Step failures are not errors; see
/// [`ReplaySummary`].
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One operation in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SeedStep {
    Register {
        name: String,
        login: String,
        /// Falls back to the configured default tier
        #[serde(default)]
        tier: Option<String>,
    },
    Credit {
        login: String,
        amount: String,
    },
    Sell(SellGameRequest),
    Reward(PlayRequest),
    Punish(PlayRequest),
    Upgrade {
        login: String,
    },
}

/// Counts of replayed steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Parses seed steps from JSON text.
pub fn parse_seed(text: &str) -> Result<Vec<SeedStep>, SeedError> {
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses a seed file.
pub fn load_seed(path: &Path) -> Result<Vec<SeedStep>, SeedError> {
    let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&text)
}

/// Replays `steps` in order against `store`.
pub fn replay(store: &StoreState, config: &ConfigState, steps: Vec<SeedStep>) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for (index, step) in steps.into_iter().enumerate() {
        match apply_step(store, config, step) {
            Ok(()) => summary.applied += 1,
            Err(err) => {
                warn!(step = index, code = ?err.code, message = %err.message, "Seed step rejected");
                summary.rejected += 1;
            }
        }
    }

    info!(applied = summary.applied, rejected = summary.rejected, "Seed replay finished");
    summary
}

fn apply_step(store: &StoreState, config: &ConfigState, step: SeedStep) -> Result<(), ApiError> {
    match step {
        SeedStep::Register { name, login, tier } => {
            let tier = tier.unwrap_or_else(|| config.default_tier.clone());
            register_customer(store, RegisterRequest { name, login, tier }).map(|_| ())
        }
        SeedStep::Credit { login, amount } => credit_account(store, &login, &amount).map(|_| ()),
        SeedStep::Sell(request) => sell_game(store, request).map(|_| ()),
        SeedStep::Reward(request) => reward_play(store, &request).map(|_| ()),
        SeedStep::Punish(request) => punish_play(store, &request).map(|_| ()),
        SeedStep::Upgrade { login } => upgrade_customer(store, &login).map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::customer::{get_balance, get_customer, get_points};
    use arcade_core::LoyaltyTier;

    const SEED: &str = r#"[
        { "op": "register", "name": "Mauro", "login": "mauro" },
        { "op": "register", "name": "Ana", "login": "ana", "tier": "veterano" },
        { "op": "credit", "login": "mauro", "amount": "40" },
        { "op": "sell", "name": "Tekken", "price": "20", "category": "luta", "login": "mauro" },
        { "op": "sell", "name": "Tekken", "price": "20", "category": "luta", "login": "mauro" },
        { "op": "reward", "login": "mauro", "game": "Tekken", "score": 5000 },
        { "op": "upgrade", "login": "ana" }
    ]"#;

    #[test]
    fn test_parse_seed() {
        let steps = parse_seed(SEED).unwrap();
        assert_eq!(steps.len(), 7);
        assert!(matches!(&steps[1], SeedStep::Register { tier: Some(t), .. } if t == "veterano"));
        assert!(matches!(&steps[5], SeedStep::Reward(p) if p.score == 5000 && !p.cleared));
    }

    #[test]
    fn test_parse_seed_rejects_unknown_op() {
        let err = parse_seed(r#"[{ "op": "refund", "login": "mauro" }]"#).unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn test_replay_skips_rejected_steps() {
        let store = StoreState::new();
        let summary = replay(&store, &ConfigState::default(), parse_seed(SEED).unwrap());

        // duplicate sale and ineligible upgrade are rejected
        assert_eq!(summary, ReplaySummary { applied: 5, rejected: 2 });
        assert_eq!(get_balance(&store, "mauro").unwrap().cents(), 2200);
        // 200 purchase + 5 fighting play points
        assert_eq!(get_points(&store, "mauro").unwrap(), 205);
        assert_eq!(get_customer(&store, "ana").unwrap().tier, LoyaltyTier::Veteran);
    }

    #[test]
    fn test_replay_uses_configured_default_tier() {
        let store = StoreState::new();
        let config = ConfigState {
            default_tier: "Veteran".to_string(),
            ..ConfigState::default()
        };
        let steps = parse_seed(r#"[{ "op": "register", "name": "Jose", "login": "jose" }]"#).unwrap();

        replay(&store, &config, steps);
        assert_eq!(get_customer(&store, "jose").unwrap().tier, LoyaltyTier::Veteran);
    }

    #[test]
    fn test_load_seed_missing_file() {
        let err = load_seed(Path::new("/nonexistent/arcade-seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}

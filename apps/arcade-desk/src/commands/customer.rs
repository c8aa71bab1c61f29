//! # Customer Commands
//!
//! Registration, credit top-ups, lookups and the manual tier upgrade.

use arcade_core::{CustomerSummary, LoyaltyTier, Money};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreState;

/// Raw registration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub login: String,
    pub tier: String,
}

/// Balance after a credit top-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditResponse {
    pub login: String,
    pub credited: Money,
    pub balance: Money,
}

/// Registers a new customer.
///
/// ## Returns
/// The new customer's summary (starting points already applied)
pub fn register_customer(
    store: &StoreState,
    request: RegisterRequest,
) -> Result<CustomerSummary, ApiError> {
    debug!(login = %request.login, tier = %request.tier, "register_customer command");

    let summary = store.with_store_mut(|s| {
        s.register(&request.name, &request.login, &request.tier)
            .map(CustomerSummary::from)
    })??;

    info!(login = %summary.login, tier = %summary.tier, "Customer registered");
    Ok(summary)
}

/// Adds credit to a customer's balance.
///
/// `amount` is decimal text such as `"40"` or `"20.50"`. Negative amounts
/// are accepted and reduce the balance.
pub fn credit_account(
    store: &StoreState,
    login: &str,
    amount: &str,
) -> Result<CreditResponse, ApiError> {
    debug!(login = %login, amount = %amount, "credit_account command");

    let amount = Money::parse_decimal(amount)?;

    store.with_store_mut(|s| {
        if !s.credit_account(login, amount) {
            tracing::warn!(login = %login, "Credit for unknown login");
            return Err(ApiError::not_found("User", login));
        }

        let balance = s.balance(login)?;
        info!(login = %login, credited = %amount, balance = %balance, "Account credited");
        Ok(CreditResponse {
            login: login.to_string(),
            credited: amount,
            balance,
        })
    })?
}

/// Gets one customer's summary.
pub fn get_customer(store: &StoreState, login: &str) -> Result<CustomerSummary, ApiError> {
    debug!(login = %login, "get_customer command");
    let summary = store.with_store(|s| s.customer(login).map(CustomerSummary::from))??;
    Ok(summary)
}

/// Gets a customer's balance.
pub fn get_balance(store: &StoreState, login: &str) -> Result<Money, ApiError> {
    debug!(login = %login, "get_balance command");
    Ok(store.with_store(|s| s.balance(login))??)
}

/// Gets a customer's points.
pub fn get_points(store: &StoreState, login: &str) -> Result<i64, ApiError> {
    debug!(login = %login, "get_points command");
    Ok(store.with_store(|s| s.points(login))??)
}

/// Promotes an eligible Entry customer to Veteran.
///
/// ## Returns
/// The new tier
pub fn upgrade_customer(store: &StoreState, login: &str) -> Result<LoyaltyTier, ApiError> {
    debug!(login = %login, "upgrade_customer command");

    let tier = store.with_store_mut(|s| s.upgrade(login))??;
    info!(login = %login, tier = %tier, "Customer upgraded");
    Ok(tier)
}

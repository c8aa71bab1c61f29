//! # Report Seam
//!
//! The store hands its customers to a [`ReportFormatter`] and never lays
//! out text itself. [`CustomerSummary`] is the structured form of one row for
//! callers that serialize instead of printing.

use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::money::Money;
use crate::tier::LoyaltyTier;

/// Turns the ordered customer list into report lines.
pub trait ReportFormatter {
    fn format(&self, customers: &[&Customer]) -> Vec<String>;
}

impl<F> ReportFormatter for F
where
    F: Fn(&[&Customer]) -> Vec<String>,
{
    fn format(&self, customers: &[&Customer]) -> Vec<String> {
        self(customers)
    }
}

/// One customer's attributes, flattened for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub login: String,
    pub name: String,
    pub tier: LoyaltyTier,
    pub balance: Money,
    pub points: i64,
    pub games: Vec<String>,
    pub total_spent: Money,
}

impl From<&Customer> for CustomerSummary {
    fn from(customer: &Customer) -> Self {
        CustomerSummary {
            login: customer.login().to_string(),
            name: customer.name().to_string(),
            tier: customer.tier(),
            balance: customer.balance(),
            points: customer.points(),
            games: customer.purchases().map(|p| p.game.name().to_string()).collect(),
            total_spent: customer.total_spent(),
        }
    }
}

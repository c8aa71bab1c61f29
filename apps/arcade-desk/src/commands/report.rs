//! # Report Commands

use arcade_core::CustomerSummary;
use tracing::debug;

use crate::error::ApiError;
use crate::formatter::PlainReportFormatter;
use crate::state::{ConfigState, StoreState};

/// Lists every customer as a structured summary, ordered by login.
pub fn list_customers(store: &StoreState) -> Result<Vec<CustomerSummary>, ApiError> {
    debug!("list_customers command");
    store.with_store(|s| s.summaries())
}

/// Builds the plain-text customer report titled with the store name.
pub fn customer_report(store: &StoreState, config: &ConfigState) -> Result<Vec<String>, ApiError> {
    debug!("customer_report command");
    let formatter = PlainReportFormatter::new(config.store_name.as_str());
    store.with_store(|s| s.customer_report(&formatter))
}

//! # Plain Report Formatter
//!
//! Lays out the customer report as fixed-width text lines.
//!
//! ```text
//! === Central P2-CG ===
//! ana    | Ana    | Veteran | $0.00  | 1000 pts | 0 games
//! mauro  | Mauro  | Entry   | $22.00 | 200 pts  | 1 game: Tekken
//! ```

use arcade_core::{Customer, ReportFormatter};

/// Report formatter producing one line per customer under a title line.
#[derive(Debug, Clone)]
pub struct PlainReportFormatter {
    title: String,
}

impl PlainReportFormatter {
    pub fn new(title: impl Into<String>) -> Self {
        PlainReportFormatter {
            title: title.into(),
        }
    }

    fn line(customer: &Customer) -> String {
        let games: Vec<&str> = customer.purchases().map(|p| p.game.name()).collect();
        let owned = match games.len() {
            0 => "0 games".to_string(),
            1 => format!("1 game: {}", games[0]),
            n => format!("{} games: {}", n, games.join(", ")),
        };

        format!(
            "{} | {} | {} | {} | {} pts | {}",
            customer.login(),
            customer.name(),
            customer.tier(),
            customer.balance(),
            customer.points(),
            owned
        )
    }
}

impl ReportFormatter for PlainReportFormatter {
    fn format(&self, customers: &[&Customer]) -> Vec<String> {
        let mut lines = Vec::with_capacity(customers.len() + 1);
        lines.push(format!("=== {} ===", self.title));

        if customers.is_empty() {
            lines.push("(no customers)".to_string());
        }
        lines.extend(customers.iter().map(|c| Self::line(c)));
        lines
    }
}

//! # Playstyle Catalog
//!
//! The closed set of tags a game can carry. Tier reward and punishment
//! formulas key on these tags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A playstyle tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Playstyle {
    Online,
    Offline,
    Multiplayer,
    Competitive,
    Cooperative,
}

/// The tags a single game carries. Ordered so reports list them stably.
pub type Playstyles = BTreeSet<Playstyle>;

impl Playstyle {
    /// Every tag in the catalog.
    pub const ALL: [Playstyle; 5] = [
        Playstyle::Online,
        Playstyle::Offline,
        Playstyle::Multiplayer,
        Playstyle::Competitive,
        Playstyle::Cooperative,
    ];

    /// Canonical label, as printed in reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Playstyle::Online => "ONLINE",
            Playstyle::Offline => "OFFLINE",
            Playstyle::Multiplayer => "MULTIPLAYER",
            Playstyle::Competitive => "COMPETITIVE",
            Playstyle::Cooperative => "COOPERATIVE",
        }
    }

    /// Resolves a label to a tag, or `None` for "unknown".
    ///
    /// Matching ignores case and surrounding whitespace. The older
    /// `competitivo`/`cooperativo` spellings are still accepted.
    ///
    /// ```rust
    /// use arcade_core::playstyle::Playstyle;
    ///
    /// assert_eq!(Playstyle::from_label("online"), Some(Playstyle::Online));
    /// assert_eq!(Playstyle::from_label("Cooperativo"), Some(Playstyle::Cooperative));
    /// assert_eq!(Playstyle::from_label("solo"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Playstyle> {
        match label.trim().to_ascii_lowercase().as_str() {
            "online" => Some(Playstyle::Online),
            "offline" => Some(Playstyle::Offline),
            "multiplayer" => Some(Playstyle::Multiplayer),
            "competitive" | "competitivo" => Some(Playstyle::Competitive),
            "cooperative" | "cooperativo" => Some(Playstyle::Cooperative),
            _ => None,
        }
    }
}

impl fmt::Display for Playstyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label names no tag. Carries the offending label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlaystyle(pub String);

impl FromStr for Playstyle {
    type Err = UnknownPlaystyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Playstyle::from_label(s).ok_or_else(|| UnknownPlaystyle(s.to_string()))
    }
}

/// Parses a whitespace-separated list of labels.
///
/// Blank input is an empty set. The first unknown label aborts the parse.
pub fn parse_playstyles(text: &str) -> Result<Playstyles, UnknownPlaystyle> {
    text.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_catalog() {
        for tag in Playstyle::ALL {
            assert_eq!(Playstyle::from_label(tag.label()), Some(tag));
        }
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(Playstyle::from_label("MultiPlayer"), Some(Playstyle::Multiplayer));
        assert_eq!(Playstyle::from_label("  OFFLINE "), Some(Playstyle::Offline));
        assert_eq!(Playstyle::from_label(""), None);
    }

    #[test]
    fn test_parse_playstyles() {
        let tags = parse_playstyles("online  competitive\tonline").unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(&Playstyle::Online));
        assert!(tags.contains(&Playstyle::Competitive));

        assert!(parse_playstyles("").unwrap().is_empty());
        assert!(parse_playstyles("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_playstyles_reports_first_unknown_label() {
        let err = parse_playstyles("online solo arcade").unwrap_err();
        assert_eq!(err, UnknownPlaystyle("solo".to_string()));
    }

    #[test]
    fn test_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&Playstyle::Cooperative).unwrap();
        assert_eq!(json, "\"COOPERATIVE\"");
    }
}

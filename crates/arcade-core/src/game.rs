//! # Games
//!
//! Immutable catalog items. A game is built per sale attempt by the
//! [`factory`](crate::factory) and, once sold, lives inside the buyer's
//! purchases keyed by its exact name.
//!
//! ## Play Outcome
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category      Points for one recorded play                            │
//! │  ───────────   ─────────────────────────────────────────────────────   │
//! │  Fighting      score / 1000 (truncated)                                │
//! │  Roleplaying   10, every play                                          │
//! │  Platformer    20 if the player cleared the game, else 0               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! The customer adds this delta before the tier's reward or punishment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::playstyle::{Playstyle, Playstyles};

/// Points per play for role-playing games.
pub const ROLEPLAYING_POINTS_PER_PLAY: i64 = 10;

/// Points for clearing a platformer.
pub const PLATFORMER_CLEAR_POINTS: i64 = 20;

/// Score needed for one point in a fighting game.
pub const FIGHTING_SCORE_PER_POINT: i64 = 1000;

// =============================================================================
// Category
// =============================================================================

/// Genre of a game. Decides how a play outcome turns into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameCategory {
    Fighting,
    Roleplaying,
    Platformer,
}

impl GameCategory {
    /// Resolves a category label, ignoring case.
    ///
    /// The older `luta`, `rpg` and `plataforma` labels are accepted too.
    pub fn from_label(label: &str) -> Option<GameCategory> {
        match label.trim().to_ascii_lowercase().as_str() {
            "fighting" | "luta" => Some(GameCategory::Fighting),
            "roleplaying" | "rpg" => Some(GameCategory::Roleplaying),
            "platformer" | "plataforma" => Some(GameCategory::Platformer),
            _ => None,
        }
    }

    /// Canonical label.
    pub const fn label(&self) -> &'static str {
        match self {
            GameCategory::Fighting => "Fighting",
            GameCategory::Roleplaying => "Roleplaying",
            GameCategory::Platformer => "Platformer",
        }
    }

    /// Points earned by a single play with this outcome.
    pub fn play_points(&self, score: i64, cleared: bool) -> i64 {
        match self {
            GameCategory::Fighting => score / FIGHTING_SCORE_PER_POINT,
            GameCategory::Roleplaying => ROLEPLAYING_POINTS_PER_PLAY,
            GameCategory::Platformer if cleared => PLATFORMER_CLEAR_POINTS,
            GameCategory::Platformer => 0,
        }
    }
}

impl fmt::Display for GameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Game
// =============================================================================

/// A game title. Fields are private so a built game cannot change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    name: String,
    price: Money,
    category: GameCategory,
    playstyles: Playstyles,
}

impl Game {
    /// Builds a game without validation. Use
    /// [`create_game`](crate::factory::create_game) for raw input.
    pub(crate) fn new(
        name: String,
        price: Money,
        category: GameCategory,
        playstyles: Playstyles,
    ) -> Self {
        Game {
            name,
            price,
            category,
            playstyles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> GameCategory {
        self.category
    }

    pub fn playstyles(&self) -> &Playstyles {
        &self.playstyles
    }

    /// Checks whether the game carries `tag`.
    #[inline]
    pub fn has_playstyle(&self, tag: Playstyle) -> bool {
        self.playstyles.contains(&tag)
    }

    /// Points for one play of this game, see the module docs.
    #[inline]
    pub fn play_points(&self, score: i64, cleared: bool) -> i64 {
        self.category.play_points(score, cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(category: GameCategory, tags: &[Playstyle]) -> Game {
        Game::new(
            "Test".to_string(),
            Money::from_cents(1000),
            category,
            tags.iter().copied().collect(),
        )
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(GameCategory::from_label("Fighting"), Some(GameCategory::Fighting));
        assert_eq!(GameCategory::from_label("luta"), Some(GameCategory::Fighting));
        assert_eq!(GameCategory::from_label("RPG"), Some(GameCategory::Roleplaying));
        assert_eq!(GameCategory::from_label("PLATFORMER"), Some(GameCategory::Platformer));
        assert_eq!(GameCategory::from_label("racing"), None);
    }

    #[test]
    fn test_play_points_per_category() {
        assert_eq!(GameCategory::Fighting.play_points(100_000, false), 100);
        assert_eq!(GameCategory::Fighting.play_points(999, true), 0);
        assert_eq!(GameCategory::Fighting.play_points(-2500, false), -2);
        assert_eq!(GameCategory::Roleplaying.play_points(0, false), 10);
        assert_eq!(GameCategory::Platformer.play_points(5000, true), 20);
        assert_eq!(GameCategory::Platformer.play_points(5000, false), 0);
    }

    #[test]
    fn test_has_playstyle() {
        let g = game(GameCategory::Fighting, &[Playstyle::Online, Playstyle::Competitive]);
        assert!(g.has_playstyle(Playstyle::Online));
        assert!(!g.has_playstyle(Playstyle::Offline));
        assert_eq!(g.play_points(3000, false), 3);
    }
}

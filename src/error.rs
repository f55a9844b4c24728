//! Error types for deck integrity checks.

use thiserror::Error;

use crate::card::Card;

/// Errors raised when deck manipulation or cheating is suspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheatingError {
    /// The same card appeared twice in a checked deck.
    #[error("cheating detected: duplicate card {0}")]
    DuplicateCard(Card),
}

impl CheatingError {
    /// Returns the offending card.
    #[must_use]
    pub const fn card(self) -> Card {
        match self {
            Self::DuplicateCard(card) => card,
        }
    }
}

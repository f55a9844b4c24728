//! Duplicate-card detection for deck-producing functions.
//!
//! [`fair_deck`] wraps any zero-argument producer. When the produced value is
//! a [`Deck`], its contents are scanned for duplicates before being handed to
//! the caller; any other result type passes through unchecked. Which results
//! get checked is decided by the [`FairnessCheck`] impl on the result type.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::CheatingError;

/// Integrity check applied to the result of a wrapped producer.
///
/// [`Deck`] scans its contents for duplicate cards; other result types pass
/// through unchecked via a no-op impl.
pub trait FairnessCheck {
    /// Checks the value, returning an error if cheating is suspected.
    ///
    /// # Errors
    ///
    /// Returns [`CheatingError::DuplicateCard`] carrying the first card found
    /// twice.
    fn check_fair(&self) -> Result<(), CheatingError>;
}

impl FairnessCheck for Deck {
    /// Scans the deck front to back and fails on the first repeated card.
    fn check_fair(&self) -> Result<(), CheatingError> {
        let mut seen = HashSet::with_capacity(self.len());
        for &card in self {
            if !seen.insert(card) {
                return Err(CheatingError::DuplicateCard(card));
            }
        }
        Ok(())
    }
}

impl FairnessCheck for Card {
    fn check_fair(&self) -> Result<(), CheatingError> {
        Ok(())
    }
}

impl FairnessCheck for () {
    fn check_fair(&self) -> Result<(), CheatingError> {
        Ok(())
    }
}

impl<T: FairnessCheck> FairnessCheck for Option<T> {
    /// Checks the inner value when present; an absent result passes.
    fn check_fair(&self) -> Result<(), CheatingError> {
        match self {
            Some(value) => value.check_fair(),
            None => Ok(()),
        }
    }
}

impl<T: FairnessCheck> FairnessCheck for Vec<T> {
    /// Checks each element in order; an empty vector passes.
    fn check_fair(&self) -> Result<(), CheatingError> {
        for value in self {
            value.check_fair()?;
        }
        Ok(())
    }
}

impl<T: FairnessCheck + ?Sized> FairnessCheck for &T {
    fn check_fair(&self) -> Result<(), CheatingError> {
        (**self).check_fair()
    }
}

/// Wraps a producer so its result is integrity-checked before being returned.
///
/// The wrapped call either yields the untouched result or fails with the
/// duplicate-card error; there is no partial result. Compose at the call
/// site as `fair_deck(build)()`.
///
/// # Example
///
/// ```
/// use fairdeck::{Card, Deck, DeckOptions, Rank, Suit, fair_deck};
///
/// let build = fair_deck(|| Deck::new(DeckOptions::default(), 7));
/// let deck = build().unwrap();
/// assert_eq!(deck.len(), 52);
///
/// let rigged = fair_deck(|| {
///     let mut deck = Deck::empty(0);
///     deck.add_card(Card::new(Suit::Spades, Rank::Ace));
///     deck.add_card(Card::new(Suit::Spades, Rank::Ace));
///     deck
/// });
/// assert!(rigged().is_err());
/// ```
#[must_use]
pub fn fair_deck<T, F>(produce: F) -> impl FnOnce() -> Result<T, CheatingError>
where
    F: FnOnce() -> T,
    T: FairnessCheck,
{
    move || {
        let result = produce();
        result.check_fair()?;
        Ok(result)
    }
}

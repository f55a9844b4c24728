//! Deck construction, shuffling, and drawing.

use alloc::vec::Vec;
use core::ops::Index;
use core::slice;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::DeckOptions;

/// An ordered collection of cards, drawn from the front and added at the back.
///
/// A deck is built as the full 52-card set (or empty via [`Deck::empty`]) and
/// owns its own seeded RNG for shuffling. The deck itself never polices
/// duplicates; re-adding a drawn card is legal, and duplicate detection is the
/// job of [`FairnessCheck`](crate::FairnessCheck).
///
/// All operations are synchronous and the deck carries no internal
/// synchronization. Callers sharing a deck across threads must supply their
/// own mutual exclusion.
///
/// # Example
///
/// ```
/// use fairdeck::{Deck, DeckOptions, Rank, Suit};
///
/// let mut deck = Deck::new(DeckOptions::default().with_shuffle(false), 42);
/// assert_eq!(deck.len(), 52);
///
/// let first = deck.draw().unwrap();
/// assert_eq!((first.suit(), first.rank()), (Suit::Spades, Rank::Two));
/// assert_eq!(deck.len(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the deck, front (index 0) first.
    cards: Vec<Card>,
    /// Random number generator driving shuffles.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full 52-card deck with the given seed.
    ///
    /// Cards are generated in canonical order (suits outer, ranks inner, both
    /// in enumeration order, so the first card is the Two of Spades), then
    /// shuffled in place when `options.shuffle` is set.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let mut deck = Self {
            cards: Self::full_set(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        if options.shuffle {
            deck.shuffle();
        }
        deck
    }

    /// Creates an empty deck with the given seed.
    #[must_use]
    pub fn empty(seed: u64) -> Self {
        Self {
            cards: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generates the full 52-card set, one card per (suit, rank) combination.
    fn full_set() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Returns a copy of the current contents in current order.
    ///
    /// The returned vector is detached from the deck; mutating it never
    /// affects the deck's internal state.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Shuffles the deck in place with a uniform random permutation.
    ///
    /// The length is unchanged; only the order of the cards changes.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the front card.
    ///
    /// Returns `None` when the deck is empty; an empty deck is a valid state,
    /// not an error.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        Some(self.cards.remove(0))
    }

    /// Appends a card to the back of the deck.
    ///
    /// No duplicate check is performed here; drawing a card and adding it back
    /// is legal.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the number of cards currently in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at the given position, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns an iterator over the current contents in current order.
    ///
    /// Each call starts fresh from the front over whatever the deck holds at
    /// call time.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the greatest card by rank, ties broken by suit ordinal.
    ///
    /// Returns `None` when the deck is empty.
    #[must_use]
    pub fn max(&self) -> Option<Card> {
        self.cards.iter().max().copied()
    }

    /// Returns the least card by rank, ties broken by suit ordinal.
    ///
    /// Returns `None` when the deck is empty.
    #[must_use]
    pub fn min(&self) -> Option<Card> {
        self.cards.iter().min().copied()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    /// Indexes into the deck (0 = front).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; out-of-range access is a caller
    /// contract violation.
    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

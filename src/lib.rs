//! A standard 52-card deck model with optional `no_std` support.
//!
//! The crate provides a [`Card`] value type with total ordering, a [`Deck`]
//! supporting shuffling, drawing, and indexed access, and a [`fair_deck`]
//! wrapper that rejects deck-producing functions whose result contains
//! duplicate cards.
//!
//! # Example
//!
//! ```
//! use fairdeck::{Deck, DeckOptions, fair_deck};
//!
//! let build = fair_deck(|| Deck::new(DeckOptions::default(), 42));
//! let mut deck = build().unwrap();
//! let card = deck.draw().unwrap();
//! assert_eq!(deck.len(), 51);
//! deck.add_card(card);
//! assert_eq!(deck.len(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod fair;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::CheatingError;
pub use fair::{FairnessCheck, fair_deck};
pub use options::DeckOptions;

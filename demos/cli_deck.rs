//! CLI deck walk-through example.

#![allow(clippy::missing_docs_in_private_items)]

use std::hash::{DefaultHasher, Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use fairdeck::{Card, Deck, DeckOptions, Rank, Suit, fair_deck};

fn hash_of(card: Card) -> u64 {
    let mut hasher = DefaultHasher::new();
    card.hash(&mut hasher);
    hasher.finish()
}

fn main() {
    let c1 = Card::new(Suit::Spades, Rank::Ace);
    let c2 = Card::new(Suit::Hearts, Rank::King);
    let c3 = Card::new(Suit::Spades, Rank::Ace);
    let c4 = Card::new(Suit::Diamonds, Rank::Eight);

    println!("{c1}");
    println!("{c2:?}");
    println!("equal? {}", c1 == c3);
    println!("(c2 > c1)?: {}", c2 > c1);
    println!("Another card: {c4}");
    println!("Hash of c4: {}", hash_of(c4));

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let build = fair_deck(|| Deck::new(DeckOptions::default(), seed));
    let mut deck = match build() {
        Ok(deck) => deck,
        Err(err) => {
            eprintln!("Deck rejected: {err}");
            return;
        }
    };

    println!("\nDeck details:");
    println!("Deck cards: {}", deck.len());
    println!("Max card: {}", deck.max().map_or_else(String::new, |c| c.to_string()));
    println!("Min card: {}", deck.min().map_or_else(String::new, |c| c.to_string()));
    println!("5 random cards");
    for i in 0..5 {
        println!("{}", deck[i]);
    }

    println!("\nDeck size: {} cards", deck.len());

    if let Some(pulled) = deck.draw() {
        println!("\nPulled card: {pulled}");
        println!("Deck size after draw: {} cards", deck.len());

        deck.add_card(pulled);
        println!("Added card back: {pulled}");
        println!("Deck size after adding back: {} cards", deck.len());
    }

    let index = 17;
    println!("\nCard at index {index}: {}", deck[index]);

    println!("\n=== Iterating over deck ===");
    for card in &deck {
        println!("{card}");
    }
}

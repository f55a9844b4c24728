//! Deck construction options.

/// Options controlling how a [`Deck`](crate::Deck) is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Whether the freshly built deck is shuffled before being returned.
    pub shuffle: bool,
}

impl Default for DeckOptions {
    /// Default options: the deck is shuffled on construction.
    fn default() -> Self {
        Self { shuffle: true }
    }
}

impl DeckOptions {
    /// Sets whether the deck is shuffled on construction.
    ///
    /// # Example
    ///
    /// ```
    /// use fairdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}

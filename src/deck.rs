use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cards::Card;
use crate::hand::Hand;

/// Errors from deck operations. Failed operations leave the deck untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("no more cards in the deck")]
    Empty,
    #[error("not enough cards in the deck: requested {requested}, {available} available")]
    Insufficient { requested: usize, available: usize },
}

/// An ordered pile of cards. The top of the deck is the end of the pile:
/// [`Deck::pop`] removes the most recently added card.
///
/// A deck starts empty; game variants provide the stocked decks (see
/// [`crate::variants::texas::deck`] for the standard 52).
///
/// ```
/// use holdem_core::cards::parse_cards;
/// use holdem_core::deck::Deck;
///
/// let mut deck = Deck::from_cards(parse_cards("AS KD").unwrap());
/// assert_eq!(deck.pop().unwrap().short_code(), "KD");
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom-to-top.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Place a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Move `count` cards off the top into `hand`, one at a time.
    ///
    /// Checked up front: if fewer than `count` cards remain, nothing moves
    /// and both containers are unchanged.
    pub fn deal_to(&mut self, hand: &mut Hand, count: usize) -> Result<(), DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::Insufficient {
                requested: count,
                available: self.cards.len(),
            });
        }
        for _ in 0..count {
            hand.push(self.pop()?);
        }
        Ok(())
    }

    /// Fisher-Yates shuffle driven by the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Shuffle with the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Stable sort into canonical order: suit-major (C < D < H < S), then
    /// rank in gameplay order.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Stable sort by rank alone; cards of equal rank keep their relative
    /// order.
    pub fn sort_by_rank(&mut self) {
        self.cards.sort_by(|a, b| a.cmp_by_rank(*b));
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    /// One card per line, bottom-to-top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

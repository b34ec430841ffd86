use std::cmp::Ordering;
use std::fmt;

use crate::cards::Card;
use crate::evaluator::Category;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("no more cards in the hand")]
    Empty,
}

/// A labeled, ordered pile of cards held by one seat: a player's hole cards
/// or the shared community cards. Starts empty and fills from a deck via
/// [`crate::deck::Deck::deal_to`].
///
/// ```
/// use holdem_core::cards::parse_cards;
/// use holdem_core::hand::Hand;
///
/// let hand = Hand::with_cards("Player 1", parse_cards("AS KD").unwrap());
/// assert_eq!(hand.to_string(), "Player 1: [Ace of Spades ♠, King of Diamonds ♦]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    label: String,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            cards: Vec::new(),
        }
    }

    pub fn with_cards(label: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            label: label.into(),
            cards,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the most recently added card.
    pub fn pop(&mut self) -> Result<Card, HandError> {
        self.cards.pop().ok_or(HandError::Empty)
    }

    /// Stable sort into canonical order: suit-major (C < D < H < S), then
    /// rank in gameplay order.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Stable sort by rank alone.
    pub fn sort_by_rank(&mut self) {
        self.cards.sort_by(|a, b| a.cmp_by_rank(*b));
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.label)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Showdown behavior a concrete game variant supplies on top of [`Hand`]:
/// how a hand is scored against shared community cards, and how two hands
/// seeing the same community cards rank against each other.
///
/// [`crate::variants::texas::TexasHand`] is the Hold'em implementation.
pub trait Showdown {
    /// Best category this hand makes together with the community cards.
    fn classify(&self, community: &Hand) -> Category;

    /// Rank this hand against another that sees the same community cards.
    /// `Ordering::Greater` means `self` wins.
    fn compare_to(&self, other: &Self, community: &Hand) -> Ordering;
}

/// All seats tied for best at showdown, in seat order. More than one seat is
/// returned only when their pairwise comparison lands equal.
pub fn winners<'a, S: Showdown>(seats: &'a [S], community: &Hand) -> Vec<&'a S> {
    let mut best: Vec<&S> = Vec::new();
    for seat in seats {
        match best.first() {
            None => best.push(seat),
            Some(leader) => match seat.compare_to(leader, community) {
                Ordering::Greater => {
                    best.clear();
                    best.push(seat);
                }
                Ordering::Equal => best.push(seat),
                Ordering::Less => {}
            },
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank, Suit};

    #[test]
    fn new_hand_is_empty_and_keeps_label() {
        let h = Hand::new("Community");
        assert_eq!(h.label(), "Community");
        assert_eq!(h.len(), 0);
        assert!(h.is_empty());
    }

    #[test]
    fn push_then_pop_is_lifo() {
        let mut h = Hand::new("seat");
        for c in parse_cards("2C 3D").unwrap() {
            h.push(c);
        }
        assert_eq!(h.pop().unwrap().short_code(), "3D");
        assert_eq!(h.pop().unwrap().short_code(), "2C");
        assert_eq!(h.pop(), Err(HandError::Empty));
    }

    #[test]
    fn pop_on_empty_hand_fails_and_leaves_hand_usable() {
        let mut h = Hand::new("seat");
        assert_eq!(h.pop(), Err(HandError::Empty));
        h.push(Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn sort_orders_canonically() {
        let mut h = Hand::with_cards("seat", parse_cards("AS 2C AC").unwrap());
        h.sort();
        let codes: Vec<String> = h.cards().iter().map(|c| c.short_code()).collect();
        assert_eq!(codes, ["2C", "AC", "AS"]);
    }

    #[test]
    fn sort_by_rank_ignores_suits() {
        let mut h = Hand::with_cards("seat", parse_cards("AS 2H KC").unwrap());
        h.sort_by_rank();
        let codes: Vec<String> = h.cards().iter().map(|c| c.short_code()).collect();
        assert_eq!(codes, ["2H", "KC", "AS"]);
    }

    #[test]
    fn display_brackets_the_cards() {
        let h = Hand::with_cards("Player 1", parse_cards("AS KD").unwrap());
        assert_eq!(h.to_string(), "Player 1: [Ace of Spades ♠, King of Diamonds ♦]");
        assert_eq!(Hand::new("Empty").to_string(), "Empty: []");
    }
}

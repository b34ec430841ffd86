use std::cmp::Ordering;
use std::fmt;

use crate::cards::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::evaluator::{CardPool, Category};
use crate::hand::{Hand, Showdown};

/// Full 52-card deck for Texas Hold'em: every suit crossed with every rank,
/// suits in canonical order, ranks in deck order (Ace first) within each
/// suit. The last card built sits on top, so the first pop yields the King
/// of Spades.
///
/// ```
/// use holdem_core::variants::texas;
///
/// let mut deck = texas::deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.pop().unwrap().short_code(), "KS");
/// ```
pub fn deck() -> Deck {
    let mut cards = Vec::with_capacity(52);
    for &suit in &Suit::ALL {
        for &rank in &Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    Deck::from_cards(cards)
}

/// A Hold'em seat: a labeled [`Hand`] of hole cards plus showdown scoring
/// against the shared community cards.
///
/// ```
/// use holdem_core::cards::parse_cards;
/// use holdem_core::evaluator::Category;
/// use holdem_core::hand::{Hand, Showdown};
/// use holdem_core::variants::texas::TexasHand;
///
/// let seat = TexasHand::with_cards("Player 1", parse_cards("AS AH").unwrap());
/// let community = Hand::with_cards("Community", parse_cards("AC 7D 9H JS QD").unwrap());
/// assert_eq!(seat.classify(&community), Category::ThreeOfAKind);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexasHand(Hand);

impl TexasHand {
    pub fn new(label: impl Into<String>) -> Self {
        Self(Hand::new(label))
    }

    pub fn with_cards(label: impl Into<String>, cards: Vec<Card>) -> Self {
        Self(Hand::with_cards(label, cards))
    }

    pub fn hand(&self) -> &Hand {
        &self.0
    }

    /// Mutable access for dealing into the seat.
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.0
    }

    pub fn label(&self) -> &str {
        self.0.label()
    }

    pub fn cards(&self) -> &[Card] {
        self.0.cards()
    }

    /// A rank paired somewhere in the union of this seat's cards and the
    /// community cards. Like every predicate below, reads the pool without
    /// touching either hand; see [`CardPool`] for the exact count rules.
    pub fn has_pair(&self, community: &Hand) -> bool {
        self.pool_with(community).has_pair()
    }

    pub fn has_two_pair(&self, community: &Hand) -> bool {
        self.pool_with(community).has_two_pair()
    }

    pub fn has_three_of_a_kind(&self, community: &Hand) -> bool {
        self.pool_with(community).has_three_of_a_kind()
    }

    pub fn has_straight(&self, community: &Hand) -> bool {
        self.pool_with(community).has_straight()
    }

    pub fn has_flush(&self, community: &Hand) -> bool {
        self.pool_with(community).has_flush()
    }

    pub fn has_full_house(&self, community: &Hand) -> bool {
        self.pool_with(community).has_full_house()
    }

    pub fn has_four_of_a_kind(&self, community: &Hand) -> bool {
        self.pool_with(community).has_four_of_a_kind()
    }

    /// Straight and flush tested independently over the pool; see
    /// [`CardPool::has_straight_flush`] for the caveat.
    pub fn has_straight_flush(&self, community: &Hand) -> bool {
        self.pool_with(community).has_straight_flush()
    }

    pub fn has_royal_flush(&self, community: &Hand) -> bool {
        self.pool_with(community).has_royal_flush()
    }

    fn pool_with(&self, community: &Hand) -> CardPool {
        CardPool::from_cards(self.0.cards().iter().chain(community.cards()).copied())
    }
}

impl From<Hand> for TexasHand {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl fmt::Display for TexasHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Showdown for TexasHand {
    /// Best category over the union of this seat's cards and the community
    /// cards. Neither hand is touched.
    fn classify(&self, community: &Hand) -> Category {
        self.pool_with(community).classify()
    }

    /// Categories decide first. On a category tie the seats' own cards break
    /// it: each side sorted canonically, compared position by position,
    /// first difference wins. Community cards and kickers are not consulted,
    /// which diverges from full kicker rules for same-category showdowns.
    fn compare_to(&self, other: &Self, community: &Hand) -> Ordering {
        let mine = self.classify(community);
        let theirs = other.classify(community);
        match mine.cmp(&theirs) {
            Ordering::Equal => compare_own_cards(self.0.cards(), other.0.cards()),
            decided => decided,
        }
    }
}

fn compare_own_cards(mine: &[Card], theirs: &[Card]) -> Ordering {
    let mut mine = mine.to_vec();
    let mut theirs = theirs.to_vec();
    mine.sort();
    theirs.sort();
    mine.iter()
        .zip(&theirs)
        .map(|(a, b)| a.cmp(b))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

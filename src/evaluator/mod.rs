pub(crate) mod runs;

use std::fmt;

use crate::cards::Card;

/// Poker hand categories from weakest to strongest. The derived order is the
/// showdown strength order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// All categories, weakest to strongest.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Position in the strength ladder: High Card 0 … Royal Flush 9.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Display label, e.g. "Three of a Kind".
    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Build-once tally of a showdown card pool: one seat's cards together with
/// the community cards, up to seven in Hold'em. All category predicates read
/// from this single pass; the source hands are never touched.
///
/// Predicates are total over any pool size. With fewer than five cards the
/// straight- and flush-level predicates simply come up false and
/// classification falls through toward [`Category::HighCard`].
///
/// ```
/// use holdem_core::cards::parse_cards;
/// use holdem_core::evaluator::{CardPool, Category};
///
/// let pool = CardPool::from_cards(parse_cards("AS AH QC JD 9H 3S 2C").unwrap());
/// assert!(pool.has_pair());
/// assert_eq!(pool.classify(), Category::Pair);
/// ```
#[derive(Debug, Clone)]
pub struct CardPool {
    /// Occurrences per gameplay value, indexed 2..=14.
    rank_counts: [u8; 15],
    /// Gameplay values present per suit, indexed by [`crate::cards::Suit::index`].
    suit_values: [Vec<u8>; 4],
}

impl CardPool {
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut rank_counts = [0u8; 15];
        let mut suit_values: [Vec<u8>; 4] = Default::default();
        for card in cards {
            let value = card.rank().value();
            rank_counts[value as usize] += 1;
            suit_values[card.suit().index()].push(value);
        }
        Self {
            rank_counts,
            suit_values,
        }
    }

    /// At least one rank appearing exactly twice.
    pub fn has_pair(&self) -> bool {
        self.rank_counts.iter().any(|&c| c == 2)
    }

    /// Exactly two distinct ranks appearing exactly twice. Three pairs in a
    /// seven-card pool therefore do not qualify; they fall through to
    /// [`CardPool::has_pair`].
    pub fn has_two_pair(&self) -> bool {
        self.rank_counts.iter().filter(|&&c| c == 2).count() == 2
    }

    /// At least one rank appearing exactly three times.
    pub fn has_three_of_a_kind(&self) -> bool {
        self.rank_counts.iter().any(|&c| c == 3)
    }

    /// A rank appearing three times alongside a different rank appearing
    /// twice.
    pub fn has_full_house(&self) -> bool {
        self.has_three_of_a_kind() && self.has_pair()
    }

    /// At least one rank appearing exactly four times.
    pub fn has_four_of_a_kind(&self) -> bool {
        self.rank_counts.iter().any(|&c| c == 4)
    }

    /// Five or more cards of one suit.
    pub fn has_flush(&self) -> bool {
        self.suit_values.iter().any(|values| values.len() >= 5)
    }

    /// Five consecutive gameplay values anywhere in the pool, with the Ace
    /// counting high or low (A-2-3-4-5 qualifies).
    pub fn has_straight(&self) -> bool {
        runs::contains_run(&self.straight_values())
    }

    /// A straight and a flush present at the same time. The two conditions
    /// are tested independently over the whole pool: the five consecutive
    /// values need not be the five suited cards, so an offsuit straight next
    /// to an unrelated flush still reports a straight flush.
    pub fn has_straight_flush(&self) -> bool {
        // TODO: scope the run to a single suit, as has_royal_flush does, to
        // reject the offsuit-straight-plus-flush false positive.
        self.has_straight() && self.has_flush()
    }

    /// 10-J-Q-K-A within a single suit. Unlike
    /// [`CardPool::has_straight_flush`] this check is suit-scoped.
    pub fn has_royal_flush(&self) -> bool {
        self.suit_values
            .iter()
            .any(|values| runs::contains_royal_run(&runs::run_values(values.iter().copied())))
    }

    /// Best category the pool holds, testing the strongest predicate first.
    pub fn classify(&self) -> Category {
        if self.has_royal_flush() {
            Category::RoyalFlush
        } else if self.has_straight_flush() {
            Category::StraightFlush
        } else if self.has_four_of_a_kind() {
            Category::FourOfAKind
        } else if self.has_full_house() {
            Category::FullHouse
        } else if self.has_flush() {
            Category::Flush
        } else if self.has_straight() {
            Category::Straight
        } else if self.has_three_of_a_kind() {
            Category::ThreeOfAKind
        } else if self.has_two_pair() {
            Category::TwoPair
        } else if self.has_pair() {
            Category::Pair
        } else {
            Category::HighCard
        }
    }

    /// Distinct gameplay values present, ascending, with the low Ace seated.
    fn straight_values(&self) -> Vec<u8> {
        runs::run_values((2u8..=14).filter(|&v| self.rank_counts[v as usize] > 0))
    }
}

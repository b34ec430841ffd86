use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Four suits; order has no hand-strength meaning but is fixed for canonical
/// sorting: Clubs < Diamonds < Hearts < Spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit name as printed in card display strings.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// Unicode pip printed next to the suit name.
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Single-letter code used in short card codes ("AS", "10C").
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Position in [`Suit::ALL`], handy for per-suit tallies.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.symbol())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::Clubs),
            'd' | '♦' => Ok(Suit::Diamonds),
            'h' | '♥' => Ok(Suit::Hearts),
            's' | '♠' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// Card ranks.
///
/// Declaration order is *deck order* (Ace, 2 … King), the order a fresh deck
/// is built and listed in. Comparisons never use it: `Ord` and
/// [`Rank::value`] follow *gameplay order*, where Ace is highest
/// (2 < 3 < … < King < Ace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 14,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// All ranks in deck order (Ace first).
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Gameplay value: 2..10 for the numerics, Jack 11, Queen 12, King 13,
    /// Ace 14.
    ///
    /// Straight detection additionally lets an Ace stand in for value 1 (the
    /// wheel); that substitution lives in the evaluator, not here.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank name as printed in card display strings ("Ace", "2", …, "10",
    /// "Jack").
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// Short-code prefix ("A", "2", …, "10", "J", "Q", "K").
    pub const fn code(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            other => other.name(),
        }
    }
}

// Gameplay order is an explicit function of `value()`; deriving Ord would
// silently track declaration (deck) order instead.
impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let r = match upper.as_str() {
            "A" | "ACE" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" | "JACK" => Rank::Jack,
            "Q" | "QUEEN" => Rank::Queen,
            "K" | "KING" => Rank::King,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// A playing card: rank + suit. Immutable, structural equality.
///
/// ```
/// use holdem_core::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.short_code(), "AS");
/// assert_eq!(card.to_string(), "Ace of Spades ♠");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Short code: rank code + suit letter, e.g. "AS", "KH", "10C".
    pub fn short_code(self) -> String {
        format!("{}{}", self.rank.code(), self.suit.letter())
    }

    /// Compare by rank alone, ignoring suits.
    pub fn cmp_by_rank(self, other: Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

// Canonical order: suit-major (C < D < H < S), then rank in gameplay order.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit.cmp(&other.suit).then(self.rank.cmp(&other.rank))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // Rank code first, suit code last: "AS", "10c", "Qh".
        let mut chars = t.chars();
        let suit_ch = match chars.next_back() {
            Some(c) => c,
            None => return Err(CardParseError::Invalid(s.to_string())),
        };
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use holdem_core::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("AS, kd 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_gameplay_order_puts_ace_on_top() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::King > Rank::Queen);
        assert!(Rank::Two < Rank::Three);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
    }

    #[test]
    fn rank_deck_order_starts_with_ace() {
        assert_eq!(Rank::ALL[0], Rank::Ace);
        assert_eq!(Rank::ALL[1], Rank::Two);
        assert_eq!(Rank::ALL[12], Rank::King);
    }

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "Ace");
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("queen").unwrap(), Rank::Queen);
        assert!(Rank::from_str("1").is_err());
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Spades.to_string(), "Spades ♠");
        assert_eq!(Suit::Clubs.letter(), 'C');
        assert_eq!(Suit::from_str("h").unwrap(), Suit::Hearts);
        assert_eq!(Suit::from_str("Diamonds").unwrap(), Suit::Diamonds);
        assert_eq!(Suit::try_from('♠').unwrap(), Suit::Spades);
        assert!(Suit::from_str("x").is_err());
    }

    #[test]
    fn card_display_and_short_code() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(ace.to_string(), "Ace of Spades ♠");
        assert_eq!(ace.short_code(), "AS");
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).short_code(), "10C");
        assert_eq!(Card::new(Rank::Two, Suit::Diamonds).short_code(), "2D");
    }

    #[test]
    fn card_from_str_accepts_codes() {
        assert_eq!(Card::from_str("AS").unwrap(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(Card::from_str("10c").unwrap(), Card::new(Rank::Ten, Suit::Clubs));
        assert_eq!(Card::from_str("kh").unwrap(), Card::new(Rank::King, Suit::Hearts));
        assert!(Card::from_str("A").is_err());
        assert!(Card::from_str("").is_err());
    }

    #[test]
    fn canonical_order_is_suit_major() {
        let ace_clubs = Card::new(Rank::Ace, Suit::Clubs);
        let two_diamonds = Card::new(Rank::Two, Suit::Diamonds);
        let king_clubs = Card::new(Rank::King, Suit::Clubs);
        // A diamond outranks any club in canonical order.
        assert!(two_diamonds > ace_clubs);
        assert!(ace_clubs > king_clubs);
    }

    #[test]
    fn rank_only_comparison_ignores_suit() {
        let ace_clubs = Card::new(Rank::Ace, Suit::Clubs);
        let two_diamonds = Card::new(Rank::Two, Suit::Diamonds);
        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(ace_clubs.cmp_by_rank(two_diamonds), Ordering::Greater);
        assert_eq!(ace_clubs.cmp_by_rank(ace_spades), Ordering::Equal);
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("AS, KD 10C").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(xs[1], Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(xs[2], Card::new(Rank::Ten, Suit::Clubs));
    }
}

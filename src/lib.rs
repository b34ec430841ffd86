//! holdem-core: card deck modeling and Texas Hold'em hand classification.
//!
//! Goals:
//! - Hold'em showdown scoring: classify a seat's cards against shared
//!   community cards and rank seats against each other
//! - Small, well-documented public API over plain owned card containers
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: deal and classify
//! ```
//! use holdem_core::hand::{Hand, Showdown};
//! use holdem_core::variants::texas::{self, TexasHand};
//!
//! let mut deck = texas::deck();
//! deck.shuffle_seeded(7);
//!
//! let mut community = Hand::new("Community");
//! deck.deal_to(&mut community, 5).unwrap();
//!
//! let mut seat = TexasHand::new("Player 1");
//! deck.deal_to(seat.hand_mut(), 2).unwrap();
//!
//! println!("{} -> {}", seat, seat.classify(&community));
//! assert_eq!(deck.len(), 45);
//! ```
//!
//! ## Demo
//! Deal a full table and print the showdown with:
//! ```sh
//! cargo run --bin showdown
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod variants;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

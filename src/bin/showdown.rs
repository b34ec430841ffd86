use std::env;
use std::process;

use holdem_core::deck::DeckError;
use holdem_core::hand::{winners, Hand, Showdown};
use holdem_core::variants::texas::{self, TexasHand};
use rand::Rng;

const SEATS: usize = 4;

fn seed_from_args() -> u64 {
    match env::args().nth(1) {
        Some(raw) => match raw.parse() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("usage: showdown [seed]");
                process::exit(2);
            }
        },
        None => rand::rng().random(),
    }
}

fn main() -> Result<(), DeckError> {
    let seed = seed_from_args();
    println!("holdem-core {} (seed {seed})", holdem_core::VERSION);

    let mut deck = texas::deck();
    deck.shuffle_seeded(seed);

    let mut community = Hand::new("Community");
    deck.deal_to(&mut community, 5)?;

    let mut seats = Vec::with_capacity(SEATS);
    for i in 1..=SEATS {
        let mut seat = TexasHand::new(format!("Player {i}"));
        deck.deal_to(seat.hand_mut(), 2)?;
        seats.push(seat);
    }

    println!("{community}");
    println!();
    for seat in &seats {
        println!("{seat} -> {}", seat.classify(&community));
    }

    let best = winners(&seats, &community);
    println!();
    match best.as_slice() {
        [single] => println!("winner: {}", single.label()),
        several => {
            let names: Vec<&str> = several.iter().map(|s| s.label()).collect();
            println!("winners (tie): {}", names.join(", "));
        }
    }
    println!("{} cards left in the deck", deck.len());
    Ok(())
}

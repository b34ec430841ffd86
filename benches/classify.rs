use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_core::cards::parse_cards;
use holdem_core::evaluator::CardPool;
use holdem_core::hand::{winners, Hand};
use holdem_core::variants::texas::{self, TexasHand};

fn bench_classify_pool(c: &mut Criterion) {
    let high_card = parse_cards("AS KH 9C 7D 5S 3H 2C").unwrap();
    let royal = parse_cards("10S JS QS KS AS 2C 3D").unwrap();

    let mut g = c.benchmark_group("classify_pool");
    g.bench_with_input(BenchmarkId::new("high_card", "seven"), &high_card, |b, input| {
        b.iter(|| CardPool::from_cards(black_box(input).iter().copied()).classify())
    });
    g.bench_with_input(BenchmarkId::new("royal_flush", "seven"), &royal, |b, input| {
        b.iter(|| CardPool::from_cards(black_box(input).iter().copied()).classify())
    });
    g.finish();
}

fn bench_showdown_round(c: &mut Criterion) {
    c.bench_function("shuffle_deal_showdown", |b| {
        b.iter(|| {
            let mut deck = texas::deck();
            deck.shuffle_seeded(black_box(7));

            let mut community = Hand::new("Community");
            deck.deal_to(&mut community, 5).unwrap();

            let mut seats = Vec::with_capacity(4);
            for i in 1..=4 {
                let mut seat = TexasHand::new(format!("Player {i}"));
                deck.deal_to(seat.hand_mut(), 2).unwrap();
                seats.push(seat);
            }
            winners(&seats, &community).len()
        })
    });
}

criterion_group!(benches, bench_classify_pool, bench_showdown_round);
criterion_main!(benches);

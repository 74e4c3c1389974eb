use std::hint::black_box;

use blackjack_rs::agents::ThresholdAgent;
use blackjack_rs::cards::{Card, Rank, Suit};
use blackjack_rs::game::Game;
use blackjack_rs::score::score;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_score(c: &mut Criterion) {
    let hard = [
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let aces = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::King, Suit::Spades),
    ];

    let mut g = c.benchmark_group("score");
    g.bench_with_input(BenchmarkId::new("hard", "K,7,2"), &hard, |b, input| {
        b.iter(|| score(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("four_aces", "A,A,A,A,K"), &aces, |b, input| {
        b.iter(|| score(black_box(input)))
    });
    g.finish();
}

fn bench_round(c: &mut Criterion) {
    let mut game = Game::with_seed(1);
    let mut agent = ThresholdAgent::dealer_rules();
    c.bench_function("run_round", |b| b.iter(|| black_box(game.run_round(&mut agent, &mut ()))));
}

criterion_group!(benches, bench_score, bench_round);
criterion_main!(benches);

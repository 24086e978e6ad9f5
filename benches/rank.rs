#[macro_use]
extern crate criterion;
extern crate poker_showdown;

use criterion::Criterion;
use poker_showdown::core::{CardIter, Deck, Rankable, evaluate};
use rand::{SeedableRng, rngs::StdRng};

fn sample(n: usize) -> Vec<poker_showdown::core::Card> {
    let mut rng = StdRng::seed_from_u64(420);
    let mut deck = Deck::new();
    deck.shuffle_with(&mut rng);
    deck.draw_many(n).unwrap()
}

fn rank_one(c: &mut Criterion) {
    let hand = sample(5);
    c.bench_function("Rank one 5 card hand", move |b| b.iter(|| hand.evaluate()));
}

fn rank_best_seven(c: &mut Criterion) {
    let hand = sample(7);
    c.bench_function("Rank best 5card hand from 7", move |b| {
        b.iter(|| hand.evaluate())
    });
}

fn rank_best_seven_by_subsets(c: &mut Criterion) {
    let hand = sample(7);
    c.bench_function("Rank best 5card hand from 7 by every subset", move |b| {
        b.iter(|| {
            CardIter::new(&hand, 5)
                .map(|five| evaluate(&five).unwrap())
                .max()
        })
    });
}

criterion_group!(benches, rank_one, rank_best_seven, rank_best_seven_by_subsets);
criterion_main!(benches);

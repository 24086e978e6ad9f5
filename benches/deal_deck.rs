#[macro_use]
extern crate criterion;
extern crate poker_showdown;

use poker_showdown::core::Deck;
use rand::rng;

fn shuffle_deck(c: &mut criterion::Criterion) {
    let mut rng = rng();
    let mut deck = Deck::new();

    c.bench_function("shuffle Deck", |b| {
        b.iter(|| deck.shuffle_with(&mut rng));
    });
}

fn deal_all_deck(c: &mut criterion::Criterion) {
    let mut rng = rng();

    c.bench_function("deal all from Deck", |b| {
        b.iter(|| {
            let mut deck = Deck::new();
            deck.shuffle_with(&mut rng);
            while let Ok(card) = deck.draw() {
                std::hint::black_box(card);
            }
        });
    });
}

criterion_group!(benches, shuffle_deck, deal_all_deck);
criterion_main!(benches);

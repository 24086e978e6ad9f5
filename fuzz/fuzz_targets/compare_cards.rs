#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate poker_showdown;
use poker_showdown::core::{Card, compare, evaluate};

// Arbitrary cards can repeat. A real deck never deals that, but the
// evaluator still has to come back with an answer.
fuzz_target!(|hands: ([Card; 7], [Card; 7])| {
    let a = evaluate(&hands.0).unwrap();
    let b = evaluate(&hands.1).unwrap();
    assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    assert_eq!(compare(&a, &b), a.cmp(&b));
});

#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate poker_showdown;
use poker_showdown::core::{CardIter, Hand, Rankable, evaluate};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            if h.len() == 7 {
                let r_seven = h.evaluate().unwrap();
                let r_five_max = CardIter::new(h.as_slice(), 5)
                    .map(|cv| evaluate(&cv).unwrap())
                    .max()
                    .unwrap();
                assert_eq!(r_five_max, r_seven);
            }
        }
    }
});

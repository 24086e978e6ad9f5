//! Poker showdown evaluation.
//!
//! Cards, a 52 card deck, hands, and an evaluator that finds the best
//! 5 card hand among 5 to 7 cards. Evaluated hands are totally ordered
//! so deciding a showdown is a comparison.
//!
//! ```
//! use poker_showdown::core::{Hand, HandCategory, Rankable};
//!
//! let quads = Hand::new_from_str("7c7d7h7s2c").unwrap().evaluate().unwrap();
//! let boat = Hand::new_from_str("KcKdKh2s2c").unwrap().evaluate().unwrap();
//!
//! assert_eq!(HandCategory::FourOfAKind, quads.category);
//! assert!(quads > boat);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;

//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Everything that can go wrong.
mod error;
pub use self::error::PokerError;

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Hand categories and the ordering between evaluated hands.
mod rank;
/// Export the results and the comparison.
pub use self::rank::{EvaluatedHand, HandCategory, compare};

/// Best 5 card hand evaluation.
mod evaluator;
/// Export the trait and the entry point.
pub use self::evaluator::{MAX_CARDS, MIN_CARDS, Rankable, evaluate};

use thiserror::Error;

use super::Card;

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PokerError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("{0} is not a card rank, ranks run from 2 to 14")]
    InvalidRank(u8),
    #[error("At least 5 cards are needed to make a poker hand, got {0}")]
    TooFewCards(usize),
    #[error("Holdem hands should never have more than 7 cards in them, got {0}")]
    TooManyCards(usize),
    #[error("Can't draw from an empty deck")]
    EmptyDeck,
    #[error("Index {index} is out of range for a hand of {len} cards")]
    HandIndexOutOfRange { index: usize, len: usize },
}

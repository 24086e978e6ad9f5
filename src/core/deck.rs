use std::collections::VecDeque;
use std::collections::vec_deque::{IntoIter, Iter};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::event;

use crate::core::card::{Card, Suit, Value};
use crate::core::error::PokerError;

/// Face cards go first in a fresh deck, then the numbered cards.
const FRESH_ORDER: [Value; 13] = [
    Value::Ace,
    Value::King,
    Value::Queen,
    Value::Jack,
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
];

/// The standard 52 card deck. Cards are dealt from the front.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Deck {
    /// Card storage. The front is the next card drawn.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create the 52 card deck in its fixed starting order.
    ///
    /// ```
    /// use poker_showdown::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|s| FRESH_ORDER.into_iter().map(move |v| Card::new(v, s)))
            .collect();
        Self { cards }
    }

    /// Randomly shuffle the deck using the thread local rng.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Randomly shuffle the deck with the given rng.
    /// Passing a seeded rng gives a reproducible order.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        event!(tracing::Level::TRACE, remaining = self.cards.len(), "Shuffled deck");
    }

    /// Remove and return the front card.
    ///
    /// ```
    /// use poker_showdown::core::{Deck, PokerError};
    ///
    /// let mut deck = Deck::new();
    /// for _ in 0..52 {
    ///     deck.draw().unwrap();
    /// }
    /// assert_eq!(Err(PokerError::EmptyDeck), deck.draw());
    /// ```
    pub fn draw(&mut self) -> Result<Card, PokerError> {
        self.cards.pop_front().ok_or_else(|| {
            event!(tracing::Level::WARN, "Draw attempted on an empty deck");
            PokerError::EmptyDeck
        })
    }

    /// Draw `n` cards from the front, e.g. three for the flop.
    /// Nothing is removed if there aren't enough cards left.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<Card>, PokerError> {
        if n > self.cards.len() {
            event!(
                tracing::Level::WARN,
                requested = n,
                remaining = self.cards.len(),
                "Not enough cards left to draw"
            );
            return Err(PokerError::EmptyDeck);
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Given a card, is that exact card (value and suit) still in the deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.iter().any(|d| d.identity() == c.identity())
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator over the cards in draw order.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_new_is_complete() {
        let d = Deck::new();
        assert_eq!(52, d.len());

        let unique: HashSet<(Value, Suit)> = d.iter().map(Card::identity).collect();
        assert_eq!(52, unique.len());

        for v in Value::values() {
            for s in Suit::suits() {
                assert!(unique.contains(&(v, s)));
            }
        }
    }

    #[test]
    fn test_fixed_order() {
        let d = Deck::new();
        let first: Vec<(Value, Suit)> = d.iter().take(5).map(Card::identity).collect();
        assert_eq!(
            vec![
                (Value::Ace, Suit::Heart),
                (Value::King, Suit::Heart),
                (Value::Queen, Suit::Heart),
                (Value::Jack, Suit::Heart),
                (Value::Two, Suit::Heart),
            ],
            first
        );
        assert_eq!(
            Some((Value::Ten, Suit::Diamond)),
            d.iter().last().map(Card::identity)
        );
    }

    #[test]
    fn test_contains() {
        let mut d = Deck::new();
        let ace = Card::new(Value::Ace, Suit::Heart);
        assert!(d.contains(&ace));

        let drawn = d.draw().unwrap();
        assert_eq!(ace.identity(), drawn.identity());
        assert!(!d.contains(&ace));
        // Another ace is equal by value but is a different card.
        assert!(d.contains(&Card::new(Value::Ace, Suit::Spade)));
    }

    #[test_log::test]
    fn test_draw_until_empty() {
        let mut d = Deck::new();
        let mut seen = HashSet::new();
        for _ in 0..52 {
            let c = d.draw().unwrap();
            assert!(seen.insert(c.identity()));
        }
        assert!(d.is_empty());
        assert_eq!(Err(PokerError::EmptyDeck), d.draw());
    }

    #[test]
    fn test_draw_many() {
        let mut d = Deck::new();
        let flop = d.draw_many(3).unwrap();
        assert_eq!(3, flop.len());
        assert_eq!(49, d.len());

        assert_eq!(Err(PokerError::EmptyDeck), d.draw_many(50));
        assert_eq!(49, d.len());

        assert_eq!(49, d.draw_many(49).unwrap().len());
        assert!(d.is_empty());
    }

    #[test]
    fn test_shuffle_rng() {
        let mut d_one = Deck::new();
        let mut d_two = Deck::new();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        d_one.shuffle_with(&mut rng_one);
        d_two.shuffle_with(&mut rng_two);

        let one: Vec<_> = d_one.iter().map(Card::identity).collect();
        let two: Vec<_> = d_two.iter().map(Card::identity).collect();
        assert_eq!(one, two);

        let fresh: Vec<_> = Deck::new().iter().map(Card::identity).collect();
        assert_ne!(fresh, one);
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut d = Deck::new();
        d.shuffle();
        assert_eq!(52, d.len());
        let unique: HashSet<(Value, Suit)> = d.iter().map(Card::identity).collect();
        assert_eq!(52, unique.len());
    }

    #[test]
    fn test_shuffle_is_unbiased() {
        // Count how often the Ace of Hearts lands in each position.
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 52 * 200;
        let mut positions = [0usize; 52];
        for _ in 0..trials {
            let mut d = Deck::new();
            d.shuffle_with(&mut rng);
            let idx = d
                .iter()
                .position(|c| c.identity() == (Value::Ace, Suit::Heart))
                .unwrap();
            positions[idx] += 1;
        }
        // Expected 200 per slot. Allow a wide margin.
        for count in positions {
            assert!((100..=320).contains(&count), "{count}");
        }
    }
}

use std::iter;

use tracing::event;

use super::{Card, EvaluatedHand, Hand, HandCategory, PokerError, Value};

/// Fewest cards that make a poker hand.
pub const MIN_CARDS: usize = 5;
/// Hole cards plus a full board.
pub const MAX_CARDS: usize = 7;

/// Bit for the ace playing low in the wheel.
const ACE_LOW: u16 = 1 << 1;
/// Five bits in a row.
const RUN: u16 = 0b1_1111;

/// Given a bitset of values (bit `n` for a face value of `n`) find the
/// high card of the best straight. The ace also counts as a one, so the
/// wheel comes back with a high card of `Five`.
fn highest_straight(value_set: u16) -> Option<Value> {
    let set = if value_set & (1 << Value::Ace.rank()) != 0 {
        value_set | ACE_LOW
    } else {
        value_set
    };
    (5..=Value::Ace.rank())
        .rev()
        .find(|&high| {
            let run = RUN << (high - 4);
            set & run == run
        })
        .and_then(Value::from_rank)
}

/// Walk a bitset of values from the highest down.
fn values_desc(value_set: u16) -> impl Iterator<Item = Value> {
    Value::values()
        .into_iter()
        .rev()
        .filter(move |v| value_set & (1 << v.rank()) != 0)
}

/// Everything the category checks need, counted in a single pass.
#[derive(Debug, Default)]
struct Histogram {
    /// How many cards of each face value, indexed by rank.
    value_counts: [u8; 15],
    /// Per suit, the bitset of values held in that suit.
    suit_sets: [u16; 4],
    /// Bitset of every value held.
    value_set: u16,
}

impl Histogram {
    fn new(cards: impl Iterator<Item = Card>) -> Self {
        let mut histogram = Self::default();
        for c in cards {
            let bit: u16 = 1 << c.rank();
            histogram.value_counts[usize::from(c.rank())] += 1;
            histogram.suit_sets[c.suit() as usize] |= bit;
            histogram.value_set |= bit;
        }
        histogram
    }

    /// Values held at least `n` times, highest first.
    fn values_with_count(&self, n: u8) -> impl Iterator<Item = Value> + '_ {
        values_desc(self.value_set)
            .filter(move |v| self.value_counts[usize::from(v.rank())] >= n)
    }

    /// The `n` highest values that aren't already part of the hand.
    fn kickers<'a>(&self, used: &'a [Value], n: usize) -> impl Iterator<Item = Value> + 'a {
        values_desc(self.value_set)
            .filter(move |v| !used.contains(v))
            .take(n)
    }

    /// Suits with at least five cards in them.
    fn flush_sets(&self) -> impl Iterator<Item = u16> + '_ {
        self.suit_sets
            .iter()
            .copied()
            .filter(|set| set.count_ones() >= 5)
    }

    /// Try each category from the strongest down and keep the first match.
    fn best_hand(&self) -> EvaluatedHand {
        self.straight_flush()
            .or_else(|| self.four_of_a_kind())
            .or_else(|| self.full_house())
            .or_else(|| self.flush())
            .or_else(|| self.straight())
            .unwrap_or_else(|| self.sets_and_pairs())
    }

    fn straight_flush(&self) -> Option<EvaluatedHand> {
        // A run inside one suit's bitset is five cards that are both
        // consecutive and suited.
        self.flush_sets()
            .filter_map(highest_straight)
            .max()
            .map(|high| EvaluatedHand::new(HandCategory::StraightFlush, vec![high]))
    }

    fn four_of_a_kind(&self) -> Option<EvaluatedHand> {
        let quad = self.values_with_count(4).next()?;
        let kickers = iter::once(quad).chain(self.kickers(&[quad], 1)).collect();
        Some(EvaluatedHand::new(HandCategory::FourOfAKind, kickers))
    }

    fn full_house(&self) -> Option<EvaluatedHand> {
        let triple = self.values_with_count(3).next()?;
        // A second set is good enough for the pair.
        let pair = self.values_with_count(2).find(|&v| v != triple)?;
        Some(EvaluatedHand::new(
            HandCategory::FullHouse,
            vec![triple, pair],
        ))
    }

    fn flush(&self) -> Option<EvaluatedHand> {
        self.flush_sets()
            .map(|set| values_desc(set).take(5).collect::<Vec<_>>())
            .max()
            .map(|kickers| EvaluatedHand::new(HandCategory::Flush, kickers))
    }

    fn straight(&self) -> Option<EvaluatedHand> {
        highest_straight(self.value_set)
            .map(|high| EvaluatedHand::new(HandCategory::Straight, vec![high]))
    }

    fn sets_and_pairs(&self) -> EvaluatedHand {
        if let Some(triple) = self.values_with_count(3).next() {
            let kickers = iter::once(triple)
                .chain(self.kickers(&[triple], 2))
                .collect();
            return EvaluatedHand::new(HandCategory::ThreeOfAKind, kickers);
        }

        let pairs: Vec<Value> = self.values_with_count(2).take(2).collect();
        match pairs.as_slice() {
            [_, _] => {
                let kickers = pairs.iter().copied().chain(self.kickers(&pairs, 1)).collect();
                EvaluatedHand::new(HandCategory::TwoPair, kickers)
            }
            [pair] => {
                let kickers = iter::once(*pair).chain(self.kickers(&pairs, 3)).collect();
                EvaluatedHand::new(HandCategory::OnePair, kickers)
            }
            _ => EvaluatedHand::new(HandCategory::HighCard, self.kickers(&[], 5).collect()),
        }
    }
}

/// Can this turn into a hand rank? There are default implementations for
/// `Hand`, `Vec<Card>` and `[Card]`.
pub trait Rankable {
    /// The cards to rank.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Find the best 5 card hand among 5 to 7 cards.
    ///
    /// This doesn't check for the same card showing up twice; the cards
    /// are assumed to come out of one deck. It doesn't cache the result
    /// either.
    ///
    /// # Examples
    /// ```
    /// use poker_showdown::core::{Hand, HandCategory, Rankable, Value};
    ///
    /// let hand = Hand::new_from_str("2c2d9h9sKc4d7s").unwrap();
    /// let best = hand.evaluate().unwrap();
    ///
    /// assert_eq!(HandCategory::TwoPair, best.category);
    /// assert_eq!(vec![Value::Nine, Value::Two, Value::King], best.kickers);
    /// ```
    fn evaluate(&self) -> Result<EvaluatedHand, PokerError> {
        let count = self.cards().count();
        if count < MIN_CARDS {
            return Err(PokerError::TooFewCards(count));
        }
        if count > MAX_CARDS {
            return Err(PokerError::TooManyCards(count));
        }

        let hand = Histogram::new(self.cards()).best_hand();
        event!(
            tracing::Level::TRACE,
            category = %hand.category,
            kickers = ?hand.kickers,
            "Evaluated hand"
        );
        Ok(hand)
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Hand {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

/// Evaluate the best 5 card hand in `cards`.
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, PokerError> {
    cards.evaluate()
}

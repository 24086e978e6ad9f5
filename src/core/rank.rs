use std::cmp::Ordering;
use std::fmt;

use super::Value;

/// All the different possible hand categories, weakest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all for the same suit.
    StraightFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::HighCard => "High card",
            Self::OnePair => "One pair",
            Self::TwoPair => "Two pair",
            Self::ThreeOfAKind => "Three of a kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full house",
            Self::FourOfAKind => "Four of a kind",
            Self::StraightFlush => "Straight flush",
        };
        write!(f, "{repr}")
    }
}

/// The best five card hand found in a set of cards.
///
/// `kickers` holds the values that decide between two hands of the same
/// category, most significant first. Its shape is fixed per category:
///
/// | Category | Kickers |
/// |----------|---------|
/// | `StraightFlush`, `Straight` | high card (a `Five` for the wheel) |
/// | `FourOfAKind` | quad, kicker |
/// | `FullHouse` | triple, pair |
/// | `Flush`, `HighCard` | five values, descending |
/// | `ThreeOfAKind` | triple, two kickers |
/// | `TwoPair` | high pair, low pair, kicker |
/// | `OnePair` | pair, three kickers |
///
/// Field order makes the derived `Ord` compare the category first and the
/// kickers lexicographically after that.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct EvaluatedHand {
    pub category: HandCategory,
    pub kickers: Vec<Value>,
}

impl EvaluatedHand {
    pub fn new(category: HandCategory, kickers: Vec<Value>) -> Self {
        Self { category, kickers }
    }
}

/// Strip the kickers, leaving only the category.
///
/// Useful when only the kind of hand matters, e.g. tallying outcomes.
impl From<EvaluatedHand> for HandCategory {
    fn from(hand: EvaluatedHand) -> Self {
        hand.category
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, v) in self.kickers.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

/// Compare two evaluated hands. `Greater` means `a` wins, `Equal` is a
/// split.
///
/// ```
/// use std::cmp::Ordering;
/// use poker_showdown::core::{compare, EvaluatedHand, HandCategory, Value};
///
/// let quads = EvaluatedHand::new(HandCategory::FourOfAKind, vec![Value::Seven, Value::Two]);
/// let boat = EvaluatedHand::new(HandCategory::FullHouse, vec![Value::King, Value::Two]);
///
/// assert_eq!(Ordering::Greater, compare(&quads, &boat));
/// ```
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.kickers.cmp(&b.kickers))
}

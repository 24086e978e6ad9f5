use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::PokerError;

/// Card rank or value.
/// The discriminant is the face value, with the Ace high at 14.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Convert a face value in `2..=14` into a `Value`.
    ///
    /// ```
    /// use poker_showdown::core::Value;
    ///
    /// assert_eq!(Some(Value::Jack), Value::from_rank(11));
    /// assert_eq!(None, Value::from_rank(1));
    /// ```
    pub fn from_rank(rank: u8) -> Option<Value> {
        match rank {
            2..=14 => Some(VALUES[usize::from(rank - 2)]),
            _ => None,
        }
    }

    /// The face value, 2 through 14.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }

    /// Long english name, e.g. `"Queen"` or `"7"`.
    pub fn name(self) -> String {
        match self {
            Value::Ace => "Ace".to_string(),
            Value::King => "King".to_string(),
            Value::Queen => "Queen".to_string(),
            Value::Jack => "Jack".to_string(),
            v => v.rank().to_string(),
        }
    }
}

impl TryFrom<u8> for Value {
    type Error = PokerError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Value::from_rank(rank).ok_or(PokerError::InvalidRank(rank))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow grouping cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Diamonds
    Diamond = 0,
    /// Clubs
    Club = 1,
    /// Spades
    Spade = 2,
    /// Hearts
    Heart = 3,
}

/// All of the `Suit`'s in the order a fresh deck is built.
const SUITS: [Suit; 4] = [Suit::Heart, Suit::Spade, Suit::Club, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }

    /// Plural english name, e.g. `"Hearts"`.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Diamond => "Diamonds",
            Suit::Spade => "Spades",
            Suit::Heart => "Hearts",
            Suit::Club => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards are compared by value alone: an Ace of Hearts and an Ace of
/// Spades are equal and neither one is greater. Use `identity` when the
/// physical card matters.
///
/// ```
/// use poker_showdown::core::{Card, Suit, Value};
///
/// let hearts = Card::new(Value::Ace, Suit::Heart);
/// let spades = Card::new(Value::Ace, Suit::Spade);
///
/// assert_eq!(hearts, spades);
/// assert_ne!(hearts.identity(), spades.identity());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    value: Value,
    suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// The face value of this card.
    pub fn value(&self) -> Value {
        self.value
    }

    /// The face value as an integer from 2 to 14.
    pub fn rank(&self) -> u8 {
        self.value.rank()
    }

    /// The suit of this card.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Both halves of the card. Two cards with the same identity are the
    /// same physical card.
    pub fn identity(&self) -> (Value, Suit) {
        (self.value, self.suit)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// `Ah`, `Td`, `7c`. The alternate form spells it out: `Ace of Hearts`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} of {}", self.value.name(), self.suit.name())
        } else {
            write!(f, "{}{}", self.value, self.suit)
        }
    }
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(PokerError::UnexpectedValueChar)?;
        let suit = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .map(Suit::from_char)?
            .ok_or(PokerError::UnexpectedSuitChar)?;

        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Ok(Card::new(value, suit))
    }
}

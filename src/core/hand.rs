use std::ops::Index;
use std::slice::Iter;

use super::{Card, EvaluatedHand, PokerError, Rankable, Suit, Value};

/// An ordered collection of cards held by one owner, either a player's
/// hole cards or the table.
///
/// No uniqueness checks are done when cards are added.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_showdown::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(7),
        }
    }

    /// Parse a hand from pairs of value and suit chars.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_showdown::core::{Hand, PokerError};
    ///
    /// let hand = Hand::new_from_str("AsKd").unwrap();
    /// assert_eq!(2, hand.len());
    ///
    /// assert!(matches!(
    ///     Hand::new_from_str("AsAs"),
    ///     Err(PokerError::DuplicateCardInHand(_))
    /// ));
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerError> {
        let mut chars = hand_string.chars();
        let mut cards: Vec<Card> = Vec::new();

        // Keep looping until we explicitly break
        loop {
            let vco = chars.next();
            if vco.is_none() {
                break;
            } else {
                let sco = chars.next();
                let v = vco
                    .and_then(Value::from_char)
                    .ok_or(PokerError::UnexpectedValueChar)?;
                let s = sco
                    .ok_or(PokerError::TooFewChars)
                    .map(Suit::from_char)?
                    .ok_or(PokerError::UnexpectedSuitChar)?;

                let c = Card::new(v, s);

                if cards.iter().any(|h| h.identity() == c.identity()) {
                    return Err(PokerError::DuplicateCardInHand(c));
                }
                cards.push(c);
            }
        }

        Ok(Self { cards })
    }

    /// Add card at to the hand.
    /// No verification is done at all.
    pub fn add(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Remove the cards at the given positions.
    ///
    /// Positions are removed highest first so the lower ones stay valid.
    /// Repeated positions only remove once. The removed cards are
    /// returned in that same order. If any position is out of range
    /// the hand is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_showdown::core::{Hand, Suit, Value};
    ///
    /// let mut hand = Hand::new_from_str("2c3c4c5c").unwrap();
    /// let removed = hand.remove(&[0, 2]).unwrap();
    ///
    /// assert_eq!("4c2c", removed.iter().map(|c| c.to_string()).collect::<String>());
    /// let remaining: Vec<_> = hand.iter().map(|c| c.identity()).collect();
    /// assert_eq!(
    ///     vec![(Value::Three, Suit::Club), (Value::Five, Suit::Club)],
    ///     remaining
    /// );
    /// ```
    pub fn remove(&mut self, indices: &[usize]) -> Result<Vec<Card>, PokerError> {
        let len = self.cards.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(PokerError::HandIndexOutOfRange { index, len });
        }

        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        Ok(sorted.into_iter().map(|i| self.cards.remove(i)).collect())
    }

    /// Order the cards highest value first.
    /// Cards of the same value keep the order they were added in.
    pub fn sort(&mut self) {
        self.cards.sort_by(|a, b| b.cmp(a));
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Find the best poker hand using these cards together with the
    /// cards on the table.
    ///
    /// ```
    /// use poker_showdown::core::{Hand, HandCategory, Value};
    ///
    /// let hole = Hand::new_from_str("9h9s").unwrap();
    /// let table = Hand::new_from_str("2c2dKc4d7s").unwrap();
    /// let best = hole.best_poker_hand(&table).unwrap();
    ///
    /// assert_eq!(HandCategory::TwoPair, best.category);
    /// assert_eq!(vec![Value::Nine, Value::Two, Value::King], best.kickers);
    /// ```
    pub fn best_poker_hand(&self, table: &Hand) -> Result<EvaluatedHand, PokerError> {
        let mut all = Vec::with_capacity(self.len() + table.len());
        all.extend_from_slice(&self.cards);
        all.extend_from_slice(&table.cards);
        all.evaluate()
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HandCategory;

    fn identities(hand: &Hand) -> Vec<(Value, Suit)> {
        hand.iter().map(Card::identity).collect()
    }

    #[test]
    fn test_add_card() {
        let mut h = Hand::new();
        h.add(Card::new(Value::Three, Suit::Spade));
        // Make sure that the card was added to the vec.
        assert_eq!(1, h.len());
        assert_eq!((Value::Three, Suit::Spade), h[0].identity());
    }

    #[test]
    fn test_add_does_not_dedupe() {
        let mut h = Hand::new();
        let c = Card::new(Value::Ace, Suit::Club);
        h.add(c);
        h.add(c);
        assert_eq!(2, h.len());
    }

    #[test]
    fn test_remove_descending() {
        let mut h = Hand::new_from_str("2c3c4c5c6c").unwrap();
        let removed = h.remove(&[1, 4, 3, 1]).unwrap();

        assert_eq!(
            vec![
                (Value::Six, Suit::Club),
                (Value::Five, Suit::Club),
                (Value::Three, Suit::Club)
            ],
            removed.iter().map(Card::identity).collect::<Vec<_>>()
        );
        assert_eq!(
            vec![(Value::Two, Suit::Club), (Value::Four, Suit::Club)],
            identities(&h)
        );
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut h = Hand::new_from_str("2c3c").unwrap();
        assert_eq!(
            Err(PokerError::HandIndexOutOfRange { index: 2, len: 2 }),
            h.remove(&[0, 2])
        );
        // Nothing is removed when any index is bad.
        assert_eq!(2, h.len());
    }

    #[test]
    fn test_remove_keeps_suits() {
        // Equal values in different suits; only the exact cards go.
        let mut h = Hand::new_from_str("3d3c5h5s").unwrap();
        h.remove(&[0, 3]).unwrap();
        assert_eq!(
            vec![(Value::Three, Suit::Club), (Value::Five, Suit::Heart)],
            identities(&h)
        );
        assert_ne!(
            identities(&Hand::new_from_str("3d5s").unwrap()),
            identities(&h)
        );
    }

    #[test]
    fn test_sort_descending_stable() {
        let mut h = Hand::new_from_str("5hAs5cKd2s").unwrap();
        h.sort();
        assert_eq!(
            vec![
                (Value::Ace, Suit::Spade),
                (Value::King, Suit::Diamond),
                (Value::Five, Suit::Heart),
                (Value::Five, Suit::Club),
                (Value::Two, Suit::Spade),
            ],
            identities(&h)
        );
    }

    #[test]
    fn test_clear() {
        let mut hand = Hand::new_from_str("AcKc").unwrap();
        assert!(!hand.is_empty());
        hand.clear();
        assert!(hand.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Err(PokerError::UnexpectedValueChar),
            Hand::new_from_str("Xs")
        );
        assert_eq!(
            Err(PokerError::UnexpectedSuitChar),
            Hand::new_from_str("AsKx")
        );
        assert_eq!(Err(PokerError::TooFewChars), Hand::new_from_str("AsK"));
        assert!(matches!(
            Hand::new_from_str("AsKdAs"),
            Err(PokerError::DuplicateCardInHand(c)) if c.identity() == (Value::Ace, Suit::Spade)
        ));
    }

    #[test]
    fn test_extend() {
        let mut hand = Hand::new_from_str("AcKc").unwrap();
        hand.extend(Hand::new_from_str("2d3d").unwrap().iter().copied());
        assert_eq!(4, hand.len());
    }

    #[test]
    fn test_best_poker_hand_uses_table() {
        let hole = Hand::new_from_str("AhKh").unwrap();
        let table = Hand::new_from_str("QhJhTh2c3d").unwrap();
        let best = hole.best_poker_hand(&table).unwrap();
        assert_eq!(HandCategory::StraightFlush, best.category);
        assert_eq!(vec![Value::Ace], best.kickers);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_transparent() {
        let hand = Hand::new_from_str("AsTd").unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(
            r#"[{"value":"Ace","suit":"Spade"},{"value":"Ten","suit":"Diamond"}]"#,
            json
        );
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(identities(&hand), identities(&back));
    }

    #[test]
    fn test_best_poker_hand_too_few() {
        let hole = Hand::new_from_str("AhKh").unwrap();
        let table = Hand::new_from_str("Qh").unwrap();
        assert_eq!(Err(PokerError::TooFewCards(3)), hole.best_poker_hand(&table));
    }
}

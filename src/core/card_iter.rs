use super::Card;

/// Iterator over every `num_cards` sized combination of some cards.
///
/// Combinations come out in index order, so `[a, b, c]` taken two at a
/// time gives `[a, b]`, `[a, c]`, `[b, c]`.
///
/// ```
/// use poker_showdown::core::{CardIter, Hand};
///
/// let hand = Hand::new_from_str("AsKsQsJsTs9s8s").unwrap();
/// assert_eq!(21, CardIter::new(hand.as_slice(), 5).count());
/// ```
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be chosen
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // Set once every combination has been handed out.
    done: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> CardIter<'a> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            done: num_cards > possible_cards.len(),
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }

        let result_cards: Vec<Card> = self.idx.iter().map(|&i| self.possible_cards[i]).collect();

        // Find the right most offset that can still move forward. Offset
        // `level` can go as far as leaving room for every later offset.
        let num_cards = self.idx.len();
        let total = self.possible_cards.len();
        match (0..num_cards)
            .rev()
            .find(|&level| self.idx[level] < total - num_cards + level)
        {
            Some(level) => {
                self.idx[level] += 1;
                for after in (level + 1)..num_cards {
                    self.idx[after] = self.idx[after - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result_cards)
    }
}

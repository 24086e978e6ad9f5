use tracing::event;

use crate::core::{EvaluatedHand, Hand, PokerError};

/// Evaluate every player's hole cards together with the shared board.
///
/// The results line up with `hole_cards`. The first player without
/// enough cards to make a hand stops the whole evaluation.
///
/// ```
/// use poker_showdown::core::{Hand, HandCategory};
/// use poker_showdown::holdem::evaluate_players;
///
/// let players = vec![
///     Hand::new_from_str("AhAd").unwrap(),
///     Hand::new_from_str("7c2s").unwrap(),
/// ];
/// let board = Hand::new_from_str("AsKd9c4h3s").unwrap();
///
/// let hands = evaluate_players(&players, &board).unwrap();
/// assert_eq!(HandCategory::ThreeOfAKind, hands[0].category);
/// assert_eq!(HandCategory::HighCard, hands[1].category);
/// ```
pub fn evaluate_players(
    hole_cards: &[Hand],
    board: &Hand,
) -> Result<Vec<EvaluatedHand>, PokerError> {
    hole_cards
        .iter()
        .map(|hole| hole.best_poker_hand(board))
        .collect()
}

/// Find the index of every hand that is tied for best.
///
/// More than one index means the pot is split. No hands means no
/// winners.
///
/// ```
/// use poker_showdown::core::{EvaluatedHand, HandCategory, Value};
/// use poker_showdown::holdem::winners;
///
/// let straight = EvaluatedHand::new(HandCategory::Straight, vec![Value::Nine]);
/// let pair = EvaluatedHand::new(
///     HandCategory::OnePair,
///     vec![Value::Ace, Value::King, Value::Queen, Value::Jack],
/// );
///
/// assert_eq!(vec![0, 2], winners(&[straight.clone(), pair, straight]));
/// ```
pub fn winners(hands: &[EvaluatedHand]) -> Vec<usize> {
    let Some(best) = hands.iter().max() else {
        return vec![];
    };
    let winning: Vec<usize> = hands
        .iter()
        .enumerate()
        .filter(|(_, hand)| *hand == best)
        .map(|(idx, _)| idx)
        .collect();

    event!(
        tracing::Level::DEBUG,
        ?winning,
        best = %best,
        "Showdown decided"
    );
    winning
}

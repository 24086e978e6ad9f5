/// Evaluating every player at showdown and picking the winners.
mod showdown;
/// Export the showdown helpers.
pub use self::showdown::{evaluate_players, winners};

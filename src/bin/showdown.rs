extern crate poker_showdown;

use clap::Parser;
use poker_showdown::core::{Deck, Hand};
use poker_showdown::holdem::{evaluate_players, winners};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "showdown")]
#[command(about = "Deal a random hold'em hand and show who wins at showdown")]
struct Cli {
    /// Number of players at the table
    #[arg(default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
}

fn main() {
    let cli = Cli::parse();
    let num_players = usize::from(cli.players);

    let mut deck = Deck::new();
    deck.shuffle();

    let mut players = vec![Hand::new(); num_players];
    for _ in 0..2 {
        for p in players.iter_mut() {
            p.add(deck.draw().expect("a fresh deck has enough cards for the hole cards"));
        }
    }

    let mut board = Hand::new();
    // Flop, turn, river.
    for street in [3, 1, 1] {
        let _burn = deck.draw().expect("a fresh deck has enough cards to burn");
        board.extend(
            deck.draw_many(street)
                .expect("a fresh deck has enough cards for the board"),
        );
    }

    let evaluated = evaluate_players(&players, &board).expect("every player holds 7 cards");

    println!("Board: {}", cards_to_string(&board));
    for (idx, (hole, best)) in players.iter().zip(&evaluated).enumerate() {
        println!("Player {idx}: {} => {best}", cards_to_string(hole));
    }

    let won = winners(&evaluated);
    if won.len() == 1 {
        println!("Player {} wins", won[0]);
    } else {
        println!("Split pot between players {won:?}");
    }
}

fn cards_to_string(hand: &Hand) -> String {
    hand.iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_players_default_and_range() {
        assert_eq!(2, Cli::try_parse_from(["showdown"]).unwrap().players);
        assert_eq!(10, Cli::try_parse_from(["showdown", "10"]).unwrap().players);
        assert!(Cli::try_parse_from(["showdown", "1"]).is_err());
        assert!(Cli::try_parse_from(["showdown", "11"]).is_err());
        assert!(Cli::try_parse_from(["showdown", "x"]).is_err());
    }
}

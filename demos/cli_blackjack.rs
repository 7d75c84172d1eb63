//! Terminal blackjack table.
//!
//! Implements the engine's input and display ports over stdin/stdout.

use core::ops::RangeInclusive;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Action, Card, Game, Prompter, Renderer, RoundOutcome, SeatView, Suit};

fn main() {
    println!("Blackjack (enter 'q' at any action prompt to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut keyboard = Keyboard;
    let mut screen = Screen;

    let sets = keyboard.number("\nHow many decks should be included for this game?", 1..=1000);
    let players = keyboard.number("How many players? [1 to 4]", 1..=4);

    let mut game = Game::new(sets as usize, seed);

    let mut seated = 0;
    while seated < players {
        println!("\nPlease enter the name of player {}", seated + 1);
        let name = read_line();
        match game.join(&name) {
            Ok(()) => seated += 1,
            Err(err) => println!("\n{err}, please try another name."),
        }
    }

    match game.play(&mut keyboard, &mut screen) {
        Ok(()) => println!("\nThanks for playing."),
        Err(err) => println!("\nGame over: {err}."),
    }
}

struct Keyboard;

impl Prompter for Keyboard {
    fn action(&mut self, player: &str) -> Action {
        println!("\n{player}: 1: (H)it  2: (S)tand  3: (Q)uit");
        Action::parse(&read_line())
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        loop {
            println!("\n{prompt}");
            println!("1: (Y)es\n2: (N)o");
            let input = read_line();
            if input == "1" || is_prefix(&input, "yes") {
                return true;
            }
            if input == "2" || is_prefix(&input, "no") {
                return false;
            }
            println!("\nPlease enter yes/y, no/n, or 1 or 2.");
        }
    }

    fn number(&mut self, prompt: &str, bounds: RangeInclusive<u32>) -> u32 {
        loop {
            println!("{prompt}");
            match read_line().parse::<u32>() {
                Ok(n) if bounds.contains(&n) => return n,
                _ => println!("Invalid input. Please try again."),
            }
        }
    }
}

struct Screen;

impl Renderer for Screen {
    fn table(&mut self, seats: &[SeatView]) {
        println!();
        for seat in seats {
            let cards = seat
                .cards
                .iter()
                .map(|token| format_token(token))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{:>11}: {cards} ({})", seat.name, seat.value);
        }
        println!("{}", colorize("DEALER MUST HIT SOFT 17", "90"));
    }

    fn drawn(&mut self, player: &str, card: Card) {
        println!("{player} draws {}", card.full_text());
    }

    fn outcome(&mut self, outcome: &RoundOutcome) {
        println!("\n{outcome}");
    }
}

fn is_prefix(input: &str, word: &str) -> bool {
    !input.is_empty() && input.len() <= word.len() && word[..input.len()].eq_ignore_ascii_case(input)
}

/// Reads one trimmed line; a closed stdin quits the program.
fn read_line() -> String {
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => {
            println!("\nGoodbye.");
            std::process::exit(0);
        }
        Ok(_) => input.trim().to_string(),
    }
}

fn format_token(token: &str) -> String {
    token
        .parse::<Card>()
        .map_or_else(|_| token.to_string(), format_card)
}

fn format_card(card: Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.pretty(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

//! Engine integration tests: roster, turns, dealer play, and sessions.

use core::ops::RangeInclusive;

use twentyone::{
    Action, Card, Deck, DeckError, Game, JoinError, Prompter, Renderer, RoundOutcome, RoundSignal,
    SeatView, smart_value,
};

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

/// Scripted input port. Runs through the queued answers, then falls back
/// to the defaults (quit, decline) so a test can never hang.
struct Script {
    actions: Vec<Action>,
    next_action: usize,
    default_action: Action,
    confirms: Vec<bool>,
    next_confirm: usize,
    default_confirm: bool,
    prompted: Vec<String>,
    confirms_asked: usize,
}

impl Script {
    fn new(actions: &[Action], confirms: &[bool]) -> Self {
        Self {
            actions: actions.to_vec(),
            next_action: 0,
            default_action: Action::Quit,
            confirms: confirms.to_vec(),
            next_confirm: 0,
            default_confirm: false,
            prompted: Vec::new(),
            confirms_asked: 0,
        }
    }
}

impl Prompter for Script {
    fn action(&mut self, player: &str) -> Action {
        self.prompted.push(player.to_string());
        let action = self
            .actions
            .get(self.next_action)
            .copied()
            .unwrap_or(self.default_action);
        self.next_action += 1;
        action
    }

    fn confirm(&mut self, _prompt: &str) -> bool {
        self.confirms_asked += 1;
        let answer = self
            .confirms
            .get(self.next_confirm)
            .copied()
            .unwrap_or(self.default_confirm);
        self.next_confirm += 1;
        answer
    }

    fn number(&mut self, _prompt: &str, bounds: RangeInclusive<u32>) -> u32 {
        *bounds.start()
    }
}

/// Recording display port.
#[derive(Default)]
struct Recorder {
    tables: Vec<Vec<SeatView>>,
    drawn: Vec<(String, Card)>,
    outcomes: Vec<RoundOutcome>,
}

impl Renderer for Recorder {
    fn table(&mut self, seats: &[SeatView]) {
        self.tables.push(seats.to_vec());
    }

    fn drawn(&mut self, player: &str, card: Card) {
        self.drawn.push((player.to_string(), card));
    }

    fn outcome(&mut self, outcome: &RoundOutcome) {
        self.outcomes.push(outcome.clone());
    }
}

/// Pushes cards into a seat's hand directly.
fn give(game: &mut Game, seat: usize, tokens: &[&str]) {
    for token in tokens {
        game.roster.get_mut(seat).unwrap().hand_mut().push(card(token));
    }
}

/// Replaces the master deck so the listed cards are drawn first-to-last.
fn stack_deck(game: &mut Game, draws: &[&str]) {
    let mut deck = Deck::default();
    for token in draws.iter().rev() {
        deck.push(card(token));
    }
    game.deck = deck;
}

/// An empty-deck game with the given players seated, ready for hand
/// stacking.
fn stacked_game(names: &[&str]) -> Game {
    let mut game = Game::new(0, 1);
    for name in names {
        game.join(name).unwrap();
    }
    game
}

#[test]
fn join_validates_names() {
    let mut game = Game::new(1, 1);

    game.join("Alice").unwrap();
    assert_eq!(game.join("alice").unwrap_err(), JoinError::DuplicateName);
    assert_eq!(game.join("dealer").unwrap_err(), JoinError::DuplicateName);
    assert_eq!(game.join("").unwrap_err(), JoinError::EmptyName);
    assert_eq!(
        game.join("Bartholomew1").unwrap_err(),
        JoinError::NameTooLong
    );
    game.join("Bartholomew").unwrap();

    // Dealer first, then join order.
    let names: Vec<&str> = game.roster.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Dealer", "Alice", "Bartholomew"]);
    assert!(game.roster.dealer().is_dealer());
    assert_eq!(game.roster.humans().count(), 2);
}

#[test]
fn begin_round_deals_two_per_seat_and_conserves_cards() {
    let mut game = Game::new(2, 9);
    game.join("Ann").unwrap();
    game.join("Ben").unwrap();

    for _ in 0..2 {
        game.begin_round().unwrap();
        for player in game.roster.iter() {
            assert_eq!(player.hand().len(), 2);
            assert!(!player.is_standing());
        }
        assert_eq!(game.deck.len(), 104 - 6);
        assert_eq!(game.card_count(), 104);
    }
}

#[test]
fn begin_round_surfaces_empty_deck() {
    let mut game = Game::new(0, 1);
    game.join("Alice").unwrap();

    assert_eq!(
        game.begin_round().unwrap_err(),
        DeckError::EmptyDeck {
            requested: 2,
            available: 0,
        }
    );
}

#[test]
fn hit_draws_until_twenty_one_then_stops_prompting() {
    let mut game = stacked_game(&["Alice"]);
    give(&mut game, 0, &["10-C", "9-D"]);
    give(&mut game, 1, &["10-H", "6-H"]);
    stack_deck(&mut game, &["5-S"]);

    let mut script = Script::new(&[Action::Hit], &[]);
    let mut recorder = Recorder::default();

    let signal = game.run_turns(&mut script, &mut recorder).unwrap();

    assert_eq!(signal, RoundSignal::Completed);
    let alice = game.roster.get(1).unwrap();
    assert_eq!(alice.hand().len(), 3);
    assert_eq!(smart_value(alice.hand().cards()), 21);
    assert_eq!(recorder.drawn, vec![("Alice".to_string(), card("5-S"))]);
    // The dealer stood automatically; Alice was only prompted once.
    assert!(game.roster.dealer().is_standing());
    assert_eq!(script.prompted, vec!["Alice"]);
}

#[test]
fn invalid_actions_resolicit_without_a_transition() {
    let mut game = stacked_game(&["Alice"]);
    give(&mut game, 0, &["10-C", "9-D"]);
    give(&mut game, 1, &["10-H", "6-H"]);

    let mut script = Script::new(&[Action::Invalid, Action::Invalid, Action::Stand], &[]);
    let mut recorder = Recorder::default();

    let signal = game.run_turns(&mut script, &mut recorder).unwrap();

    assert_eq!(signal, RoundSignal::Completed);
    let alice = game.roster.get(1).unwrap();
    assert_eq!(alice.hand().len(), 2);
    assert!(alice.is_standing());
    // The table is redrawn for every solicitation.
    assert_eq!(recorder.tables.len(), 3);
    assert_eq!(script.prompted.len(), 3);
}

#[test]
fn quit_aborts_the_round_for_everyone() {
    let mut game = stacked_game(&["Alice", "Ben"]);
    give(&mut game, 0, &["10-C", "9-D"]);
    give(&mut game, 1, &["10-H", "6-H"]);
    give(&mut game, 2, &["10-S", "6-S"]);

    let mut script = Script::new(&[Action::Quit], &[]);
    let mut recorder = Recorder::default();

    let signal = game.run_turns(&mut script, &mut recorder).unwrap();

    assert_eq!(signal, RoundSignal::PlayerQuit);
    // Ben never got a turn.
    assert_eq!(script.prompted, vec!["Alice"]);
}

#[test]
fn dealer_twenty_one_short_circuits_the_round() {
    let mut game = stacked_game(&["Alice"]);
    give(&mut game, 0, &["A-S", "K-S"]);
    give(&mut game, 1, &["10-H", "6-H"]);

    let mut script = Script::new(&[Action::Hit, Action::Hit], &[]);
    let mut recorder = Recorder::default();

    let signal = game.run_turns(&mut script, &mut recorder).unwrap();

    assert_eq!(signal, RoundSignal::DealerBlackjack);
    assert!(script.prompted.is_empty());
    assert_eq!(game.roster.get(1).unwrap().hand().len(), 2);
}

#[test]
fn human_twenty_one_on_the_deal_does_not_short_circuit() {
    let mut game = stacked_game(&["Alice"]);
    give(&mut game, 0, &["10-C", "9-C"]);
    give(&mut game, 1, &["A-H", "K-H"]);

    let mut script = Script::new(&[], &[]);
    let mut recorder = Recorder::default();

    let signal = game.run_turns(&mut script, &mut recorder).unwrap();

    // The round runs through the normal flow; at 21 Alice is simply never
    // prompted.
    assert_eq!(signal, RoundSignal::Completed);
    assert!(script.prompted.is_empty());

    game.dealer_play(&mut recorder).unwrap();
    assert_eq!(game.roster.dealer().hand().len(), 2);

    assert_eq!(
        game.resolve_round(),
        RoundOutcome::Win {
            name: "Alice".into(),
            value: 21,
        }
    );
}

#[test]
fn dealer_draws_up_to_seventeen() {
    let mut game = stacked_game(&["Alice"]);
    give(&mut game, 0, &["2-C", "2-D"]);
    give(&mut game, 1, &["10-H", "8-H"]);
    stack_deck(&mut game, &["10-S", "5-C", "9-D"]);

    let mut recorder = Recorder::default();
    game.dealer_play(&mut recorder).unwrap();

    // 4 -> 14 -> 19, then stop; the 9-D stays in the deck.
    assert_eq!(smart_value(game.roster.dealer().hand().cards()), 19);
    assert_eq!(
        recorder.drawn,
        vec![
            ("Dealer".to_string(), card("10-S")),
            ("Dealer".to_string(), card("5-C")),
        ]
    );
    assert_eq!(game.deck.len(), 1);
}

#[test]
fn dealer_does_not_draw_when_every_human_busted() {
    let mut game = stacked_game(&["Alice"]);
    give(&mut game, 0, &["2-C", "2-D"]);
    give(&mut game, 1, &["10-H", "9-H", "5-H"]);
    stack_deck(&mut game, &["K-S"]);

    let mut recorder = Recorder::default();
    game.dealer_play(&mut recorder).unwrap();

    assert_eq!(game.roster.dealer().hand().len(), 2);
    assert!(recorder.drawn.is_empty());
    assert_eq!(game.deck.len(), 1);
}

#[test]
fn empty_deck_during_play_is_an_error() {
    let mut game = stacked_game(&["Alice"]);
    give(&mut game, 0, &["10-C", "9-D"]);
    give(&mut game, 1, &["2-H", "3-H"]);

    let mut script = Script::new(&[Action::Hit], &[]);
    let mut recorder = Recorder::default();
    assert_eq!(
        game.run_turns(&mut script, &mut recorder).unwrap_err(),
        DeckError::EmptyDeck {
            requested: 1,
            available: 0,
        }
    );

    // Same for a mandatory dealer draw.
    let mut game = stacked_game(&["Alice"]);
    give(&mut game, 0, &["2-C", "2-D"]);
    give(&mut game, 1, &["10-H", "8-H"]);
    let mut recorder = Recorder::default();
    assert!(game.dealer_play(&mut recorder).is_err());
}

#[test]
fn card_count_is_conserved_through_the_turn_phase() {
    let mut game = stacked_game(&["Alice"]);
    give(&mut game, 0, &["10-C", "9-D"]);
    give(&mut game, 1, &["2-H", "3-H"]);
    stack_deck(&mut game, &["4-S", "5-S", "6-S"]);

    let before = game.card_count();

    let mut script = Script::new(&[Action::Hit, Action::Hit, Action::Stand], &[]);
    let mut recorder = Recorder::default();
    game.run_turns(&mut script, &mut recorder).unwrap();

    assert_eq!(game.card_count(), before);
}

#[test]
fn seat_views_mask_only_the_hidden_dealer() {
    let mut game = stacked_game(&["Alice"]);
    give(&mut game, 0, &["A-S", "K-D"]);
    give(&mut game, 1, &["10-H", "6-S"]);

    let masked = game.seat_views(true);
    assert_eq!(masked[0].name, "Dealer");
    assert_eq!(masked[0].cards, vec!["??".to_string(), "K-D".to_string()]);
    assert_eq!(masked[0].value, "??");
    assert_eq!(masked[1].cards, vec!["10-H".to_string(), "6-S".to_string()]);
    assert_eq!(masked[1].value, "16");

    let revealed = game.seat_views(false);
    assert_eq!(
        revealed[0].cards,
        vec!["A-S".to_string(), "K-D".to_string()]
    );
    assert_eq!(revealed[0].value, "BLACKJACK");
}

#[test]
fn two_way_draw_with_a_busted_dealer() {
    let mut game = stacked_game(&["Ann", "Ben"]);
    give(&mut game, 0, &["10-C", "9-C", "4-C"]);
    give(&mut game, 1, &["10-H", "K-H"]);
    give(&mut game, 2, &["10-S", "Q-S"]);

    assert_eq!(
        game.resolve_round(),
        RoundOutcome::Draw {
            names: vec!["Ann".into(), "Ben".into()],
            value: 20,
        }
    );
}

#[test]
fn session_plays_a_round_then_stops_on_decline() {
    let mut game = Game::new(1, 3);
    game.join("Alice").unwrap();

    // Stand on everything, decline the rematch.
    let mut script = Script::new(&[Action::Stand; 8], &[false]);
    let mut recorder = Recorder::default();

    game.play(&mut script, &mut recorder).unwrap();

    assert_eq!(recorder.outcomes.len(), 1);
    assert_eq!(script.confirms_asked, 1);
    assert!(!recorder.tables.is_empty());
    // The final table is rendered with the dealer revealed.
    let last = recorder.tables.last().unwrap();
    assert_ne!(last[0].value, "??");
    assert_eq!(game.card_count(), 52);
}

#[test]
fn session_ends_on_quit_with_no_outcome_for_that_round() {
    let mut game = Game::new(1, 5);
    game.join("Alice").unwrap();

    // Always quit when asked to act, always accept a rematch: the session
    // can only end through the quit path.
    let mut script = Script::new(&[], &[]);
    script.default_confirm = true;
    let mut recorder = Recorder::default();

    game.play(&mut script, &mut recorder).unwrap();

    assert!(!script.prompted.is_empty());
    // Rounds cut short by a dealer blackjack still resolve; the quit
    // round reports nothing.
    assert_eq!(recorder.outcomes.len(), script.confirms_asked);
}

#[test]
fn session_surfaces_a_deck_too_small_to_deal() {
    let mut game = Game::new(0, 2);
    game.join("Alice").unwrap();

    let mut script = Script::new(&[], &[]);
    let mut recorder = Recorder::default();

    assert!(game.play(&mut script, &mut recorder).is_err());
    assert!(recorder.outcomes.is_empty());
}

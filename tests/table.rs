//! Table driver tests against a scripted console.

use blackjack::{
    Card, Console, Deck, GameOptions, Outcome, Rank, RoundError, SessionSummary, Settlement, Suit,
    Table,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[derive(Debug, Default)]
struct ScriptedConsole {
    /// Answers to "Hit?", consumed front to back.
    answers: Vec<bool>,
    /// Answers to "Play again?", consumed front to back.
    replays: Vec<bool>,
    questions: Vec<String>,
    lines: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    fn answering(answers: &[bool]) -> Self {
        let mut answers = answers.to_vec();
        answers.reverse();
        Self {
            answers,
            ..Self::default()
        }
    }

    fn replaying(mut self, replays: &[bool]) -> Self {
        self.replays = replays.iter().rev().copied().collect();
        self
    }

    fn count(&self, question: &str) -> usize {
        self.questions.iter().filter(|q| *q == question).count()
    }
}

impl Console for ScriptedConsole {
    fn ask_yes_no(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        let script = if message == "Play again?" {
            &mut self.replays
        } else {
            &mut self.answers
        };
        script.pop().unwrap_or(false)
    }

    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

#[test]
fn renders_opening_table() {
    let mut table = Table::new(GameOptions::default(), 1, ScriptedConsole::answering(&[]));
    let deck = Deck::stacked(&[
        card(Rank::King, Suit::Spades),    // dealer
        card(Rank::Eight, Suit::Diamonds), // dealer
        card(Rank::King, Suit::Hearts),    // player
        card(Rank::Queen, Suit::Clubs),    // player
    ]);

    let result = table.play_round_with_deck(deck).unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);

    let console = table.into_console();
    assert_eq!(
        console.lines,
        vec![
            "♣♥♦♠ BLACKJACK ♠♦♥♣",
            "===================",
            "",
            "DEALER'S HAND",
            "K♠ 8♦",
            "Value: 18",
            "",
            "PLAYER'S HAND",
            "K♥ Q♣",
            "Value: 20",
            "",
            "PLAYER WINS!",
        ]
    );
    assert_eq!(console.clears, 1);
    assert_eq!(console.count("Hit?"), 1);
}

#[test]
fn bust_is_announced() {
    let mut table = Table::new(
        GameOptions::default(),
        1,
        ScriptedConsole::answering(&[true]),
    );
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Spades),   // dealer
        card(Rank::Seven, Suit::Clubs),  // dealer
        card(Rank::Ten, Suit::Hearts),   // player
        card(Rank::Two, Suit::Diamonds), // player
        card(Rank::King, Suit::Spades),  // player hit
    ]);

    let result = table.play_round_with_deck(deck).unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.settlement, Settlement::PlayerBust);

    let console = table.into_console();
    let tail = &console.lines[console.lines.len() - 2..];
    assert_eq!(tail, ["PLAYER BUSTS!", "DEALER WINS!"]);
    assert!(console.lines.contains(&"10♥ 2♦ K♠".to_string()));
    assert!(console.lines.contains(&"Value: 22".to_string()));
}

#[test]
fn no_hit_offered_after_reaching_twenty_one() {
    let mut table = Table::new(
        GameOptions::default(),
        1,
        ScriptedConsole::answering(&[true, true, true]),
    );
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Spades),   // dealer
        card(Rank::Eight, Suit::Clubs),  // dealer
        card(Rank::Five, Suit::Hearts),  // player
        card(Rank::Six, Suit::Diamonds), // player
        card(Rank::King, Suit::Spades),  // player hit
        card(Rank::Two, Suit::Clubs),    // untouched
    ]);

    let result = table.play_round_with_deck(deck).unwrap();
    assert_eq!(result.player_value, 21);
    assert_eq!(result.outcome, Outcome::PlayerWins);

    let console = table.into_console();
    assert_eq!(console.count("Hit?"), 1);
    assert_eq!(console.answers.len(), 2);
}

#[test]
fn dealer_draws_are_rendered() {
    let mut table = Table::new(GameOptions::default(), 1, ScriptedConsole::answering(&[]));
    let deck = Deck::stacked(&[
        card(Rank::Ten, Suit::Spades),    // dealer
        card(Rank::Six, Suit::Clubs),     // dealer
        card(Rank::Ten, Suit::Hearts),    // player
        card(Rank::Nine, Suit::Diamonds), // player
        card(Rank::Eight, Suit::Spades),  // dealer draw
    ]);

    let result = table.play_round_with_deck(deck).unwrap();
    assert_eq!(result.settlement, Settlement::DealerBust);

    let console = table.into_console();
    assert_eq!(console.clears, 2);
    assert!(console.lines.contains(&"10♠ 6♣ 8♠".to_string()));
    assert_eq!(
        &console.lines[console.lines.len() - 2..],
        ["DEALER BUSTS!", "PLAYER WINS!"]
    );
}

#[test]
fn run_repeats_until_declined() {
    let console = ScriptedConsole::answering(&[]).replaying(&[true, true, false]);
    let mut table = Table::new(GameOptions::default(), 9, console);

    let summary = table.run().unwrap();
    assert_eq!(summary.rounds, 3);
    assert_eq!(summary.player_wins + summary.dealer_wins + summary.draws, 3);
    assert_eq!(table.summary(), summary);

    let console = table.into_console();
    assert_eq!(console.count("Play again?"), 3);
    assert!(console.replays.is_empty());
    assert!(console.lines.iter().filter(|l| *l == "DEALER'S HAND").count() >= 3);
}

#[test]
fn same_seed_plays_the_same_session() {
    let play = |seed| {
        let mut table = Table::new(
            GameOptions::default(),
            seed,
            ScriptedConsole::answering(&[]),
        );
        table.play_round().unwrap();
        table.into_console().lines
    };
    assert_eq!(play(5), play(5));
}

#[test]
fn short_deck_surfaces_error() {
    let mut table = Table::new(GameOptions::default(), 1, ScriptedConsole::answering(&[]));
    let deck = Deck::stacked(&[card(Rank::Two, Suit::Spades)]);
    assert_eq!(
        table.play_round_with_deck(deck).unwrap_err(),
        RoundError::EmptyDeck
    );
    assert_eq!(table.summary(), SessionSummary::default());
}

#[test]
fn summary_counts_outcomes() {
    let mut summary = SessionSummary::default();
    summary.record(Outcome::PlayerWins);
    summary.record(Outcome::Draw);
    summary.record(Outcome::DealerWins);
    summary.record(Outcome::DealerWins);

    assert_eq!(
        summary,
        SessionSummary {
            rounds: 4,
            player_wins: 1,
            dealer_wins: 2,
            draws: 1,
        }
    );
}

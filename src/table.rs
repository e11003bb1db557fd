//! The outer game driver: plays rounds against a [`Console`].

use alloc::format;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::game::{Round, RoundState};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{Outcome, RoundResult, Settlement};

const BANNER: &str = "♣♥♦♠ BLACKJACK ♠♦♥♣";
const RULE: &str = "===================";

/// Running totals across the rounds played at a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played.
    pub rounds: usize,
    /// Rounds won by the player.
    pub player_wins: usize,
    /// Rounds won by the dealer.
    pub dealer_wins: usize,
    /// Rounds that ended in a draw.
    pub draws: usize,
}

impl SessionSummary {
    /// Records the outcome of one round.
    pub const fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::PlayerWins => self.player_wins += 1,
            Outcome::DealerWins => self.dealer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// A single-player table. Each round gets a fresh, shuffled deck.
#[derive(Debug)]
pub struct Table<C> {
    options: GameOptions,
    rng: ChaCha8Rng,
    console: C,
    summary: SessionSummary,
}

impl<C: Console> Table<C> {
    /// Creates a table whose shuffles are driven by `seed`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64, console: C) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            console,
            summary: SessionSummary::default(),
        }
    }

    /// Returns the totals so far.
    #[must_use]
    pub const fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Returns the console.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the table and returns the console.
    #[must_use]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays rounds until the player declines another one.
    ///
    /// # Errors
    ///
    /// Returns an error if a round cannot be completed.
    pub fn run(&mut self) -> Result<SessionSummary, RoundError> {
        loop {
            self.play_round()?;
            if !self.console.ask_yes_no("Play again?") {
                break;
            }
        }

        tracing::info!(
            rounds = self.summary.rounds,
            player_wins = self.summary.player_wins,
            dealer_wins = self.summary.dealer_wins,
            draws = self.summary.draws,
            "session over"
        );
        Ok(self.summary)
    }

    /// Plays one round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the round cannot be completed.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.play_round_with_deck(deck)
    }

    /// Plays one round dealing from `deck` as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out of cards.
    pub fn play_round_with_deck(&mut self, deck: Deck) -> Result<RoundResult, RoundError> {
        let mut round = Round::with_deck(self.options, deck);
        round.deal()?;
        self.render(&round);

        while round.can_hit() && self.console.ask_yes_no("Hit?") {
            round.hit()?;
            self.render(&round);
        }
        if round.state() == RoundState::PlayerTurn {
            round.stand()?;
        }

        if round.state() == RoundState::DealerTurn {
            let drawn = round.dealer_play()?;
            if !drawn.is_empty() {
                self.render(&round);
            }
        }

        let result = round.showdown()?;
        self.announce(&result);
        self.summary.record(result.outcome);
        Ok(result)
    }

    fn render(&mut self, round: &Round) {
        self.console.clear();
        self.console.write_line(BANNER);
        self.console.write_line(RULE);
        self.console.write_line("");
        self.write_hand("DEALER'S HAND", round.dealer(), round.dealer_value());
        self.write_hand("PLAYER'S HAND", round.player(), round.player_value());
    }

    fn write_hand(&mut self, title: &str, hand: &Player, value: u16) {
        self.console.write_line(title);
        self.console.write_line(&hand.hand_to_string());
        self.console.write_line(&format!("Value: {value}"));
        self.console.write_line("");
    }

    fn announce(&mut self, result: &RoundResult) {
        match result.settlement {
            Settlement::PlayerBust => self.console.write_line("PLAYER BUSTS!"),
            Settlement::DealerBust => self.console.write_line("DEALER BUSTS!"),
            Settlement::Compared => {}
        }
        self.console.write_line(result.outcome.message());
    }
}

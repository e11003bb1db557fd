//! Round result types for showdown.

use core::fmt;

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player wins.
    PlayerWins,
    /// The dealer wins.
    DealerWins,
    /// Neither side wins.
    Draw,
}

impl Outcome {
    /// Returns the message announced at the table.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerWins => "PLAYER WINS!",
            Self::DealerWins => "DEALER WINS!",
            Self::Draw => "IT'S A DRAW",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// How the outcome was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Settlement {
    /// The player went over 21; the dealer's hand was not compared.
    PlayerBust,
    /// The dealer went over 21; the hands were not compared.
    DealerBust,
    /// Both hands stood and their values were compared.
    Compared,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The winner of the round.
    pub outcome: Outcome,
    /// How the winner was determined.
    pub settlement: Settlement,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
}

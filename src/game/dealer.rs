use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::options::BLACKJACK;
use crate::result::{Outcome, RoundResult, Settlement};

use super::{Round, RoundState};

impl Round {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws while the hand is below `dealer_stands_at` (hits on 17
    /// and under by default). Going over 21 moves to
    /// [`RoundState::DealerBust`], otherwise the round is
    /// [`RoundState::Settled`].
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while self.dealer_value() < self.options.dealer_stands_at {
            let card = self.dealer.take_card(&mut self.deck)?;
            tracing::debug!(%card, value = self.dealer_value(), "dealer draws");
            drawn_cards.push(card);
        }

        if self.dealer_value() > BLACKJACK {
            self.transition(RoundState::DealerBust);
        } else {
            self.transition(RoundState::Settled);
        }

        Ok(drawn_cards)
    }

    /// Determines the winner of the round.
    ///
    /// A player bust loses and a dealer bust wins without comparing hands.
    /// Otherwise the higher value wins and equal values are a draw. The round
    /// ends in [`RoundState::Settled`]; calling this again returns the same
    /// result.
    ///
    /// # Errors
    ///
    /// Returns an error if neither side has busted and the dealer has not
    /// finished playing.
    pub fn showdown(&mut self) -> Result<RoundResult, RoundError> {
        if !self.state.is_finished() {
            return Err(RoundError::InvalidState);
        }

        let player_value = self.player_value();
        let dealer_value = self.dealer_value();

        let (outcome, settlement) = if player_value > BLACKJACK {
            (Outcome::DealerWins, Settlement::PlayerBust)
        } else if dealer_value > BLACKJACK {
            (Outcome::PlayerWins, Settlement::DealerBust)
        } else if player_value > dealer_value {
            (Outcome::PlayerWins, Settlement::Compared)
        } else if player_value < dealer_value {
            (Outcome::DealerWins, Settlement::Compared)
        } else {
            (Outcome::Draw, Settlement::Compared)
        };

        tracing::info!(
            ?outcome,
            ?settlement,
            player_value,
            dealer_value,
            "round settled"
        );
        if self.state != RoundState::Settled {
            self.transition(RoundState::Settled);
        }

        Ok(RoundResult {
            outcome,
            settlement,
            player_value,
            dealer_value,
        })
    }
}

use crate::card::Card;
use crate::error::RoundError;
use crate::options::BLACKJACK;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }
        Ok(())
    }

    /// Returns whether the player may still be offered a hit.
    ///
    /// Hits stop once the hand reaches the configured stop value (21 by
    /// default), even when the hand has not busted.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.state == RoundState::PlayerTurn && self.player_value() < self.options.player_stops_at
    }

    /// Player action: Hit (draw a card).
    ///
    /// Ends the player's turn when the new value reaches the stop value:
    /// over 21 moves to [`RoundState::PlayerBust`], otherwise to
    /// [`RoundState::DealerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state, the player
    /// may no longer hit, or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_player_turn()?;
        if !self.can_hit() {
            return Err(RoundError::CannotHit);
        }

        let card = self.player.take_card(&mut self.deck)?;
        let value = self.player_value();
        tracing::debug!(%card, value, "player hits");

        if value > BLACKJACK {
            self.transition(RoundState::PlayerBust);
        } else if value >= self.options.player_stops_at {
            self.transition(RoundState::DealerTurn);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// A hand over 21 moves to [`RoundState::PlayerBust`]; any other hand hands
    /// play to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_player_turn()?;

        let value = self.player_value();
        tracing::debug!(value, "player stands");

        if value > BLACKJACK {
            self.transition(RoundState::PlayerBust);
        } else {
            self.transition(RoundState::DealerTurn);
        }

        Ok(())
    }
}

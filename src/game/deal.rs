use crate::error::RoundError;

use super::{Round, RoundState};

impl Round {
    /// Deals the opening cards: two to the dealer, then two to the player.
    ///
    /// The round moves to [`RoundState::PlayerTurn`] regardless of the
    /// opening values.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealing state, or the deck runs
    /// out of cards.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Dealing {
            return Err(RoundError::InvalidState);
        }

        for _ in 0..2 {
            self.dealer.take_card(&mut self.deck)?;
        }
        for _ in 0..2 {
            self.player.take_card(&mut self.deck)?;
        }

        tracing::debug!(
            dealer = %self.dealer,
            player = %self.player,
            remaining = self.deck.len(),
            "opening cards dealt"
        );

        self.transition(RoundState::PlayerTurn);
        Ok(())
    }
}

//! Round engine and state management.

use rand::Rng;

use crate::deck::Deck;
use crate::options::GameOptions;
use crate::player::Player;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A single round of blackjack between one player and the dealer.
///
/// The round owns its deck and both hands. Drive it with [`Round::deal`],
/// then [`Round::hit`] / [`Round::stand`], [`Round::dealer_play`] and finally
/// [`Round::showdown`].
#[derive(Debug, Clone)]
pub struct Round {
    /// Round options.
    options: GameOptions,
    /// Cards not yet dealt.
    deck: Deck,
    /// The human player's hand.
    player: Player,
    /// The dealer's hand.
    dealer: Player,
    /// Current round state.
    state: RoundState,
}

impl Round {
    /// Creates a round with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{GameOptions, Round, RoundState};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let round = Round::new(GameOptions::default(), &mut rng);
    /// assert_eq!(round.state(), RoundState::Dealing);
    /// assert_eq!(round.deck().len(), 52);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::with_deck(options, deck)
    }

    /// Creates a round that deals from the given deck as-is.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            options,
            deck,
            player: Player::new(),
            dealer: Player::new(),
            state: RoundState::Dealing,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the player's hand value under the configured ace rule.
    #[must_use]
    pub fn player_value(&self) -> u16 {
        self.player.value_under(self.options.ace_rule)
    }

    /// Returns the dealer's hand value under the configured ace rule.
    #[must_use]
    pub fn dealer_value(&self) -> u16 {
        self.dealer.value_under(self.options.ace_rule)
    }

    fn transition(&mut self, next: RoundState) {
        tracing::debug!(from = ?self.state, to = ?next, "round state change");
        self.state = next;
    }
}

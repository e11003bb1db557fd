//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// The deck is ready and the opening cards have not been dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The player went over 21.
    PlayerBust,
    /// The dealer plays out their hand.
    DealerTurn,
    /// The dealer went over 21.
    DealerBust,
    /// Both hands are final and the round can be (or has been) settled.
    Settled,
}

impl RoundState {
    /// Returns whether [`Round::showdown`](super::Round::showdown) may be called.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerBust | Self::Settled)
    }
}

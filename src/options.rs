//! Game configuration options.

/// The highest hand value that does not bust.
pub const BLACKJACK: u16 = 21;

/// How aces are counted when scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AceRule {
    /// Aces always count 11.
    #[default]
    Eleven,
    /// Aces count 11, dropping to 1 one at a time while the hand would bust.
    Flexible,
}

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack::{AceRule, GameOptions};
///
/// let options = GameOptions::default()
///     .with_ace_rule(AceRule::Flexible)
///     .with_dealer_stands_at(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// How aces are counted.
    pub ace_rule: AceRule,
    /// The dealer draws while below this value.
    pub dealer_stands_at: u16,
    /// The player is no longer offered a hit once reaching this value.
    pub player_stops_at: u16,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            ace_rule: AceRule::Eleven,
            dealer_stands_at: 18,
            player_stops_at: BLACKJACK,
        }
    }
}

impl GameOptions {
    /// Sets how aces are counted.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{AceRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_ace_rule(AceRule::Flexible);
    /// assert_eq!(options.ace_rule, AceRule::Flexible);
    /// ```
    #[must_use]
    pub const fn with_ace_rule(mut self, rule: AceRule) -> Self {
        self.ace_rule = rule;
        self
    }

    /// Sets the value at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(17);
    /// assert_eq!(options.dealer_stands_at, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, value: u16) -> Self {
        self.dealer_stands_at = value;
        self
    }

    /// Sets the value at which the player stops being offered hits.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_stops_at(20);
    /// assert_eq!(options.player_stops_at, 20);
    /// ```
    #[must_use]
    pub const fn with_player_stops_at(mut self, value: u16) -> Self {
        self.player_stops_at = value;
        self
    }
}

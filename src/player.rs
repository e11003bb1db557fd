//! Hands held by the player and the dealer.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DrawError, HandError};
use crate::options::{AceRule, BLACKJACK};

fn evaluate_cards(cards: &[Card], rule: AceRule) -> u16 {
    let mut value: u16 = cards.iter().map(|c| u16::from(c.value())).sum();

    if rule == AceRule::Flexible {
        let mut aces = cards.iter().filter(|c| c.is_ace()).count();
        while value > BLACKJACK && aces > 0 {
            value -= 10;
            aces -= 1;
        }
    }

    value
}

/// A participant's hand. Used for both the player and the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Cards in draw order.
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Vec::new() }
    }

    /// Draws one card from `deck` into the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if the deck is exhausted. The hand is
    /// left unchanged.
    pub fn take_card(&mut self, deck: &mut Deck) -> Result<Card, DrawError> {
        let card = deck.draw()?;
        self.hand.push(card);
        Ok(card)
    }

    /// Returns the sum of the card values, with every ace counted as 11.
    #[must_use]
    pub fn hand_value(&self) -> u16 {
        evaluate_cards(&self.hand, AceRule::Eleven)
    }

    /// Returns the hand value under the given ace rule.
    #[must_use]
    pub fn value_under(&self, rule: AceRule) -> u16 {
        evaluate_cards(&self.hand, rule)
    }

    /// Renders the hand as space-separated cards in draw order.
    #[must_use]
    pub fn hand_to_string(&self) -> String {
        self.hand
            .iter()
            .map(alloc::string::ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the most recently drawn card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if no card has been drawn yet.
    pub fn last_card(&self) -> Result<&Card, HandError> {
        self.hand.last().ok_or(HandError::EmptyHand)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hand_to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand_of(cards: &[Card]) -> Player {
        let mut deck = Deck::stacked(cards);
        let mut player = Player::new();
        for _ in cards {
            player.take_card(&mut deck).unwrap();
        }
        player
    }

    #[test]
    fn take_card_moves_one_card() {
        let mut deck = Deck::new();
        let top = *deck.cards().last().unwrap();
        let mut player = Player::new();

        let card = player.take_card(&mut deck).unwrap();

        assert_eq!(card, top);
        assert_eq!(player.len(), 1);
        assert_eq!(deck.len(), 51);
        assert_eq!(player.last_card(), Ok(&top));
    }

    #[test]
    fn take_card_from_empty_deck_leaves_hand_alone() {
        let mut deck = Deck::stacked(&[]);
        let mut player = Player::new();

        assert_eq!(player.take_card(&mut deck), Err(DrawError::EmptyDeck));
        assert!(player.is_empty());
    }

    #[test]
    fn hand_value_is_plain_sum() {
        let blackjack = hand_of(&[
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
        ]);
        assert_eq!(blackjack.hand_value(), 21);

        let bust = hand_of(&[
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::Two, Suit::Spades),
        ]);
        assert_eq!(bust.hand_value(), 22);
    }

    #[test]
    fn aces_are_not_downgraded_by_default() {
        let aces = hand_of(&[
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
        ]);
        assert_eq!(aces.hand_value(), 22);
        assert_eq!(aces.value_under(AceRule::Eleven), 22);
    }

    #[test]
    fn flexible_aces_drop_one_at_a_time() {
        let aces = hand_of(&[
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Clubs),
        ]);
        assert_eq!(aces.hand_value(), 31);
        assert_eq!(aces.value_under(AceRule::Flexible), 21);

        let hard = hand_of(&[
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Five, Suit::Clubs),
        ]);
        assert_eq!(hard.value_under(AceRule::Flexible), 25);
    }

    #[test]
    fn renders_hand_in_draw_order() {
        let player = hand_of(&[
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Ten, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
        ]);
        assert_eq!(player.hand_to_string(), "K♠ 10♦ A♣");
        assert_eq!(alloc::format!("{player}"), "K♠ 10♦ A♣");
    }

    #[test]
    fn last_card_on_empty_hand_fails() {
        let player = Player::new();
        assert_eq!(player.last_card(), Err(HandError::EmptyHand));
        assert_eq!(player.hand_to_string(), "");
        assert_eq!(player.hand_value(), 0);
    }
}

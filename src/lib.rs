//! A single-player console blackjack game with optional `no_std` support.
//!
//! The crate provides a [`Round`] state machine that plays one hand against
//! the dealer, and a [`Table`] that runs rounds against a [`Console`] until
//! the player stops.
//!
//! # Example
//!
//! ```
//! use blackjack::{GameOptions, Round, RoundState};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut round = Round::new(GameOptions::default(), &mut rng);
//! round.deal()?;
//! round.stand()?;
//! if round.state() == RoundState::DealerTurn {
//!     round.dealer_play()?;
//! }
//! let result = round.showdown()?;
//! println!("{}", result.outcome);
//! # Ok::<(), blackjack::RoundError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::StdConsole;
pub use console::Console;
pub use deck::Deck;
pub use error::{DrawError, HandError, RoundError};
pub use game::{Round, RoundState};
pub use options::{AceRule, BLACKJACK, GameOptions};
pub use player::Player;
pub use result::{Outcome, RoundResult, Settlement};
pub use table::{SessionSummary, Table};

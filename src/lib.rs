//! Multi-player "21" for a shared terminal: a 52-card rank deck, hand
//! scoring with an ace adjustment, chip wagers, and a round engine that asks
//! a [`ChoiceProvider`] for every hit or stand.

mod choice;
mod config;
mod deck;
mod error;
mod game;
mod hand;
mod outcome;
mod player;
#[cfg(feature = "cli")]
pub mod terminal;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use choice::{Choice, ChoiceProvider, RoundEvent, ScriptedChoices, TurnView};
pub use config::{GameConfig, ShortStackPolicy};
pub use deck::{Deck, DECK_SIZE};
pub use error::GameError;
pub use game::{Game, MAX_PLAYERS};
pub use hand::{is_bust, is_twenty_one, score, AceRule, TWENTY_ONE};
pub use outcome::{select_winner, PlayerSummary, RoundEnding, RoundResult, SeatStatus};
pub use player::Player;

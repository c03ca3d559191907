use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GameError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Choice {
    Hit,
    Stand,
}

impl FromStr for Choice {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "h" | "hit" => Ok(Choice::Hit),
            "2" | "s" | "stand" => Ok(Choice::Stand),
            _ => Err(GameError::InvalidChoice(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Hit => write!(f, "hit"),
            Choice::Stand => write!(f, "stand"),
        }
    }
}

/// What a player sees when asked to hit or stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnView<'a> {
    pub player: &'a str,
    pub chips: u32,
    pub hand: &'a [u8],
    pub score: u32,
    pub wager: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum RoundEvent {
    RoundStarted { round: u32 },
    TurnStarted { player: String, chips: u32, hand: Vec<u8>, score: u32 },
    InsufficientFunds { player: String, wager: u32, chips: u32 },
    WagerPlaced { player: String, wager: u32 },
    InvalidChoice { player: String, input: String },
    Drew { player: String, card: u8, score: u32 },
    Stood { player: String, score: u32 },
    Bust { player: String, score: u32 },
    Blackjack { player: String, payout: u32 },
    Winner { player: String, score: u32, payout: u32 },
    NoContest,
}

/// Source of hit/stand decisions for the round engine.
///
/// `choose` blocks until a decision is available. Returning
/// `GameError::InvalidChoice` makes the engine report the input and ask
/// again; any other error aborts the round.
pub trait ChoiceProvider {
    fn choose(&mut self, turn: &TurnView<'_>) -> Result<Choice, GameError>;

    fn notify(&mut self, _event: &RoundEvent) {}
}

/// Plays back a fixed list of decisions and keeps every event it is sent.
#[derive(Debug, Default)]
pub struct ScriptedChoices {
    script: VecDeque<Choice>,
    events: Vec<RoundEvent>,
}

impl ScriptedChoices {
    pub fn new<I>(choices: I) -> Self
    where
        I: IntoIterator<Item = Choice>,
    {
        ScriptedChoices {
            script: choices.into_iter().collect(),
            events: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn choose(&mut self, turn: &TurnView<'_>) -> Result<Choice, GameError> {
        self.script.pop_front().ok_or_else(|| {
            GameError::ChoiceUnavailable(format!("no scripted choice left for {}", turn.player))
        })
    }

    fn notify(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}

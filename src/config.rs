use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::hand::AceRule;

fn default_starting_chips() -> u32 {
    100
}

fn default_starting_age() -> u32 {
    25
}

fn default_wager() -> u32 {
    20
}

/// What happens when a player cannot cover the wager at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortStackPolicy {
    /// Skip the turn. The player is left out of settlement for the round.
    #[default]
    SitOut,
    /// Bet whatever is left. A player with no chips still sits out.
    AllIn,
}

impl FromStr for ShortStackPolicy {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sit-out" => Ok(ShortStackPolicy::SitOut),
            "all-in" => Ok(ShortStackPolicy::AllIn),
            other => Err(GameError::InvalidConfig(format!(
                "unknown short stack policy {other:?}, expected sit-out or all-in"
            ))),
        }
    }
}

impl fmt::Display for ShortStackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortStackPolicy::SitOut => write!(f, "sit-out"),
            ShortStackPolicy::AllIn => write!(f, "all-in"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    #[serde(default = "default_starting_chips")]
    pub starting_chips: u32,
    #[serde(default = "default_starting_age")]
    pub starting_age: u32,
    #[serde(default = "default_wager")]
    pub wager: u32,
    #[serde(default)]
    pub ace_rule: AceRule,
    #[serde(default)]
    pub short_stack: ShortStackPolicy,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_chips: default_starting_chips(),
            starting_age: default_starting_age(),
            wager: default_wager(),
            ace_rule: AceRule::default(),
            short_stack: ShortStackPolicy::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|err| GameError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.wager == 0 {
            return Err(GameError::InvalidConfig(
                "wager must be at least 1 chip".to_string(),
            ));
        }
        Ok(())
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{player} cannot cover a wager of {wager} with {chips} chips")]
    InsufficientFunds { player: String, wager: u32, chips: u32 },
    #[error("the deck is exhausted")]
    DeckExhausted,
    #[error("invalid choice {0:?}, enter 1 (hit) or 2 (stand)")]
    InvalidChoice(String),
    #[error("no choice available: {0}")]
    ChoiceUnavailable(String),
    #[error("a game needs at least one player")]
    NoPlayers,
    #[error("{0} players cannot each be dealt two cards from one deck")]
    TooManyPlayers(usize),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

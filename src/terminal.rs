use dialoguer::{Confirm, Input};

use crate::{
    choice::{Choice, ChoiceProvider, RoundEvent, TurnView},
    error::GameError,
    game::MAX_PLAYERS,
};

/// Hit/stand prompts for players sharing one terminal.
#[derive(Debug, Default)]
pub struct TerminalTable;

impl ChoiceProvider for TerminalTable {
    fn choose(&mut self, turn: &TurnView<'_>) -> Result<Choice, GameError> {
        println!("\nCards in hand: {:?}", turn.hand);
        println!("Total points: {}", turn.score);
        println!("\nOptions:\n  1. Hit\n  2. Stand");
        Input::<String>::new()
            .with_prompt(format!("{}, choose your action (1/2)", turn.player))
            .validate_with(|line: &String| -> Result<(), String> {
                line.parse::<Choice>().map(|_| ()).map_err(|err| err.to_string())
            })
            .interact_text()
            .map_err(|err| GameError::ChoiceUnavailable(err.to_string()))?
            .parse()
    }

    fn notify(&mut self, event: &RoundEvent) {
        if let Some(line) = describe(event) {
            println!("{line}");
        }
    }
}

pub fn describe(event: &RoundEvent) -> Option<String> {
    let line = match event {
        RoundEvent::RoundStarted { round } => format!("\n=== Round {round} ==="),
        RoundEvent::TurnStarted {
            player,
            chips,
            hand,
            score,
        } => format!("\n{player}, your chips: {chips}, your hand: {hand:?}\nTotal points: {score}"),
        RoundEvent::InsufficientFunds {
            player,
            wager,
            chips,
        } => format!("{player}, you don't have enough chips to bet {wager} ({chips} left)."),
        RoundEvent::WagerPlaced { .. } => return None,
        RoundEvent::InvalidChoice { input, .. } => {
            format!("{input:?} is not an option, enter 1 to hit or 2 to stand.")
        }
        RoundEvent::Drew { card, .. } => format!("You drew a {card}."),
        RoundEvent::Stood { player, score } => format!("{player} stands on {score}."),
        RoundEvent::Bust { score, .. } => format!("Bust with {score}! You lose."),
        RoundEvent::Blackjack { player, payout } => {
            format!("Blackjack! {player} wins {payout} chips!")
        }
        RoundEvent::Winner {
            player,
            score,
            payout,
        } => format!("\n{player} wins with {score} points and collects {payout} chips!"),
        RoundEvent::NoContest => "\nNobody could place a bet this round.".to_string(),
    };
    Some(line)
}

pub fn ask_player_names() -> dialoguer::Result<Vec<String>> {
    let count = Input::<usize>::new()
        .with_prompt("Number of players")
        .validate_with(|n: &usize| -> Result<(), String> {
            if (1..=MAX_PLAYERS).contains(n) {
                Ok(())
            } else {
                Err(format!("enter a number from 1 to {MAX_PLAYERS}"))
            }
        })
        .interact_text()?;

    (1..=count)
        .map(|i| {
            Input::<String>::new()
                .with_prompt(format!("Name of player {i}"))
                .interact_text()
        })
        .collect()
}

pub fn ask_play_again() -> dialoguer::Result<bool> {
    Confirm::new()
        .with_prompt("\nPlay again?")
        .default(false)
        .interact()
}

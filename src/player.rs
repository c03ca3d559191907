use serde::Serialize;

use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    chips: u32,
    age: u32,
    hand: Vec<u8>,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32, age: u32) -> Self {
        Player {
            name: name.into(),
            chips,
            age,
            hand: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn hand(&self) -> &[u8] {
        &self.hand
    }

    pub fn can_cover(&self, amount: u32) -> bool {
        amount <= self.chips
    }

    /// Commits `amount` from the stack. Leaves the stack untouched when it
    /// cannot cover the wager.
    pub fn bet(&mut self, amount: u32) -> Result<u32, GameError> {
        if !self.can_cover(amount) {
            return Err(GameError::InsufficientFunds {
                player: self.name.clone(),
                wager: amount,
                chips: self.chips,
            });
        }
        self.chips -= amount;
        Ok(amount)
    }

    pub fn credit(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub fn set_hand(&mut self, cards: Vec<u8>) {
        self.hand = cards;
    }

    pub fn take(&mut self, card: u8) {
        self.hand.push(card);
    }
}

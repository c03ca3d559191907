use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

use crate::error::GameError;

/// One suit's worth of ranks: ace through nine, then four tens.
const SUIT: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];
const SUITS: usize = 4;
pub const DECK_SIZE: usize = SUIT.len() * SUITS;

pub struct Deck {
    cards: Vec<u8>,
    rng: SmallRng,
}

impl Deck {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut deck = Deck {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.reset();
        deck
    }

    /// A deck that deals `draw_order` front to back. Never shuffled by the
    /// round engine, so rounds played on it are fully scripted.
    pub fn stacked<I>(draw_order: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut cards: Vec<u8> = draw_order.into_iter().collect();
        cards.reverse();
        Deck {
            cards,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    pub fn reset(&mut self) {
        self.cards.clear();
        for _ in 0..SUITS {
            self.cards.extend_from_slice(&SUIT);
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Result<u8, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[u8] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(cards: &[u8]) -> [usize; 11] {
        let mut counts = [0; 11];
        for &card in cards {
            counts[card as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_new_deck_composition() {
        let deck = Deck::new(Some(7));
        assert_eq!(deck.remaining(), 52);
        let counts = counts(deck.cards());
        for rank in 1..=9 {
            assert_eq!(counts[rank], 4, "rank {rank}");
        }
        assert_eq!(counts[10], 16);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut deck = Deck::new(Some(42));
        let before = deck.cards().to_vec();
        deck.shuffle();
        assert_eq!(counts(&before), counts(deck.cards()));
        assert_ne!(before, deck.cards());
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = Deck::new(Some(9));
        let mut b = Deck::new(Some(9));
        a.shuffle();
        b.shuffle();
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn test_draw_takes_from_the_top() {
        let mut deck = Deck::new(Some(1));
        assert_eq!(deck.draw(), Ok(10));
        assert_eq!(deck.draw(), Ok(10));
        assert_eq!(deck.remaining(), 50);
    }

    #[test]
    fn test_draw_past_the_end() {
        let mut deck = Deck::new(None);
        deck.shuffle();
        for _ in 0..DECK_SIZE {
            assert!(deck.draw().is_ok());
        }
        assert_eq!(deck.draw(), Err(GameError::DeckExhausted));
    }

    #[test]
    fn test_reset_restores_full_deck() {
        let mut deck = Deck::new(Some(3));
        deck.shuffle();
        for _ in 0..30 {
            deck.draw().unwrap();
        }
        deck.reset();
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert_eq!(counts(deck.cards())[10], 16);
    }

    #[test]
    fn test_stacked_deals_in_order() {
        let mut deck = Deck::stacked([3, 1, 10]);
        assert_eq!(deck.draw(), Ok(3));
        assert_eq!(deck.draw(), Ok(1));
        assert_eq!(deck.draw(), Ok(10));
        assert_eq!(deck.draw(), Err(GameError::DeckExhausted));
    }
}

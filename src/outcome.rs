use serde::Serialize;

use crate::hand::TWENTY_ONE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeatStatus {
    /// Has not acted yet. Only seen when a blackjack ends the round early.
    Waiting,
    Stood,
    Bust,
    Blackjack,
    SatOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RoundEnding {
    /// `player` hit to 21, was paid, and ended the round.
    Blackjack { player: String },
    Showdown,
    /// Every player sat out.
    NoContest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub name: String,
    pub hand: Vec<u8>,
    pub score: u32,
    pub wager: Option<u32>,
    pub chips: u32,
    pub status: SeatStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round: u32,
    /// Best hand at the table among players who did not sit out. After a
    /// [`RoundEnding::Blackjack`] this can name an unpaid player who stood on
    /// 21 earlier; only the player in the ending is paid.
    pub winner: Option<String>,
    pub ending: RoundEnding,
    pub players: Vec<PlayerSummary>,
}

impl RoundResult {
    pub fn summary(&self, name: &str) -> Option<&PlayerSummary> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn ended_by_blackjack(&self) -> bool {
        matches!(self.ending, RoundEnding::Blackjack { .. })
    }
}

/// Index of the winning score. The highest score at or under 21 wins; when
/// every hand is over, the one closest to 21 does. Ties go to the earliest
/// index.
pub fn select_winner(scores: &[u32]) -> Option<usize> {
    let best_valid = scores
        .iter()
        .enumerate()
        .filter(|&(_, &score)| score <= TWENTY_ONE)
        .fold(None, |best: Option<(usize, u32)>, (i, &score)| match best {
            Some((_, top)) if top >= score => best,
            _ => Some((i, score)),
        });
    if let Some((i, _)) = best_valid {
        return Some(i);
    }

    scores
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, u32)>, (i, &score)| {
            let distance = score.abs_diff(TWENTY_ONE);
            match best {
                Some((_, closest)) if closest <= distance => best,
                _ => Some((i, distance)),
            }
        })
        .map(|(i, _)| i)
}

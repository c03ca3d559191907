use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const TWENTY_ONE: u32 = 21;
const ACE: u8 = 1;

/// How aces are re-valued when a hand is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AceRule {
    /// Aces count 1. A hand over 21 holding an ace has that one ace swapped
    /// for an 11, once.
    #[default]
    Single,
    /// Aces count 1, and one of them counts 11 whenever that stays at or
    /// under 21.
    Soft,
}

impl FromStr for AceRule {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(AceRule::Single),
            "soft" => Ok(AceRule::Soft),
            other => Err(GameError::InvalidConfig(format!(
                "unknown ace rule {other:?}, expected single or soft"
            ))),
        }
    }
}

impl fmt::Display for AceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AceRule::Single => write!(f, "single"),
            AceRule::Soft => write!(f, "soft"),
        }
    }
}

pub fn score(hand: &[u8], rule: AceRule) -> u32 {
    let total: u32 = hand.iter().map(|&card| card as u32).sum();
    let has_ace = hand.contains(&ACE);

    match rule {
        AceRule::Single if total > TWENTY_ONE && has_ace => total - 1 + 11,
        AceRule::Soft if has_ace && total + 10 <= TWENTY_ONE => total + 10,
        _ => total,
    }
}

pub fn is_bust(hand: &[u8], rule: AceRule) -> bool {
    score(hand, rule) > TWENTY_ONE
}

pub fn is_twenty_one(hand: &[u8], rule: AceRule) -> bool {
    score(hand, rule) == TWENTY_ONE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_under_twenty_one_is_the_sum() {
        assert_eq!(score(&[2, 3], AceRule::Single), 5);
        assert_eq!(score(&[1, 6], AceRule::Single), 7);
        assert_eq!(score(&[10, 10, 1], AceRule::Single), 21);
        assert_eq!(score(&[], AceRule::Single), 0);
    }

    #[test]
    fn test_single_swap_over_twenty_one() {
        // 10 + 10 + 1 + 5 = 26, one ace swapped for 11
        assert_eq!(score(&[10, 10, 1, 5], AceRule::Single), 36);
    }

    #[test]
    fn test_single_swap_happens_once() {
        // 10 + 10 + 1 + 1 = 22, only one of the two aces is swapped
        assert_eq!(score(&[10, 10, 1, 1], AceRule::Single), 32);
    }

    #[test]
    fn test_no_ace_over_twenty_one() {
        assert_eq!(score(&[10, 9, 5], AceRule::Single), 24);
        assert!(is_bust(&[10, 9, 5], AceRule::Single));
    }

    #[test]
    fn test_scoring_is_repeatable() {
        let hand = vec![10, 10, 1, 5];
        let first = score(&hand, AceRule::Single);
        assert_eq!(score(&hand, AceRule::Single), first);
        assert_eq!(hand, vec![10, 10, 1, 5]);
    }

    #[test]
    fn test_soft_ace_counts_eleven() {
        assert_eq!(score(&[1, 6], AceRule::Soft), 17);
        assert_eq!(score(&[1, 10], AceRule::Soft), 21);
        assert_eq!(score(&[1, 1, 9], AceRule::Soft), 21);
    }

    #[test]
    fn test_soft_ace_falls_back_to_one() {
        assert_eq!(score(&[1, 6, 9], AceRule::Soft), 16);
        assert_eq!(score(&[10, 10, 1, 5], AceRule::Soft), 26);
    }

    #[test]
    fn test_is_twenty_one() {
        assert!(is_twenty_one(&[10, 5, 6], AceRule::Single));
        assert!(!is_twenty_one(&[1, 10], AceRule::Single));
        assert!(is_twenty_one(&[1, 10], AceRule::Soft));
    }

    #[test]
    fn test_ace_rule_from_str() {
        assert_eq!("Soft".parse::<AceRule>(), Ok(AceRule::Soft));
        assert_eq!(" single ".parse::<AceRule>(), Ok(AceRule::Single));
        assert!("double".parse::<AceRule>().is_err());
    }
}

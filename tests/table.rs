use twenty_one::{
    score, select_winner, AceRule, Choice, ChoiceProvider, Deck, Game, GameConfig, GameError,
    RoundEnding, RoundEvent, ScriptedChoices, SeatStatus, TurnView, DECK_SIZE,
};

/// Hits below a threshold, stands otherwise.
struct Threshold {
    stand_on: u32,
    events: Vec<RoundEvent>,
}

impl ChoiceProvider for Threshold {
    fn choose(&mut self, turn: &TurnView<'_>) -> Result<Choice, GameError> {
        Ok(if turn.score < self.stand_on {
            Choice::Hit
        } else {
            Choice::Stand
        })
    }

    fn notify(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}

#[test]
fn test_full_deck_draws_exactly_fifty_two() {
    let mut deck = Deck::new(Some(5));
    deck.shuffle();
    let mut drawn = Vec::new();
    while let Ok(card) = deck.draw() {
        drawn.push(card);
    }
    assert_eq!(drawn.len(), DECK_SIZE);
    assert_eq!(drawn.iter().filter(|&&c| c == 10).count(), 16);
    for rank in 1..=9u8 {
        assert_eq!(drawn.iter().filter(|&&c| c == rank).count(), 4);
    }
    assert_eq!(deck.draw(), Err(GameError::DeckExhausted));
}

#[test]
fn test_many_seeded_rounds_keep_books_balanced() {
    let config = GameConfig {
        seed: Some(77),
        ..GameConfig::default()
    };
    let mut game = Game::new(["Ana", "Bia", "Caio", "Duda"], config).unwrap();
    let mut provider = Threshold {
        stand_on: 17,
        events: Vec::new(),
    };

    let mut paid_out = 0i64;
    let mut wagered = 0i64;
    while game.has_solvent_player() && game.rounds_played() < 40 {
        let result = game.play_round(&mut provider).unwrap();
        wagered += result.players.iter().filter_map(|p| p.wager).sum::<u32>() as i64;
        let winner = match &result.ending {
            RoundEnding::Blackjack { player } => Some(player.clone()),
            RoundEnding::Showdown => result.winner.clone(),
            RoundEnding::NoContest => None,
        };
        if let Some(name) = winner {
            let summary = result.summary(&name).unwrap();
            paid_out += summary.wager.unwrap_or(0) as i64 * 2;
        }
    }

    let chips: i64 = game.players().iter().map(|p| p.chips() as i64).sum();
    assert_eq!(chips, 400 - wagered + paid_out);
    assert!(provider
        .events
        .iter()
        .any(|e| matches!(e, RoundEvent::RoundStarted { round: 1 })));
}

#[test]
fn test_blackjack_pays_and_skips_remaining_players() {
    let mut game = Game::with_names(["Ana", "Bia"]).unwrap();
    // Ana 10+4, hits 7 for 21. Bia holds 10+9 and never plays.
    let deck = Deck::stacked([10, 4, 10, 9, 7]);
    let mut choices = ScriptedChoices::new([Choice::Hit]);

    let result = game.play_round_with_deck(deck, &mut choices).unwrap();

    assert_eq!(
        result.ending,
        RoundEnding::Blackjack {
            player: "Ana".to_string()
        }
    );
    assert_eq!(result.winner.as_deref(), Some("Ana"));
    assert_eq!(game.player("Ana").unwrap().chips(), 120);
    assert_eq!(game.player("Bia").unwrap().chips(), 100);
    assert_eq!(result.summary("Bia").unwrap().status, SeatStatus::Waiting);
    assert!(choices.events().contains(&RoundEvent::Blackjack {
        player: "Ana".to_string(),
        payout: 40,
    }));
}

#[test]
fn test_hands_are_replaced_each_round() {
    let mut game = Game::with_names(["Ana"]).unwrap();
    let mut choices = ScriptedChoices::new([Choice::Hit, Choice::Stand]);
    game.play_round_with_deck(Deck::stacked([2, 3, 4]), &mut choices)
        .unwrap();
    assert_eq!(game.player("Ana").unwrap().hand(), &[2, 3, 4]);

    let mut choices = ScriptedChoices::new([Choice::Stand]);
    game.play_round_with_deck(Deck::stacked([9, 8]), &mut choices)
        .unwrap();
    assert_eq!(game.player("Ana").unwrap().hand(), &[9, 8]);
    assert_eq!(game.rounds_played(), 2);
}

#[test]
fn test_round_result_serializes_for_front_ends() {
    let mut game = Game::with_names(["Ana", "Bia"]).unwrap();
    let result = game
        .play_round_with_deck(
            Deck::stacked([10, 8, 3, 3]),
            &mut ScriptedChoices::new([Choice::Stand, Choice::Stand]),
        )
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["round"], 1);
    assert_eq!(json["winner"], "Ana");
    assert_eq!(json["ending"]["kind"], "showdown");
    assert_eq!(json["players"][0]["hand"], serde_json::json!([10, 8]));
    assert_eq!(json["players"][1]["chips"], 80);
}

#[test]
fn test_documented_scoring_examples() {
    assert_eq!(score(&[7, 8, 6], AceRule::Single), 21);
    assert_eq!(score(&[1, 10, 5, 9], AceRule::Single), 35);
    assert_eq!(select_winner(&[18, 22, 21, 25]), Some(2));
    assert_eq!(select_winner(&[22, 24, 23]), Some(0));
}

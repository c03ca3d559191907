use log::{debug, info, warn};

use crate::{
    choice::{Choice, ChoiceProvider, RoundEvent, TurnView},
    config::{GameConfig, ShortStackPolicy},
    deck::{Deck, DECK_SIZE},
    error::GameError,
    hand::{is_bust, is_twenty_one, score},
    outcome::{select_winner, PlayerSummary, RoundEnding, RoundResult, SeatStatus},
    player::Player,
};

/// Every player is dealt two cards from a single deck.
pub const MAX_PLAYERS: usize = DECK_SIZE / 2;
const PAYOUT_MULTIPLIER: u32 = 2;

pub struct Game {
    players: Vec<Player>,
    deck: Deck,
    config: GameConfig,
    rounds_played: u32,
}

impl Game {
    pub fn new<I, S>(names: I, config: GameConfig) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        let players: Vec<Player> = names
            .into_iter()
            .map(|name| Player::new(name, config.starting_chips, config.starting_age))
            .collect();
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers(players.len()));
        }
        Ok(Game {
            players,
            deck: Deck::new(config.seed),
            config,
            rounds_played: 0,
        })
    }

    pub fn with_names<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, GameConfig::default())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Whether anyone at the table can still put chips in.
    pub fn has_solvent_player(&self) -> bool {
        self.players.iter().any(|p| match self.config.short_stack {
            ShortStackPolicy::SitOut => p.can_cover(self.config.wager),
            ShortStackPolicy::AllIn => p.chips() > 0,
        })
    }

    /// Plays one round on a freshly shuffled 52-card deck.
    ///
    /// On error the round is void: wagers taken during it are refunded and
    /// the round counter does not advance.
    pub fn play_round<C>(&mut self, choices: &mut C) -> Result<RoundResult, GameError>
    where
        C: ChoiceProvider + ?Sized,
    {
        self.deck.reset();
        self.deck.shuffle();
        debug!("shuffled {} cards", self.deck.remaining());

        let number = self.rounds_played + 1;
        let result = Round::new(number, &mut self.players, &self.config, &mut self.deck, choices)
            .play()?;
        self.rounds_played = number;
        Ok(result)
    }

    /// Plays one round on `deck` exactly as given, without shuffling.
    pub fn play_round_with_deck<C>(
        &mut self,
        mut deck: Deck,
        choices: &mut C,
    ) -> Result<RoundResult, GameError>
    where
        C: ChoiceProvider + ?Sized,
    {
        let number = self.rounds_played + 1;
        let result =
            Round::new(number, &mut self.players, &self.config, &mut deck, choices).play()?;
        self.rounds_played = number;
        Ok(result)
    }
}

#[derive(Debug, Clone, Copy)]
struct Seat {
    wager: Option<u32>,
    status: SeatStatus,
}

enum TurnEnd {
    Done,
    Blackjack,
}

struct Round<'g, C: ?Sized> {
    number: u32,
    players: &'g mut [Player],
    config: &'g GameConfig,
    deck: &'g mut Deck,
    choices: &'g mut C,
    seats: Vec<Seat>,
}

impl<'g, C> Round<'g, C>
where
    C: ChoiceProvider + ?Sized,
{
    fn new(
        number: u32,
        players: &'g mut [Player],
        config: &'g GameConfig,
        deck: &'g mut Deck,
        choices: &'g mut C,
    ) -> Self {
        let seats = vec![
            Seat {
                wager: None,
                status: SeatStatus::Waiting,
            };
            players.len()
        ];
        Round {
            number,
            players,
            config,
            deck,
            choices,
            seats,
        }
    }

    fn play(mut self) -> Result<RoundResult, GameError> {
        info!("round {} with {} players", self.number, self.players.len());
        self.choices
            .notify(&RoundEvent::RoundStarted { round: self.number });

        if let Err(err) = self.deal() {
            return Err(self.abort(err));
        }
        for i in 0..self.players.len() {
            match self.take_turn(i) {
                Ok(TurnEnd::Done) => {}
                Ok(TurnEnd::Blackjack) => return Ok(self.finish_on_blackjack(i)),
                Err(err) => return Err(self.abort(err)),
            }
        }
        Ok(self.settle())
    }

    fn deal(&mut self) -> Result<(), GameError> {
        for player in self.players.iter_mut() {
            let hand = vec![self.deck.draw()?, self.deck.draw()?];
            debug!("dealt {:?} to {}", hand, player.name());
            player.set_hand(hand);
        }
        Ok(())
    }

    fn score_of(&self, i: usize) -> u32 {
        score(self.players[i].hand(), self.config.ace_rule)
    }

    fn take_turn(&mut self, i: usize) -> Result<TurnEnd, GameError> {
        let rule = self.config.ace_rule;
        let player = &mut self.players[i];
        self.choices.notify(&RoundEvent::TurnStarted {
            player: player.name().to_string(),
            chips: player.chips(),
            hand: player.hand().to_vec(),
            score: score(player.hand(), rule),
        });

        let stake = match player.bet(self.config.wager) {
            Ok(stake) => stake,
            Err(GameError::InsufficientFunds { player: name, wager, chips }) => {
                self.choices.notify(&RoundEvent::InsufficientFunds {
                    player: name.clone(),
                    wager,
                    chips,
                });
                match self.config.short_stack {
                    ShortStackPolicy::AllIn if chips > 0 => {
                        debug!("{name} goes all in for {chips}");
                        player.bet(chips)?
                    }
                    _ => {
                        debug!("{name} sits out with {chips} chips");
                        self.seats[i].status = SeatStatus::SatOut;
                        return Ok(TurnEnd::Done);
                    }
                }
            }
            Err(err) => return Err(err),
        };
        self.seats[i].wager = Some(stake);
        self.choices.notify(&RoundEvent::WagerPlaced {
            player: player.name().to_string(),
            wager: stake,
        });

        loop {
            let current = score(player.hand(), rule);
            let view = TurnView {
                player: player.name(),
                chips: player.chips(),
                hand: player.hand(),
                score: current,
                wager: stake,
            };
            let choice = match self.choices.choose(&view) {
                Ok(choice) => choice,
                Err(GameError::InvalidChoice(input)) => {
                    self.choices.notify(&RoundEvent::InvalidChoice {
                        player: player.name().to_string(),
                        input,
                    });
                    continue;
                }
                Err(err) => return Err(err),
            };

            match choice {
                Choice::Stand => {
                    self.seats[i].status = SeatStatus::Stood;
                    self.choices.notify(&RoundEvent::Stood {
                        player: player.name().to_string(),
                        score: current,
                    });
                    return Ok(TurnEnd::Done);
                }
                Choice::Hit => {
                    let card = self.deck.draw()?;
                    player.take(card);
                    let now = score(player.hand(), rule);
                    self.choices.notify(&RoundEvent::Drew {
                        player: player.name().to_string(),
                        card,
                        score: now,
                    });

                    if is_twenty_one(player.hand(), rule) {
                        self.seats[i].status = SeatStatus::Blackjack;
                        return Ok(TurnEnd::Blackjack);
                    }
                    if is_bust(player.hand(), rule) {
                        debug!("{} busts with {now}", player.name());
                        self.seats[i].status = SeatStatus::Bust;
                        self.choices.notify(&RoundEvent::Bust {
                            player: player.name().to_string(),
                            score: now,
                        });
                        return Ok(TurnEnd::Done);
                    }
                }
            }
        }
    }

    /// Indices and scores of everyone who did not sit out.
    fn contenders(&self) -> (Vec<usize>, Vec<u32>) {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.status != SeatStatus::SatOut)
            .map(|(i, _)| (i, self.score_of(i)))
            .unzip()
    }

    fn pick_winner(&self) -> Option<usize> {
        let (seats, scores) = self.contenders();
        select_winner(&scores).map(|pick| seats[pick])
    }

    fn payout(&self, i: usize) -> u32 {
        self.seats[i]
            .wager
            .unwrap_or(0)
            .saturating_mul(PAYOUT_MULTIPLIER)
    }

    fn finish_on_blackjack(mut self, i: usize) -> RoundResult {
        let payout = self.payout(i);
        self.players[i].credit(payout);
        let name = self.players[i].name().to_string();
        info!("{name} hits 21 and collects {payout}");
        self.choices.notify(&RoundEvent::Blackjack {
            player: name.clone(),
            payout,
        });

        let winner = self.pick_winner();
        self.result(winner, RoundEnding::Blackjack { player: name })
    }

    fn settle(mut self) -> RoundResult {
        let Some(winner) = self.pick_winner() else {
            info!("round {} has no contenders", self.number);
            self.choices.notify(&RoundEvent::NoContest);
            return self.result(None, RoundEnding::NoContest);
        };

        let payout = self.payout(winner);
        self.players[winner].credit(payout);
        let score = self.score_of(winner);
        info!(
            "{} wins round {} with {score} and collects {payout}",
            self.players[winner].name(),
            self.number
        );
        self.choices.notify(&RoundEvent::Winner {
            player: self.players[winner].name().to_string(),
            score,
            payout,
        });
        self.result(Some(winner), RoundEnding::Showdown)
    }

    fn abort(mut self, err: GameError) -> GameError {
        warn!("round {} aborted: {err}", self.number);
        for (player, seat) in self.players.iter_mut().zip(&self.seats) {
            if let Some(wager) = seat.wager {
                player.credit(wager);
            }
        }
        err
    }

    fn result(&self, winner: Option<usize>, ending: RoundEnding) -> RoundResult {
        let players = self
            .players
            .iter()
            .zip(&self.seats)
            .map(|(player, seat)| PlayerSummary {
                name: player.name().to_string(),
                hand: player.hand().to_vec(),
                score: score(player.hand(), self.config.ace_rule),
                wager: seat.wager,
                chips: player.chips(),
                status: seat.status,
            })
            .collect();
        RoundResult {
            round: self.number,
            winner: winner.map(|i| self.players[i].name().to_string()),
            ending,
            players,
        }
    }
}

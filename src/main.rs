use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use twenty_one::{
    terminal::{self, TerminalTable},
    AceRule, Game, GameConfig, GameError, ShortStackPolicy,
};

#[derive(Parser)]
#[command(name = "twenty-one", about = "Multi-player 21 for a shared terminal")]
struct Cli {
    /// Player names, in seating order. Prompted for when omitted.
    #[arg(long, num_args = 1..)]
    players: Vec<String>,

    /// JSON file with game settings. Flags below override it.
    #[arg(long, env = "TWENTY_ONE_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long)]
    chips: Option<u32>,

    #[arg(long)]
    wager: Option<u32>,

    /// Seed for the shuffle, for repeatable games.
    #[arg(long)]
    seed: Option<u64>,

    /// single or soft
    #[arg(long)]
    ace_rule: Option<AceRule>,

    /// sit-out or all-in
    #[arg(long)]
    short_stack: Option<ShortStackPolicy>,

    /// Print each round result as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GameConfig::from_json(&json)
                    .with_context(|| format!("loading {}", path.display()))?
            }
            None => GameConfig::default(),
        };
        if let Some(chips) = self.chips {
            config.starting_chips = chips;
        }
        if let Some(wager) = self.wager {
            config.wager = wager;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(rule) = self.ace_rule {
            config.ace_rule = rule;
        }
        if let Some(policy) = self.short_stack {
            config.short_stack = policy;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = cli.game_config()?;
    log::debug!("config: {config:?}");

    println!("Welcome to Twenty-One!");
    let names = if cli.players.is_empty() {
        terminal::ask_player_names().context("reading player names")?
    } else {
        cli.players.clone()
    };
    let mut game = Game::new(names, config).context("seating players")?;
    let mut table = TerminalTable;

    loop {
        match game.play_round(&mut table) {
            Ok(result) => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
            }
            Err(GameError::DeckExhausted) => {
                println!("\nThe deck ran out of cards, the round is void and bets are returned.");
            }
            Err(err) => return Err(err).context("playing round"),
        }

        if !game.has_solvent_player() {
            println!("\nNobody can cover the {} chip wager.", game.config().wager);
            break;
        }
        if !terminal::ask_play_again()? {
            break;
        }
    }

    println!("\nThanks for playing! Final chips:");
    for player in game.players() {
        println!("  {}: {}", player.name(), player.chips());
    }
    Ok(())
}

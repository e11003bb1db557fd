//! Console blackjack.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use blackjack::{AceRule, GameOptions, StdConsole, Table};
use clap::Parser;

/// Play blackjack against the dealer in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "blackjack", version, about = "Single-player console blackjack")]
struct Cli {
    /// Seed for shuffling (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Let aces drop to 1 instead of busting the hand
    #[arg(long, default_value_t = false)]
    flexible_aces: bool,

    /// Hand value at which the dealer stands
    #[arg(long, default_value_t = 18)]
    dealer_stands_at: u16,

    /// Log everything at debug level
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    fn options(&self) -> GameOptions {
        let ace_rule = if self.flexible_aces {
            AceRule::Flexible
        } else {
            AceRule::Eleven
        };
        GameOptions::default()
            .with_ace_rule(ace_rule)
            .with_dealer_stands_at(self.dealer_stands_at)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug { "debug" } else { "blackjack=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(cli.debug)
        .init();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    tracing::debug!(seed, options = ?cli.options(), "starting table");

    // The table holds the stdin lock; release it before printing the summary.
    let summary = {
        let mut table = Table::new(cli.options(), seed, StdConsole::new());
        table.run().context("playing blackjack")?
    };

    println!(
        "Rounds: {} | Player: {} | Dealer: {} | Draws: {}",
        summary.rounds, summary.player_wins, summary.dealer_wins, summary.draws
    );
    Ok(())
}

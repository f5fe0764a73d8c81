//! Command line for a Swiss-system tournament.
//!
//! Each invocation connects, runs one command against the tournament
//! database and exits.

mod commands;
mod config;
mod output;

use std::sync::Arc;

use anyhow::Error;
use commands::{Command, parse_command};
use config::CliConfig;
use log::{error, info};
use pico_args::Arguments;
use swiss_tournament::{
    TournamentError, TournamentManager,
    db::{Database, PgTournamentRepository},
};

const HELP: &str = "\
Run a Swiss-system tournament

USAGE:
  swiss [OPTIONS] <COMMAND>

COMMANDS:
  init                     Create the player and matches tables if missing
  register <NAME>          Register a player and print the new ID
  report <WINNER> <LOSER>  Record a match result by player ID
  count                    Print the number of registered players
  standings                Print standings, first place first
  pairings                 Print pairings for the next round
  check                    Compare stored counters with the match table
  reset [--matches-only]   Delete all matches, then all players

OPTIONS:
  --db-url     URL         Database connection string  [default: env DATABASE_URL or postgres://postgres@localhost/tournament]
  --json                   Print standings and pairings as JSON

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  DATABASE_URL             PostgreSQL connection string
  DB_MAX_CONNECTIONS       Pool size (default 5)
  RUST_LOG                 Log level (e.g. info, debug)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let database_url: Option<String> = pargs.opt_value_from_str("--db-url")?;
    let json = pargs.contains("--json");
    let command = parse_command(&mut pargs)?;

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {:?}", remaining);
    }

    env_logger::builder().format_target(false).init();

    let config = CliConfig::from_env(database_url, json);
    config.validate()?;

    info!("Connecting to database");
    let db = Database::new(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    let manager = TournamentManager::new(Arc::new(PgTournamentRepository::new(
        db.pool().clone(),
    )));

    let result = run(command, &db, &manager, config.json).await;
    db.close().await;
    result.map_err(|e| {
        error!("{e:#}");
        anyhow::anyhow!(user_message(&e))
    })
}

/// Message shown to the operator; database details stay in the log
fn user_message(err: &Error) -> String {
    match err.downcast_ref::<TournamentError>() {
        Some(e) => e.client_message(),
        None => err.to_string(),
    }
}

async fn run(
    command: Command,
    db: &Database,
    manager: &TournamentManager,
    json: bool,
) -> Result<(), Error> {
    match command {
        Command::Init => {
            db.create_schema().await?;
            println!("Schema ready");
        }
        Command::Register(name) => {
            let id = manager.register_player(&name).await?;
            println!("{id}");
        }
        Command::Report { winner, loser } => {
            let record = manager.report_match(winner, loser).await?;
            println!("Match {} recorded: {} beat {}", record.id, winner, loser);
        }
        Command::Count => {
            println!("{}", manager.count_players().await?);
        }
        Command::Standings => {
            if json {
                println!("{}", manager.standings_json().await?);
            } else {
                print!("{}", output::standings_table(&manager.player_standings().await?));
            }
        }
        Command::Pairings => {
            let round = manager.next_round().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&round)?);
            } else {
                print!("{}", output::round_lines(&round));
            }
        }
        Command::Check => {
            let report = manager.check_consistency().await?;
            print!("{}", output::consistency_summary(&report));
            if !report.is_consistent() {
                anyhow::bail!("Consistency check failed");
            }
        }
        Command::Reset { matches_only } => {
            let matches = manager.delete_matches().await?;
            if matches_only {
                println!("Deleted {matches} match(es)");
            } else {
                let players = manager.delete_players().await?;
                println!("Deleted {matches} match(es) and {players} player(s)");
            }
        }
    }

    Ok(())
}

//! Headless card round host.
//!
//! Spawns one RoundActor, feeds it console commands from stdin, and prints
//! every selected card to stdout as a JSON line.

mod config;
mod console;
mod logging;

use std::path::PathBuf;

use anyhow::Error;
use card_round::{CardPool, Round, RoundActor, RoundHandle, RoundResponse, SelectionEvent};
use config::ServerConfig;
use console::{COMMANDS, Command};
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

const HELP: &str = "\
Run a single card round driven from the console

USAGE:
  cr_server [OPTIONS]

OPTIONS:
  --catalogue  PATH        Card names, one per line  [default: env CARD_CATALOGUE or Fire/Water/Grass 1-10]
  --seed       N           Fixed RNG seed            [default: env ROUND_SEED or random]
  --tick-ms    MS          Timer tick interval       [default: env ROUND_TICK_MS or 100]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  ROUND_DECISION_SECS      Decision window (30)
  ROUND_KICK_SECS          Inactivity limit (90)
  RUST_LOG                 Log filter (info)
  (See .env file for all configuration options)
";

struct Args {
    catalogue: Option<PathBuf>,
    seed: Option<u64>,
    tick_ms: Option<u64>,
}

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

    let args = Args {
        catalogue: pargs.opt_value_from_str("--catalogue")?,
        seed: pargs.opt_value_from_str("--seed")?,
        tick_ms: pargs.opt_value_from_str("--tick-ms")?,
    };

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    logging::init();

    let config = ServerConfig::from_env(args.catalogue, args.seed, args.tick_ms);
    config.validate()?;

    let pool = CardPool::build(config.catalogue_names()?)?;
    info!("Loaded {} cards", pool.len());

    let round = match config.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            Round::with_seed(config.round.clone(), pool, seed)
        }
        None => Round::new(config.round.clone(), pool),
    };

    let (outbox, selections) = mpsc::channel(32);
    let (actor, handle) = RoundActor::new(round, outbox);
    let actor_task = tokio::spawn(actor.run());

    tokio::spawn(print_selections(selections));

    let (notify_tx, mut notifications) = mpsc::channel(64);
    handle
        .subscribe(0, notify_tx)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    tokio::spawn(async move {
        while let Some(notification) = notifications.recv().await {
            logging::log_notification(&notification);
        }
    });

    info!("Ready. Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        if let Err(e) = dispatch(&handle, command).await {
            log::error!("{}", e);
            break;
        }
    }

    let _ = handle.close().await;
    actor_task.await?;
    info!("Shutting down...");

    Ok(())
}

/// The network collaborator stand-in: one JSON line per selected card
async fn print_selections(mut selections: mpsc::Receiver<SelectionEvent>) {
    while let Some(event) = selections.recv().await {
        match event.to_wire() {
            Ok(line) => println!("{line}"),
            Err(e) => log::error!("Failed to encode selection {}: {}", event, e),
        }
    }
}

async fn dispatch(handle: &RoundHandle, command: Command) -> Result<(), String> {
    let response = match command {
        Command::Deal => handle.deal().await?,
        Command::Pick(position) => handle.select(position).await?,
        Command::Tap(position) => handle.tap(position).await?,
        Command::DragRelease { position, y } => handle.drag_release(position, y).await?,
        Command::Input(input) => {
            let counted = handle.input(input).await?;
            eprintln!("{}", if counted { "activity" } else { "ignored" });
            return Ok(());
        }
        Command::Overlay(open) => {
            handle.set_overlay(open).await?;
            return Ok(());
        }
        Command::View => {
            let view = handle.view().await?;
            match serde_json::to_string_pretty(&view) {
                Ok(json) => eprintln!("{json}"),
                Err(e) => log::error!("Failed to encode view: {}", e),
            }
            return Ok(());
        }
        Command::Reset => handle.reset_round().await?,
        Command::End => handle.end_session().await?,
        Command::Help => {
            eprintln!("{COMMANDS}");
            return Ok(());
        }
        Command::Quit => return Ok(()),
    };

    match response {
        RoundResponse::Dealt { hand_number, cards } => {
            let names: Vec<String> = cards.iter().map(ToString::to_string).collect();
            eprintln!("hand {}: {}", hand_number, names.join(" | "));
        }
        RoundResponse::Rejected(e) => eprintln!("rejected: {e}"),
        RoundResponse::Ignored => eprintln!("noted"),
        RoundResponse::Selected { .. } | RoundResponse::Success => {}
    }

    Ok(())
}

use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticket_machine::ticket::{Console, Notifier};
use ticket_machine::{Action, Language, MachineState, State, TicketMachine};

/// Drive a ticket machine from the command line.
///
/// Actions: select, pay, dispense, cancel. Without positional actions the
/// machine reads one action per line from stdin until EOF or `quit`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Actions to apply in order
    actions: Vec<String>,

    /// Language of the printed messages (ru, en)
    #[arg(long, env = "TICKET_MACHINE_LANG", default_value = "ru")]
    lang: Language,

    /// State the machine starts in
    #[arg(long, default_value = "idle")]
    initial_state: MachineState,

    /// Print the transition history as JSON when the session ends
    #[arg(long)]
    history: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();

    let cli = Cli::parse();

    let mut machine =
        TicketMachine::with_notifier(Console::new(cli.lang)).starting_in(cli.initial_state);
    info!(session = %machine.id(), state = %machine.current_state(), "session started");

    if cli.actions.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read action from stdin")?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if is_exit_command(input) {
                break;
            }
            apply(&mut machine, input);
        }
    } else {
        for input in &cli.actions {
            apply(&mut machine, input);
        }
    }

    let state = machine.current_state();
    if state.in_transaction() {
        warn!(session = %machine.id(), %state, "session ended with an open transaction");
    }
    info!(
        session = %machine.id(),
        %state,
        transitions = machine.history().len(),
        duration = ?machine.history().duration(),
        "session finished"
    );

    if cli.history {
        let json = serde_json::to_string_pretty(machine.history())
            .context("Failed to serialize transition history")?;
        println!("{}", json);
    }

    Ok(())
}

fn apply<N: Notifier>(machine: &mut TicketMachine<N>, input: &str) {
    match input.parse::<Action>() {
        Ok(action) => {
            machine.dispatch(action);
        }
        Err(e) => {
            debug!(input, "skipping unknown action");
            eprintln!("error: {}", e);
        }
    }
}

fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit")
}

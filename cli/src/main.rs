use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tripwire_core::*;

use command::{Command, HELP, ParseCommandError};
use render::Output;

mod command;
mod render;

/// How often the loop wakes up to let the clock run when nobody types.
const FRAME: Duration = Duration::from_millis(50);

/// Claim three cells in a row on a mined board before the opponent does.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Side length of the square board
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE)]
    size: Coord,

    /// How many mines to hide
    #[arg(short, long, default_value_t = GameConfig::DEFAULT_MINES)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pause before the opponent plays, in milliseconds
    #[arg(long, default_value_t = GameConfig::DEFAULT_OPPONENT_DELAY_MS)]
    opponent_delay_ms: u32,

    /// Print events as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let config = GameConfig::new(args.size, args.mines)
        .context("Invalid board configuration")?
        .with_opponent_delay_ms(args.opponent_delay_ms);
    let mut session = GameSession::new(config, seed).context("Could not start the round")?;

    let mut output = Output::new(io::stdout().lock(), args.json);
    output.notice(HELP)?;
    output.flush_events(&mut session)?;

    let commands = spawn_stdin_reader();
    let mut last_frame = Instant::now();

    loop {
        let received = commands.recv_timeout(FRAME);

        let now = Instant::now();
        session.advance(now - last_frame);
        last_frame = now;
        output.flush_events(&mut session)?;

        let command = match received {
            Ok(Ok(command)) => command,
            Ok(Err(ParseCommandError::Empty)) => continue,
            Ok(Err(err)) => {
                output.notice(format_args!("{err}, type `help` for the list of commands"))?;
                continue;
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        log::debug!("command: {:?}", command);

        match command {
            Command::Claim(coords) => {
                if session.is_finished() {
                    output.notice("The round is over, type `new` to play again.")?;
                } else if !session.human_move(coords).has_update() {
                    output.notice(format_args!("({}, {}) cannot be played right now.", coords.0, coords.1))?;
                }
            }
            Command::New(mines) => {
                let config = GameConfig {
                    mines: mines.unwrap_or(session.config().mines),
                    ..*session.config()
                };
                if let Err(err) = session.restart_with(config) {
                    log::warn!("Refusing to start round with {:?}: {}", config, err);
                    output.notice(format_args!("Cannot start that round: {err}"))?;
                }
                // the clock of the new round starts now
                last_frame = Instant::now();
            }
            Command::Board => output.board(&session.view())?,
            Command::Help => output.notice(HELP)?,
            Command::Quit => break,
        }
        output.flush_events(&mut session)?;
    }

    log::debug!("Leaving after {} rounds", session.rounds_started());
    Ok(())
}

/// Reads stdin on its own thread so the main loop can keep the clock running. The channel disconnects at end of
/// input.
fn spawn_stdin_reader() -> Receiver<std::result::Result<Command, ParseCommandError>> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    log::error!("Could not read input: {}", err);
                    break;
                }
            };
            if sender.send(line.parse()).is_err() {
                break;
            }
        }
    });
    receiver
}

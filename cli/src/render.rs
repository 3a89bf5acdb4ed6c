use std::io::{self, Write};

use tripwire_core::*;

/// Seconds left at which the clock starts getting announced in text mode.
const CLOCK_WARNING_SECS: u8 = 3;

/// Turns queued session events into terminal output, either prose or one JSON object per line.
pub struct Output<W: Write> {
    out: W,
    json: bool,
}

impl<W: Write> Output<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes every pending event, redraws the board when it changed, and acknowledges a finished round once its
    /// outcome has been shown.
    pub fn flush_events<G: MinefieldGenerator>(&mut self, session: &mut GameSession<G>) -> io::Result<()> {
        let mut redraw = false;
        let mut wrote = false;

        for event in session.drain_events() {
            wrote = true;
            if self.json {
                serde_json::to_writer(&mut self.out, &event)?;
                writeln!(self.out)?;
            } else {
                redraw |= matches!(
                    event,
                    GameEvent::BoardInitialized { .. }
                        | GameEvent::CellClaimed { .. }
                        | GameEvent::MinesRevealed { .. }
                );
                self.describe(&event)?;
            }
        }

        if !wrote {
            return Ok(());
        }

        if redraw {
            write!(self.out, "{}", session.view())?;
        }
        if session.is_finished() && !session.outcome_acknowledged() {
            session.acknowledge_outcome();
            if !self.json {
                writeln!(self.out, "Type `new` to play again or `quit` to leave.")?;
            }
        }
        self.out.flush()
    }

    pub fn board(&mut self, view: &BoardView) -> io::Result<()> {
        if self.json {
            serde_json::to_writer(&mut self.out, view)?;
            writeln!(self.out)?;
        } else {
            write!(self.out, "{view}")?;
        }
        self.out.flush()
    }

    /// Free-form message for the player, skipped in JSON mode.
    pub fn notice(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        if !self.json {
            writeln!(self.out, "{message}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn describe(&mut self, event: &GameEvent) -> io::Result<()> {
        let out = &mut self.out;
        match event {
            GameEvent::BoardInitialized { board } => writeln!(
                out,
                "New round: {0}x{0} board with {1} hidden mines.",
                board.size, board.mines
            ),
            GameEvent::TurnStarted {
                player: PlayerId::Human,
                seconds_left,
            } => writeln!(
                out,
                "Your move ({}), {seconds_left}s on the clock. Enter `<row> <col>`.",
                PlayerId::Human.symbol()
            ),
            GameEvent::TurnStarted {
                player: PlayerId::Opponent,
                ..
            } => writeln!(out, "Opponent ({}) is thinking...", PlayerId::Opponent.symbol()),
            GameEvent::ClockTick { seconds_left } if *seconds_left <= CLOCK_WARNING_SECS => {
                writeln!(out, "Time left: {seconds_left}s")
            }
            GameEvent::ClockTick { .. } => Ok(()),
            GameEvent::CellClaimed {
                coords: (row, col),
                player,
            } => writeln!(out, "{} claims ({row}, {col})", player.symbol()),
            GameEvent::MineHit { coords: (row, col) } => {
                writeln!(out, "BOOM! There was a mine at ({row}, {col}).")
            }
            GameEvent::RoundWon {
                player: PlayerId::Human,
                line,
            } => writeln!(out, "You win! Line: {:?}", line.cells.as_slice()),
            GameEvent::RoundWon {
                player: PlayerId::Opponent,
                line,
            } => writeln!(out, "The opponent wins. Line: {:?}", line.cells.as_slice()),
            GameEvent::RoundExhausted => writeln!(out, "Every safe cell is taken, nobody wins."),
            GameEvent::TurnTimeout { .. } => writeln!(out, "Time up! A mine exploded!"),
            GameEvent::MinesRevealed { .. } => Ok(()),
        }
    }
}

use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Seconds each player gets to make a move.
pub const TURN_SECONDS: u8 = 10;

const SECOND: Duration = Duration::from_secs(1);

/// The current player's clock runs in both `WaitingForMove` and `CountingDown`.
///
/// Valid transitions:
/// - CountingDown -> WaitingForMove (turn passed to the opponent)
/// - WaitingForMove -> CountingDown (opponent moved, or had nothing to play)
/// - CountingDown -> RoundOver
/// - WaitingForMove -> RoundOver
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// The opponent's move is queued and fires after the delay, unless its clock runs out first
    WaitingForMove,
    /// The current player's clock is running
    CountingDown,
    /// Round ended, nothing runs until the next round is set up
    RoundOver,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::CountingDown
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Clock was not running
    Ignored,
    /// Clock went down by a second, this many are left
    Ticked(u8),
    /// Clock ran out, the round is lost
    Expired,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    seconds_left: u8,
    /// Time accumulated towards the next tick.
    partial: Duration,
}

impl TurnClock {
    pub const fn full() -> Self {
        Self {
            seconds_left: TURN_SECONDS,
            partial: Duration::ZERO,
        }
    }

    pub const fn seconds_left(&self) -> u8 {
        self.seconds_left
    }
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::full()
    }
}

/// Tracks whose turn it is, their countdown, and the deferred opponent move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnController {
    state: TurnState,
    current: PlayerId,
    clock: TurnClock,
    opponent_delay: Duration,
    opponent_waited: Duration,
}

impl TurnController {
    pub fn new(opponent_delay: Duration) -> Self {
        Self {
            state: TurnState::CountingDown,
            current: PlayerId::Human,
            clock: TurnClock::full(),
            opponent_delay,
            opponent_waited: Duration::ZERO,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn seconds_left(&self) -> u8 {
        self.clock.seconds_left()
    }

    pub fn clock(&self) -> TurnClock {
        self.clock
    }

    /// Whether the queued opponent move should run now.
    pub fn opponent_due(&self) -> bool {
        matches!(self.state, TurnState::WaitingForMove) && self.opponent_waited >= self.opponent_delay
    }

    fn clock_running(&self) -> bool {
        matches!(self.state, TurnState::CountingDown | TurnState::WaitingForMove)
    }

    /// One full second passed.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.clock_running() {
            return TickOutcome::Ignored;
        }

        self.clock.partial = Duration::ZERO;
        self.clock.seconds_left = self.clock.seconds_left.saturating_sub(1);
        log::trace!("{:?} has {}s left", self.current, self.clock.seconds_left);

        if self.clock.seconds_left == 0 {
            log::debug!("{:?} ran out of time", self.current);
            self.finish();
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked(self.clock.seconds_left)
        }
    }

    /// Hands the turn to the other player with a fresh clock, returning who moves next.
    pub fn complete_turn(&mut self) -> PlayerId {
        if matches!(self.state, TurnState::RoundOver) {
            return self.current;
        }

        self.current = self.current.other();
        self.clock = TurnClock::full();
        self.opponent_waited = Duration::ZERO;
        self.state = match self.current {
            PlayerId::Human => TurnState::CountingDown,
            PlayerId::Opponent => TurnState::WaitingForMove,
        };
        log::debug!("Turn passed to {:?}", self.current);
        self.current
    }

    /// Drops the queued opponent move, the clock keeps running.
    pub fn resume_countdown(&mut self) {
        if matches!(self.state, TurnState::WaitingForMove) {
            self.opponent_waited = Duration::ZERO;
            self.state = TurnState::CountingDown;
        }
    }

    /// Stops the clock and cancels anything queued, permanently for this round.
    pub fn finish(&mut self) {
        self.state = TurnState::RoundOver;
        self.opponent_waited = Duration::ZERO;
    }

    /// Time until the next scheduled action, `None` once the round is over. While the opponent is queued this is
    /// whichever comes first of its move and the next clock tick.
    pub fn next_deadline(&self) -> Option<Duration> {
        let tick = SECOND.saturating_sub(self.clock.partial);
        match self.state {
            TurnState::CountingDown => Some(tick),
            TurnState::WaitingForMove => Some(tick.min(self.opponent_delay.saturating_sub(self.opponent_waited))),
            TurnState::RoundOver => None,
        }
    }

    /// Lets `elapsed` pass without crossing [`Self::next_deadline`].
    pub fn elapse(&mut self, elapsed: Duration) {
        match self.state {
            TurnState::CountingDown => self.clock.partial += elapsed,
            TurnState::WaitingForMove => {
                self.clock.partial += elapsed;
                self.opponent_waited += elapsed;
            }
            TurnState::RoundOver => {}
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(Duration::from_millis(GameConfig::DEFAULT_OPPONENT_DELAY_MS.into()))
    }
}

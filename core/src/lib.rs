#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use event::*;
pub use generator::*;
pub use policy::*;
pub use session::*;
pub use turn::*;
pub use types::*;
pub use view::*;
pub use win::*;

mod board;
mod error;
mod event;
mod generator;
mod policy;
mod session;
mod turn;
mod types;
mod view;
mod win;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board.
    pub size: Coord,
    pub mines: CellCount,
    /// Pause before the opponent plays, purely for pacing.
    pub opponent_delay_ms: u32,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 4;
    pub const DEFAULT_MINES: CellCount = 2;
    pub const DEFAULT_OPPONENT_DELAY_MS: u32 = 400;

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = Self {
            size,
            mines,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub const fn with_opponent_delay_ms(self, opponent_delay_ms: u32) -> Self {
        Self {
            opponent_delay_ms,
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::InvalidBoardSize);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms as u64)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            mines: Self::DEFAULT_MINES,
            opponent_delay_ms: Self::DEFAULT_OPPONENT_DELAY_MS,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    MineHit { coords: Coord2 },
    Timeout,
}

/// Who was on the move when the round was lost, and why.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loss {
    pub player: PlayerId,
    pub cause: LossCause,
}

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
/// - InProgress -> Exhausted
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    Won(PlayerId),
    Lost(Loss),
    /// Every safe cell was claimed without a line of three
    Exhausted,
}

impl RoundState {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Indicates the round has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        !self.is_in_progress()
    }

    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Self::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of a move
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Out of bounds, already claimed, not this player's turn, or round over
    Ignored,
    Claimed,
    MineHit,
    Won,
    Exhausted,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            Ignored => false,
            Claimed => true,
            MineHit => true,
            Won => true,
            Exhausted => true,
        }
    }

    /// Whether this outcome ended the round
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::MineHit | Self::Won | Self::Exhausted)
    }
}

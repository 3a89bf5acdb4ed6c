use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete state changes queued by a [`GameSession`] for renderers, sound and effects to consume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    BoardInitialized { board: BoardView },
    TurnStarted { player: PlayerId, seconds_left: u8 },
    ClockTick { seconds_left: u8 },
    CellClaimed { coords: Coord2, player: PlayerId },
    MineHit { coords: Coord2 },
    RoundWon { player: PlayerId, line: WinningLine },
    RoundExhausted,
    TurnTimeout { player: PlayerId },
    /// Every mine on the board, sent once when the round ends
    MinesRevealed { mines: Vec<Coord2> },
}

impl GameEvent {
    /// Whether this event ends the round
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::MineHit { .. } | Self::RoundWon { .. } | Self::RoundExhausted | Self::TurnTimeout { .. }
        )
    }
}

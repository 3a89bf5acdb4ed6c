use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Minimum run of same-player claims that wins the round.
pub const LINE_LENGTH: usize = 3;

/// A completed run of claims through the most recent move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub axis: Axis,
    /// Every cell of the run in forward axis order, which may be longer than [`LINE_LENGTH`].
    pub cells: SmallVec<[Coord2; 4]>,
}

/// Whether claiming `coords` completed a line of three or more for `player`.
pub fn check_win(board: &Board, coords: Coord2, player: PlayerId) -> bool {
    winning_line(board, coords, player).is_some()
}

/// Scans the four axes through `coords` in fixed order and reports the first one whose run reaches
/// [`LINE_LENGTH`].
pub fn winning_line(board: &Board, coords: Coord2, player: PlayerId) -> Option<WinningLine> {
    let side = board.size();
    let owned = |pos: &Coord2| board[*pos].claimed_by == Some(player);

    Axis::ALL.into_iter().find_map(|axis| {
        let (d_row, d_col) = axis.delta();
        let backward: SmallVec<[Coord2; 4]> = RayIter::new(coords, (-d_row, -d_col), side)
            .take_while(owned)
            .collect();
        let forward = RayIter::new(coords, (d_row, d_col), side).take_while(owned);

        let mut cells: SmallVec<[Coord2; 4]> = backward.into_iter().rev().collect();
        cells.push(coords);
        cells.extend(forward);

        if cells.len() >= LINE_LENGTH {
            log::debug!("{:?} completed a {:?} line: {:?}", player, axis, cells);
            Some(WinningLine { axis, cells })
        } else {
            None
        }
    })
}

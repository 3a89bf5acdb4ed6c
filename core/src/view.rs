use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may show for a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Claimed(PlayerId),
    /// Only ever shown once the round is over
    Mine,
}

impl CellView {
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Player-visible snapshot of the board, safe to hand to a renderer without leaking mines mid-round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub mines: CellCount,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_board(board: &Board, reveal_mines: bool) -> Self {
        let size = board.size();
        let mut cells: Array2<CellView> = Array2::default((size, size).to_nd_index());

        for (coords, cell) in board.iter_cells() {
            cells[coords.to_nd_index()] = match (cell.claimed_by, cell.mine) {
                (Some(player), _) => CellView::Claimed(player),
                (None, true) if reveal_mines => CellView::Mine,
                _ => CellView::Hidden,
            };
        }

        Self {
            size,
            mines: board.mine_count(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // every column is as wide as the largest index
        let width = self.size.saturating_sub(1).checked_ilog10().unwrap_or(0) as usize + 1;
        let label = width.max(2);

        write!(f, "{:label$}", "")?;
        for col in 0..self.size {
            write!(f, " {col:>width$}")?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.outer_iter().enumerate() {
            write!(f, "{row:>label$}")?;
            for cell in cells.iter() {
                let glyph = match cell {
                    CellView::Hidden => '.',
                    CellView::Claimed(player) => player.symbol(),
                    CellView::Mine => '*',
                };
                write!(f, " {glyph:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// One square of the grid. A claimed cell is never a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub mine: bool,
    pub claimed_by: Option<PlayerId>,
}

impl Cell {
    pub const fn is_claimed(self) -> bool {
        self.claimed_by.is_some()
    }

    /// Neither mined nor claimed, i.e. a cell either player could still take safely.
    pub const fn is_open(self) -> bool {
        !self.mine && self.claimed_by.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    side: Coord,
    mine_count: CellCount,
    claimed_count: CellCount,
}

impl Board {
    /// Allocates an empty `side × side` grid that will hold `mine_count` mines once placed.
    pub fn initialize(side: Coord, mine_count: CellCount) -> Result<Self> {
        if side == 0 {
            return Err(GameError::InvalidBoardSize);
        }
        if mine_count >= mult(side, side) {
            return Err(GameError::TooManyMines);
        }

        Ok(Self {
            cells: Array2::default((side, side).to_nd_index()),
            side,
            mine_count,
            claimed_count: 0,
        })
    }

    /// Drops mines on uniformly random cells, drawing again on collisions, until exactly `mine_count` cells are
    /// mined. Terminates because at least one cell is always left safe.
    pub fn place_mines<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut placed = self.placed_mines();
        let mut collisions = 0usize;

        while placed < self.mine_count {
            let coords = (rng.random_range(0..self.side), rng.random_range(0..self.side));
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.mine || cell.is_claimed() {
                collisions += 1;
                continue;
            }
            cell.mine = true;
            placed += 1;
        }

        log::debug!(
            "Placed {} mines on {}x{} board ({} redraws)",
            placed,
            self.side,
            self.side,
            collisions
        );
    }

    /// Replaces the mine layout with the given cells, which must be distinct, in bounds, and exactly as many as
    /// the configured mine count.
    pub fn set_mines(&mut self, mine_coords: &[Coord2]) -> Result<()> {
        let mut mine_mask: Array2<bool> = Array2::default((self.side, self.side).to_nd_index());
        for &coords in mine_coords {
            let coords = self.validate_coords(coords)?;
            if self[coords].is_claimed() {
                return Err(GameError::AlreadyClaimed);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        if count != usize::from(self.mine_count) {
            log::warn!(
                "Mine layout has {} distinct mines, configured for {}",
                count,
                self.mine_count
            );
            return Err(GameError::MineLayoutMismatch);
        }

        self.cells
            .zip_mut_with(&mine_mask, |cell, &is_mine| cell.mine = is_mine);
        Ok(())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.side && coords.1 < self.side {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Marks a safe, unclaimed cell as owned by `player`.
    ///
    /// Hitting a mine is reported as [`GameError::IsMine`] and leaves the cell untouched, the caller decides what
    /// that means for the round.
    pub fn claim(&mut self, coords: Coord2, player: PlayerId) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        if cell.is_claimed() {
            return Err(GameError::AlreadyClaimed);
        }
        if cell.mine {
            return Err(GameError::IsMine);
        }

        cell.claimed_by = Some(player);
        self.claimed_count += 1;
        Ok(())
    }

    pub fn remaining_safe_cells(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_open()).count() as CellCount
    }

    pub fn size(&self) -> Coord {
        self.side
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.side, self.side)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn claimed_count(&self) -> CellCount {
        self.claimed_count
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.iter_cells()
            .filter(|(_, cell)| cell.mine)
            .map(|(coords, _)| coords)
            .collect()
    }

    pub fn open_coords(&self) -> Vec<Coord2> {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_open())
            .map(|(coords, _)| coords)
            .collect()
    }

    fn placed_mines(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.mine).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

use alloc::vec::Vec;

use super::*;

/// Places mines on the same given cells every round, for scripted games and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn populate<R: Rng + ?Sized>(&mut self, board: &mut Board, _rng: &mut R) -> Result<()> {
        board.set_mines(&self.mines)
    }
}

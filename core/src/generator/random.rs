use super::*;

/// Purely random layout, every cell equally likely to hold a mine. Reproducible through the session seed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RandomMinefieldGenerator;

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn populate<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> Result<()> {
        board.place_mines(rng);

        // double check mine count
        let count = board.mine_coords().len();
        if count != usize::from(board.mine_count()) {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                count,
                board.mine_count()
            );
            return Err(GameError::MineLayoutMismatch);
        }
        Ok(())
    }
}

use rand::Rng;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy that lays out the mines of a freshly initialized board, once per round.
pub trait MinefieldGenerator {
    fn populate<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> Result<()>;
}

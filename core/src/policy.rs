use rand::Rng;
use rand::seq::IndexedRandom;

use crate::*;

/// Picks the opponent's move: any cell that is neither claimed nor mined, uniformly at random.
///
/// The opponent never looks at the human's claims and never plans ahead, but it also never steps on a mine, since
/// only mine-free cells are candidates. Returns `None` when no such cell is left.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord2> {
    let candidates = board.open_coords();
    let choice = candidates.choose(rng).copied();
    log::debug!(
        "Opponent chose {:?} out of {} candidates",
        choice,
        candidates.len()
    );
    choice
}

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Cell is already claimed")]
    AlreadyClaimed,
    #[error("Cell holds a mine")]
    IsMine,
    #[error("Too many mines, at least one cell must stay safe")]
    TooManyMines,
    #[error("Board size must be at least 1")]
    InvalidBoardSize,
    #[error("Mine layout does not match the configured mine count")]
    MineLayoutMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board width and height must be positive")]
    InvalidDimensions,
    #[error("Mine count does not fit on the board")]
    InvalidMineCount,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("No cell left to place a mine on")]
    MinePlacementExhausted,
}

pub type Result<T> = core::result::Result<T, GameError>;

use thiserror::Error;

use crate::Coord;

/// Rejected play-area geometry
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(Coord),

    #[error("{axis} of {length} is not a multiple of the cell size {cell_size}")]
    Misaligned { axis: &'static str, length: Coord, cell_size: Coord },

    #[error("{axis} needs at least {min} cells, got {cells}")]
    TooSmall { axis: &'static str, cells: Coord, min: Coord },
}

/// Failures that stop the game from starting or shutting down cleanly
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("could not initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

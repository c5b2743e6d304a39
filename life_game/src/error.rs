// error.rs - Startup failures

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {rows}x{columns})")]
    EmptyGrid { rows: usize, columns: usize },
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
    #[error("window title must not be empty")]
    EmptyTitle,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to start the ticker runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}

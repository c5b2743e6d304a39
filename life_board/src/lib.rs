//! Grid engine for Conway's Game of Life.
//!
//! [`Board`] owns a fixed-size grid of cells and advances it one generation
//! at a time under the B3/S23 rule in [`rule::next_state`].

pub mod board;
pub mod rule;

pub use board::Board;
pub use rule::next_state;

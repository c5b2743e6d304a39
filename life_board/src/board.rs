// board.rs - Fixed-size, double-buffered Game of Life grid

use log::trace;
use rand::Rng;

use crate::rule::next_state;

/// A rows × columns grid of cells, alive or dead.
///
/// Cells are stored row-major. `step` writes the next generation into a
/// back buffer and swaps it in, so the dimensions and both allocations live
/// for as long as the board does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
    next_cells: Vec<bool>,
    generation: u64,
}

impl Board {
    /// Creates a board with every cell dead.
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows != 0 && columns != 0, "board must have at least one row and one column");
        let size = rows.checked_mul(columns).expect("board too big");
        Self {
            rows,
            columns,
            cells: vec![false; size],
            next_cells: vec![false; size],
            generation: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Steps applied since the board was created, cleared or randomized.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside the {}x{} board",
            self.rows,
            self.columns
        );
        row * self.columns + col
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.index(row, col);
        self.cells[i] = alive;
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let i = self.index(row, col);
        self.cells[i] = !self.cells[i];
        self.cells[i]
    }

    /// Live cells among the up to eight in-bounds neighbors of (row, col).
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        // Validates the center even though it is not counted.
        self.index(row, col);

        let rows = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);
        let mut count = 0;
        for r in rows {
            for c in col.saturating_sub(1)..=(col + 1).min(self.columns - 1) {
                if (r, c) != (row, col) && self.cells[r * self.columns + c] {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn will_be_alive(&self, row: usize, col: usize) -> bool {
        next_state(self.get(row, col), self.count_neighbors(row, col))
    }

    /// Advances one generation. Every cell is computed against the
    /// pre-step grid before any of them is replaced.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let alive = self.will_be_alive(row, col);
                self.next_cells[row * self.columns + col] = alive;
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next_cells);
        self.generation += 1;
        trace!("generation {} ({} live)", self.generation, self.live_cells());
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Makes each cell independently alive with probability 0.5 and resets
    /// the generation counter.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.random_bool(0.5);
        }
        self.generation = 0;
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Every cell as `(row, col, alive)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (i / columns, i % columns, alive))
    }
}

// layout.rs - Pixel geometry of the window and the grid

use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::config::GameConfig;

/// Where the grid sits inside the window, in window-content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    rows: usize,
    columns: usize,
    cell_size: f32,
    origin: Pos2,
    window: Vec2,
}

impl Layout {
    pub fn new(config: &GameConfig) -> Self {
        let text_block = (config.instructions.len() as u32 * config.line_spacing) as f32;
        let cell_size = config.cell_size as f32;
        let half_border = (config.border / 2) as f32;

        let width = config.columns as f32 * cell_size + config.border as f32;
        let height = config.rows as f32 * cell_size + text_block + config.border as f32;

        Self {
            rows: config.rows,
            columns: config.columns,
            cell_size,
            origin: pos2(half_border, text_block + half_border),
            window: vec2(width.min(config.max_width as f32), height.min(config.max_height as f32)),
        }
    }

    /// Inner window size, already capped to the configured maximum.
    pub fn window_size(&self) -> Vec2 {
        self.window
    }

    /// Top-left corner of cell (0, 0).
    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    pub fn grid_rect(&self) -> Rect {
        Rect::from_min_size(
            self.origin(),
            vec2(self.columns as f32, self.rows as f32) * self.cell_size,
        )
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::from_min_size(
            self.origin + vec2(col as f32, row as f32) * self.cell_size,
            Vec2::splat(self.cell_size),
        )
    }

    /// The cell under `pos`, or `None` when `pos` is outside the grid.
    pub fn cell_at(&self, pos: Pos2) -> Option<(usize, usize)> {
        let local = (pos - self.origin) / self.cell_size;
        let (row, col) = (local.y.floor(), local.x.floor());
        if row < 0.0 || col < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.columns).then_some((row, col))
    }

    /// True when the capped window cannot show the whole grid.
    pub fn is_clipped(&self) -> bool {
        let bottom_right = self.grid_rect().max;
        bottom_right.x > self.window.x || bottom_right.y > self.window.y
    }
}

// config.rs - Window, grid and timing settings

use std::time::Duration;

use crate::error::ConfigError;

/// Everything the game needs at construction time.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    /// Side of one cell in pixels.
    pub cell_size: u32,
    pub tick_interval: Duration,
    /// Total margin around the grid; half of it sits on each side.
    pub border: u32,
    pub max_width: u32,
    pub max_height: u32,
    /// Vertical distance between instruction lines.
    pub line_spacing: u32,
    /// Baseline of the first instruction line, and the title's shift left of center.
    pub text_offset: u32,
    pub font_size: f32,
    pub title: String,
    pub instructions: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            columns: 30,
            cell_size: 30,
            tick_interval: Duration::from_millis(200),
            border: 100,
            max_width: 1500,
            max_height: 1300,
            line_spacing: 20,
            text_offset: 50,
            font_size: 20.0,
            title: "Game of Life".to_owned(),
            instructions: [
                "Click to toggle cells",
                "Press ENTER to start/stop the game",
                "Press C to clear the grid",
                "Press R to randomize the grid",
                "Have fun!",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid { rows: self.rows, columns: self.columns });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.instructions.len(), 5);
    }

    #[test]
    fn rejects_degenerate_values() {
        let empty = GameConfig { rows: 0, ..GameConfig::default() };
        assert_eq!(empty.validate(), Err(ConfigError::EmptyGrid { rows: 0, columns: 30 }));

        let cell = GameConfig { cell_size: 0, ..GameConfig::default() };
        assert_eq!(cell.validate(), Err(ConfigError::ZeroCellSize));

        let tick = GameConfig { tick_interval: Duration::ZERO, ..GameConfig::default() };
        assert_eq!(tick.validate(), Err(ConfigError::ZeroTickInterval));

        let title = GameConfig { title: "  ".into(), ..GameConfig::default() };
        assert_eq!(title.validate(), Err(ConfigError::EmptyTitle));
    }
}

// session.rs - Run/stop state machine bridging input and ticks to the board

use std::time::Duration;

use egui::{Key, Pos2};
use life_board::Board;
use log::{debug, info};
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::layout::Layout;
use crate::ticker::Ticker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// A user request, already decoded from raw input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    ToggleRun,
    Clear,
    Randomize,
    /// Primary click at a position in window-content coordinates.
    Click(Pos2),
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Enter => Some(Command::ToggleRun),
            Key::C     => Some(Command::Clear),
            Key::R     => Some(Command::Randomize),
            _          => None,
        }
    }
}

/// Owns the board and is the only thing that mutates it.
///
/// Every method returns `true` when the board changed and needs a redraw.
pub struct Session<T: Ticker> {
    board: Board,
    layout: Layout,
    tick_interval: Duration,
    state: RunState,
    ticker: T,
    rng: StdRng,
}

impl<T: Ticker> Session<T> {
    pub fn new(config: &GameConfig, ticker: T, rng: StdRng) -> Self {
        Self {
            board: Board::new(config.rows, config.columns),
            layout: Layout::new(config),
            tick_interval: config.tick_interval,
            state: RunState::Stopped,
            ticker,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::ToggleRun => {
                if self.is_running() {
                    self.stop();
                } else {
                    self.start();
                }
                false
            }
            Command::Clear => {
                self.stop();
                self.board.clear();
                info!("grid cleared");
                true
            }
            Command::Randomize => {
                self.stop();
                self.board.randomize(&mut self.rng);
                info!("grid randomized ({} live)", self.board.live_cells());
                true
            }
            Command::Click(pos) => self.click(pos),
        }
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.ticker.start(self.tick_interval);
        self.state = RunState::Running;
        info!("simulation started at generation {}", self.board.generation());
    }

    /// Stops the ticker before returning, so nothing steps the board
    /// until the next `start`.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.ticker.stop();
        self.state = RunState::Stopped;
        info!("simulation stopped at generation {}", self.board.generation());
    }

    fn click(&mut self, pos: Pos2) -> bool {
        if self.is_running() {
            return false;
        }
        match self.layout.cell_at(pos) {
            Some((row, col)) => {
                let alive = self.board.toggle(row, col);
                debug!("toggled cell ({row}, {col}) -> {}", if alive { "alive" } else { "dead" });
                true
            }
            None => false,
        }
    }

    /// Steps the board once for every tick that fired since the last call.
    pub fn advance(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let due = self.ticker.take_due();
        for _ in 0..due {
            self.board.step();
        }
        due > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Ticker whose ticks are fired by hand.
    #[derive(Default)]
    struct ManualTicker {
        active: bool,
        due: usize,
        starts: usize,
    }

    impl ManualTicker {
        fn fire(&mut self, ticks: usize) {
            if self.active {
                self.due += ticks;
            }
        }
    }

    impl Ticker for ManualTicker {
        fn start(&mut self, _period: Duration) {
            self.active = true;
            self.starts += 1;
        }

        fn stop(&mut self) {
            self.active = false;
            self.due = 0;
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn take_due(&mut self) -> usize {
            std::mem::take(&mut self.due)
        }
    }

    fn session() -> Session<ManualTicker> {
        Session::new(&GameConfig::default(), ManualTicker::default(), StdRng::seed_from_u64(3))
    }

    fn click_at(session: &Session<ManualTicker>, row: usize, col: usize) -> Command {
        Command::Click(session.layout().cell_rect(row, col).center())
    }

    #[test]
    fn starts_stopped_and_empty() {
        let s = session();
        assert_eq!(s.state(), RunState::Stopped);
        assert!(s.board().is_empty());
        assert!(!s.ticker.is_active());
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::from_key(Key::Enter), Some(Command::ToggleRun));
        assert_eq!(Command::from_key(Key::C), Some(Command::Clear));
        assert_eq!(Command::from_key(Key::R), Some(Command::Randomize));
        assert_eq!(Command::from_key(Key::Space), None);
    }

    #[test]
    fn click_toggles_exactly_one_cell_when_stopped() {
        let mut s = session();
        let cmd = click_at(&s, 4, 9);
        assert!(s.apply(cmd));
        assert!(s.board().get(4, 9));
        assert_eq!(s.board().live_cells(), 1);

        assert!(s.apply(cmd));
        assert!(s.board().is_empty());
    }

    #[test]
    fn click_outside_grid_is_ignored() {
        let mut s = session();
        assert!(!s.apply(Command::Click(egui::pos2(5.0, 5.0))));
        assert!(s.board().is_empty());
    }

    #[test]
    fn click_while_running_has_no_effect() {
        let mut s = session();
        s.apply(Command::ToggleRun);
        assert!(s.is_running());
        let cmd = click_at(&s, 0, 0);
        assert!(!s.apply(cmd));
        assert!(s.board().is_empty());
    }

    #[test]
    fn ticks_step_only_while_running() {
        let mut s = session();
        for col in 1..4 {
            s.apply(click_at(&s, 5, col));
        }

        s.ticker.fire(1);
        assert!(!s.advance());
        assert_eq!(s.board().generation(), 0);

        s.apply(Command::ToggleRun);
        s.ticker.fire(2);
        assert!(s.advance());
        assert_eq!(s.board().generation(), 2);
        assert!(!s.advance());
    }

    #[test]
    fn stop_then_start_resumes_stepping() {
        let mut s = session();
        s.apply(Command::ToggleRun);
        s.ticker.fire(1);
        s.advance();

        s.apply(Command::ToggleRun);
        assert_eq!(s.state(), RunState::Stopped);
        assert!(!s.ticker.is_active());
        s.ticker.fire(5);
        assert!(!s.advance());

        s.apply(Command::ToggleRun);
        assert_eq!(s.state(), RunState::Running);
        assert_eq!(s.ticker.starts, 2);
        s.ticker.fire(1);
        assert!(s.advance());
        assert_eq!(s.board().generation(), 2);
    }

    #[test]
    fn clear_and_randomize_force_a_stop() {
        let mut s = session();
        s.apply(Command::ToggleRun);
        assert!(s.apply(Command::Randomize));
        assert_eq!(s.state(), RunState::Stopped);
        assert!(!s.ticker.is_active());
        assert!(s.board().live_cells() > 0);

        s.apply(Command::ToggleRun);
        assert!(s.apply(Command::Clear));
        assert_eq!(s.state(), RunState::Stopped);
        assert!(!s.ticker.is_active());
    }

    #[test]
    fn randomize_then_clear_is_empty() {
        let mut s = session();
        s.apply(Command::Randomize);
        s.apply(Command::Clear);
        assert!(s.board().is_empty());
        assert_eq!(s.board().generation(), 0);
    }
}

// ui.rs - eframe front end: input, tick draining and painting

use eframe::egui;
use egui::{Color32, Event, FontId, Stroke};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::config::GameConfig;
use crate::overlay::StaticOverlay;
use crate::session::{Command, RunState, Session};
use crate::ticker::IntervalTicker;

const BACKGROUND: Color32 = Color32::from_gray(238);
const LIVE_COLOR: Color32 = Color32::BLACK;
const DEAD_COLOR: Color32 = Color32::WHITE;
const GRID_LINE: Color32 = Color32::GRAY;

pub struct GameOfLife {
    session: Session<IntervalTicker>,
    config: GameConfig,
    overlay: Option<StaticOverlay>,
    // Declared last: the ticker's task must be aborted before its runtime drops.
    _runtime: Runtime,
}

impl GameOfLife {
    pub fn new(cc: &eframe::CreationContext<'_>, config: GameConfig, runtime: Runtime) -> Self {
        let ctx = cc.egui_ctx.clone();
        let ticker = IntervalTicker::new(
            runtime.handle().clone(),
            Arc::new(move || ctx.request_repaint()),
        );
        let session = Session::new(&config, ticker, StdRng::from_os_rng());

        Self {
            session,
            config,
            overlay: None,
            _runtime: runtime,
        }
    }

    fn read_commands(ctx: &egui::Context) -> Vec<Command> {
        ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    Event::Key { key, pressed: true, repeat: false, .. } => Command::from_key(*key),
                    _ => None,
                })
                .collect()
        })
    }

    fn paint_grid(&self, painter: &egui::Painter, offset: egui::Vec2) {
        let layout = self.session.layout();
        for (row, col, alive) in self.session.board().cells() {
            let rect = layout.cell_rect(row, col).translate(offset);
            let fill = if alive { LIVE_COLOR } else { DEAD_COLOR };
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, GRID_LINE));
        }
    }

    fn paint_status(&self, painter: &egui::Painter, offset: egui::Vec2) {
        let board = self.session.board();
        let state = match self.session.state() {
            RunState::Running => "running",
            RunState::Stopped => "stopped",
        };
        let text = format!(
            "Generation: {}   Live cells: {}   ({})",
            board.generation(),
            board.live_cells(),
            state
        );
        let pos = self.session.layout().grid_rect().left_bottom() + egui::vec2(0.0, 4.0) + offset;
        painter.text(
            pos,
            egui::Align2::LEFT_TOP,
            text,
            FontId::proportional(self.config.font_size * 0.75),
            Color32::DARK_GRAY,
        );
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed = false;
        for command in Self::read_commands(ctx) {
            changed |= self.session.apply(command);
        }
        changed |= self.session.advance();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click());
                let offset = response.rect.min.to_vec2();

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        changed |= self.session.apply(Command::Click(pos - offset));
                    }
                }

                let window = self.session.layout().window_size();
                self.overlay
                    .get_or_insert_with(|| StaticOverlay::build(&painter, &self.config, window))
                    .paint(&painter, offset);
                self.paint_grid(&painter, offset);
                self.paint_status(&painter, offset);
            });

        if changed {
            ctx.request_repaint();
        }
    }
}

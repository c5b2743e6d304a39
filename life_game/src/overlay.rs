// overlay.rs - Title and instructions, laid out once and reused every frame

use std::sync::Arc;

use egui::{Color32, FontId, Galley, Painter, Pos2, Vec2, pos2};

use crate::config::GameConfig;

/// Pre-laid-out static text. Built on the first frame, when fonts exist,
/// and never rebuilt.
pub struct StaticOverlay {
    texts: Vec<(Pos2, Arc<Galley>)>,
}

impl StaticOverlay {
    pub fn build(painter: &Painter, config: &GameConfig, window: Vec2) -> Self {
        let font = FontId::proportional(config.font_size);
        let layout = |text: &str| painter.layout_no_wrap(text.to_owned(), font.clone(), Color32::BLACK);

        // Positions are text baselines, as in the window's original layout.
        let mut baselines = Vec::with_capacity(config.instructions.len() + 1);
        baselines.push((
            pos2(window.x / 2.0 - config.text_offset as f32, (config.border / 2) as f32),
            config.title.as_str(),
        ));
        for (i, line) in config.instructions.iter().enumerate() {
            let y = config.text_offset + config.line_spacing * i as u32;
            baselines.push((pos2(config.line_spacing as f32, y as f32), line.as_str()));
        }

        let texts = baselines
            .into_iter()
            .map(|(baseline, text)| {
                let galley = layout(text);
                (pos2(baseline.x, baseline.y - galley.size().y), galley)
            })
            .collect();
        Self { texts }
    }

    pub fn paint(&self, painter: &Painter, offset: Vec2) {
        for (pos, galley) in &self.texts {
            painter.galley(*pos + offset, Arc::clone(galley));
        }
    }
}

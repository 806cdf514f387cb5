// Card pipeline: text → layout → recorded drawing plan.
// Synchronous; handlers run it inside tokio::task::spawn_blocking.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::layout::{layout_text, CanvasSpec, LayoutConfig, LayoutError, MetricTableMeasurer};
use crate::render::emoji::EmojiMode;
use crate::render::render_layout;
use crate::render::surface::{DrawCommand, RecordingSurface};

/// A fully laid-out card: the chosen lines and size plus every draw call needed to paint it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedCard {
    pub canvas: CanvasSpec,
    pub lines: Vec<String>,
    pub font_size_px: u32,
    pub first_baseline_px: f32,
    pub line_height_px: f32,
    pub commands: Vec<DrawCommand>,
}

/// Lays out and draws `text`. Each call owns its measurer and surface, so concurrent
/// cards never share drawing state.
pub fn render_card(
    text: &str,
    canvas: &CanvasSpec,
    config: &LayoutConfig,
) -> Result<RenderedCard, LayoutError> {
    canvas.validate()?;
    let measurer = MetricTableMeasurer;
    let mut surface = RecordingSurface::new(config.emoji == EmojiMode::Images);

    let layout = layout_text(text, canvas, config, &measurer)?;
    let summary = render_layout(&layout, canvas, config, &measurer, &mut surface)?;

    Ok(RenderedCard {
        canvas: *canvas,
        lines: layout.lines,
        font_size_px: layout.font_size_px,
        first_baseline_px: summary.first_baseline_px,
        line_height_px: summary.line_height_px,
        commands: surface.into_commands(),
    })
}

// Word Renderer: draws a laid-out block word by word onto a DrawingSurface.
// Each line is centred horizontally as a whole; the block is centred vertically.

pub mod color;
pub mod emoji;
pub mod surface;

use serde::{Deserialize, Serialize};

use crate::layout::{
    BlockPlacement, CanvasSpec, FontDescriptor, LayoutConfig, LayoutError, MeasurementProvider,
    TextLayout,
};
use color::ColorClassifier;
use emoji::{contains_emoji, split_runs, EmojiMode, Run};
use surface::DrawingSurface;

/// Geometry the renderer settled on, reported back alongside the draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSummary {
    pub first_baseline_px: f32,
    pub line_height_px: f32,
}

/// Draws single words at a fixed font, choosing each word's color.
pub struct WordRenderer<'a, M: ?Sized, S: ?Sized> {
    measure: &'a M,
    surface: &'a mut S,
    font: FontDescriptor,
    colors: &'a ColorClassifier,
    emoji: EmojiMode,
}

impl<'a, M, S> WordRenderer<'a, M, S>
where
    M: MeasurementProvider + ?Sized,
    S: DrawingSurface + ?Sized,
{
    pub fn new(
        measure: &'a M,
        surface: &'a mut S,
        font: FontDescriptor,
        colors: &'a ColorClassifier,
        emoji: EmojiMode,
    ) -> Self {
        Self {
            measure,
            surface,
            font,
            colors,
            emoji,
        }
    }

    /// Draws `word` with its left edge at `x` and baseline at `y`.
    ///
    /// Returns the horizontal advance: the width of `word` plus one trailing space.
    /// A trailing `!` glued to a word is drawn separately right after the prefix, so
    /// the prefix is classified on its own. Repeated `!` unwind one at a time.
    pub fn draw_word(&mut self, word: &str, x: f32, y: f32) -> Result<f32, LayoutError> {
        if word.chars().count() > 1 && word.ends_with('!') {
            let prefix = &word[..word.len() - 1];
            self.draw_word(prefix, x, y)?;
            let prefix_width = self.width_of(prefix)?;
            self.draw_plain("!", x + prefix_width, y)?;
        } else {
            self.draw_plain(word, x, y)?;
        }
        self.width_of(&format!("{word} "))
    }

    fn draw_plain(&mut self, word: &str, x: f32, y: f32) -> Result<(), LayoutError> {
        if word.is_empty() {
            return Ok(());
        }
        let color = self.colors.get_color(word);

        let substitute = self.emoji == EmojiMode::Images
            && self.surface.supports_emoji()
            && contains_emoji(word);
        if !substitute {
            return self.surface.draw_glyphs(word, x, y, &self.font, color);
        }

        let mut cursor = x;
        for run in split_runs(word) {
            match run {
                Run::Text(text) => {
                    self.surface
                        .draw_glyphs(&text, cursor, y, &self.font, color)?;
                    cursor += self.width_of(&text)?;
                }
                Run::Emoji(codepoint) => {
                    self.surface
                        .draw_emoji_glyph(codepoint, cursor, y, self.font.size_px)?;
                    cursor += self.width_of(codepoint.encode_utf8(&mut [0; 4]))?;
                }
            }
        }
        Ok(())
    }

    fn width_of(&self, text: &str) -> Result<f32, LayoutError> {
        Ok(self.measure.measure(text, &self.font)?.width_px)
    }
}

/// Draws every line of `layout` onto `surface`.
pub fn render_layout<M, S>(
    layout: &TextLayout,
    canvas: &CanvasSpec,
    config: &LayoutConfig,
    measure: &M,
    surface: &mut S,
) -> Result<RenderSummary, LayoutError>
where
    M: MeasurementProvider + ?Sized,
    S: DrawingSurface + ?Sized,
{
    let font = config.font(layout.font_size_px);
    let block = measure.measure(&layout.lines.join("\n"), &font)?;
    let placement = BlockPlacement::compute(layout.lines.len().max(1), &block, canvas)?;

    let colors = ColorClassifier::new(
        config.base_color,
        config.special_color,
        &config.special_words,
    );
    let mut renderer = WordRenderer::new(measure, surface, font, &colors, config.emoji);

    for (index, line) in layout.lines.iter().enumerate() {
        let y = placement.baseline(index);
        let line_width = measure.measure(line, &font)?.width_px;
        let mut x = (canvas.width as f32 - line_width) / 2.0;
        for word in line.split(' ') {
            x += renderer.draw_word(word, x, y)?;
        }
    }

    Ok(RenderSummary {
        first_baseline_px: placement.first_baseline,
        line_height_px: placement.line_height,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

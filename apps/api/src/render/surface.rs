//! Drawing surfaces the word renderer paints on.

use serde::{Deserialize, Serialize};

use crate::layout::{FontDescriptor, LayoutError};
use crate::render::color::Color;

/// A raster target. One surface belongs to one render at a time.
pub trait DrawingSurface {
    fn draw_glyphs(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &FontDescriptor,
        color: Color,
    ) -> Result<(), LayoutError>;

    /// Whether `draw_emoji_glyph` is available.
    fn supports_emoji(&self) -> bool {
        false
    }

    /// Draws an emoji image whose box is `size_px` square, baseline at `y`.
    fn draw_emoji_glyph(
        &mut self,
        codepoint: char,
        _x: f32,
        _y: f32,
        _size_px: u32,
    ) -> Result<(), LayoutError> {
        Err(LayoutError::Drawing(format!(
            "surface cannot draw emoji glyph U+{:04X}",
            codepoint as u32
        )))
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Glyphs {
        text: String,
        x: f32,
        y: f32,
        font: FontDescriptor,
        color: Color,
    },
    Emoji {
        codepoint: char,
        x: f32,
        y: f32,
        size_px: u32,
    },
}

/// Surface that records every draw call instead of rasterizing.
///
/// The card endpoint returns the recording as a drawing plan.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    emoji_images: bool,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(emoji_images: bool) -> Self {
        Self {
            emoji_images,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawingSurface for RecordingSurface {
    fn draw_glyphs(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &FontDescriptor,
        color: Color,
    ) -> Result<(), LayoutError> {
        self.commands.push(DrawCommand::Glyphs {
            text: text.to_string(),
            x,
            y,
            font: *font,
            color,
        });
        Ok(())
    }

    fn supports_emoji(&self) -> bool {
        self.emoji_images
    }

    fn draw_emoji_glyph(
        &mut self,
        codepoint: char,
        x: f32,
        y: f32,
        size_px: u32,
    ) -> Result<(), LayoutError> {
        if !self.emoji_images {
            return Err(LayoutError::Drawing(format!(
                "emoji images are disabled (U+{:04X})",
                codepoint as u32
            )));
        }
        self.commands.push(DrawCommand::Emoji {
            codepoint,
            x,
            y,
            size_px,
        });
        Ok(())
    }
}

// Auto-fit text layout engine.
// Decides line breaks and font size for a fixed canvas given only a measurement function.
// Everything here is synchronous and CPU-bound; async callers go through spawn_blocking.

pub mod bisect;
pub mod font_metrics;
pub mod line_height;
pub mod optimizer;
pub mod placement;
pub mod solver;
pub mod wrap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::color::Color;
use crate::render::emoji::EmojiMode;

// Re-export the public API consumed by the card pipeline and handlers.
pub use font_metrics::{
    FontDescriptor, FontFamily, FontWeight, MeasuredText, MeasurementProvider,
    MetricTableMeasurer,
};
pub use optimizer::{layout_text, optimize, TextLayout};
pub use placement::BlockPlacement;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Text does not fit a {canvas_width}x{canvas_height} canvas at any font size")]
    NoFittingSize {
        canvas_width: u32,
        canvas_height: u32,
    },

    #[error("Measurement failed: {0}")]
    Measurement(String),

    #[error("Drawing failed: {0}")]
    Drawing(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Canvas and layout configuration
// ────────────────────────────────────────────────────────────────────────────

/// Pixel dimensions of the target raster. Immutable for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
}

impl CanvasSpec {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width == 0 || self.height == 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "canvas dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// How line breaks are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapStrategy {
    /// Wrap at a configured character count, then solve the font size.
    Fixed { max_line_length_chars: usize },
    /// Search the wrap width that yields the largest font size.
    Optimized,
}

/// Engine-facing configuration for one card style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    pub max_font_size_px: u32,
    pub wrap: WrapStrategy,
    pub base_color: Color,
    pub special_color: Color,
    /// Words drawn in `special_color` (exact match up to 3 chars, fuzzy above).
    pub special_words: Vec<String>,
    pub emoji: EmojiMode,
}

impl LayoutConfig {
    /// Font descriptor for this style at `size_px`.
    pub fn font(&self, size_px: u32) -> FontDescriptor {
        FontDescriptor::new(self.font_family, self.font_weight, size_px)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.max_font_size_px == 0 {
            return Err(LayoutError::InvalidArgument(
                "max_font_size must be positive".to_string(),
            ));
        }
        if let WrapStrategy::Fixed {
            max_line_length_chars: 0,
        } = self.wrap
        {
            return Err(LayoutError::InvalidArgument(
                "max_line_length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Returns the default card style: bold Inter up to 100px, optimized wrapping,
/// white text with gold highlights, no special words, emoji drawn as text.
pub fn default_layout_config() -> LayoutConfig {
    LayoutConfig {
        font_family: FontFamily::Inter,
        font_weight: FontWeight::Bold,
        max_font_size_px: 100,
        wrap: WrapStrategy::Optimized,
        base_color: Color::new(0xff, 0xff, 0xff),
        special_color: Color::new(0xff, 0xd7, 0x00),
        special_words: Vec::new(),
        emoji: EmojiMode::Disabled,
    }
}

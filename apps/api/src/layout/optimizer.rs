//! Layout Optimizer: searches the wrap width that yields the largest fitting font size.
//!
//! # Search
//! A dichotomy over wrap widths in `[0, longest explicit line]`. Each probe wraps the
//! text at the midpoint and solves the font size for the result. The best
//! `(lines, size)` seen so far is carried across probes, seeded from the unwrapped text.
//!
//! - Probe beats the best: adopt it, then check headroom. If two more line heights
//!   fit below the block, try narrower widths (more, shorter lines); otherwise wider.
//! - Probe does not beat the best: try narrower widths.
//!
//! The fitness landscape is not monotonic in wrap width (shorter lines mean more of
//! them), so this is a greedy local search. It always returns a fitting layout but
//! not necessarily the global optimum.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::bisect::{bisect, Narrow, SearchBounds};
use crate::layout::font_metrics::{FontDescriptor, MeasurementProvider};
use crate::layout::placement::BlockPlacement;
use crate::layout::solver::{largest_fitting_size, solve_font_size};
use crate::layout::wrap::{longest_line_length, wrap};
use crate::layout::{CanvasSpec, LayoutConfig, LayoutError, WrapStrategy};

/// Chosen line breaks and font size for one text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLayout {
    /// Lines top to bottom.
    pub lines: Vec<String>,
    pub font_size_px: u32,
}

/// Lays out `text` for `canvas` using the wrap strategy configured in `config`.
///
/// This is the engine's single entry point; the word renderer consumes its result.
pub fn layout_text<M>(
    text: &str,
    canvas: &CanvasSpec,
    config: &LayoutConfig,
    measure: &M,
) -> Result<TextLayout, LayoutError>
where
    M: MeasurementProvider + ?Sized,
{
    config.validate()?;
    let font = config.font(0);

    match config.wrap {
        WrapStrategy::Fixed {
            max_line_length_chars,
        } => {
            let lines = wrap(text, max_line_length_chars)?;
            let font_size_px = solve_font_size(
                &lines.join("\n"),
                canvas,
                &font,
                config.max_font_size_px,
                measure,
            )?;
            Ok(TextLayout {
                lines,
                font_size_px,
            })
        }
        WrapStrategy::Optimized => optimize(text, canvas, &font, config.max_font_size_px, measure),
    }
}

/// Runs the wrap-width search described in the module docs.
pub fn optimize<M>(
    text: &str,
    canvas: &CanvasSpec,
    font: &FontDescriptor,
    max_font_size: u32,
    measure: &M,
) -> Result<TextLayout, LayoutError>
where
    M: MeasurementProvider + ?Sized,
{
    canvas.validate()?;
    if max_font_size == 0 {
        return Err(LayoutError::InvalidArgument(
            "max_font_size must be positive".to_string(),
        ));
    }

    let mut best = TextLayout {
        lines: text.split('\n').map(str::to_string).collect(),
        font_size_px: largest_fitting_size(text, canvas, font, max_font_size, measure)?,
    };

    let mut probes = 0u32;
    let bounds = SearchBounds::new(0, longest_line_length(text));
    bisect::<LayoutError, _>(bounds, |wrap_width| {
        probes += 1;
        let candidate = wrap(text, wrap_width)?;
        let joined = candidate.join("\n");
        let size = largest_fitting_size(&joined, canvas, font, max_font_size, measure)?;

        if size <= best.font_size_px {
            return Ok(Narrow::Shrink);
        }

        let block = measure.measure(&joined, &font.with_size(size))?;
        let placement = BlockPlacement::compute(candidate.len(), &block, canvas)?;
        let roomy = placement.has_headroom(candidate.len(), canvas);
        best = TextLayout {
            lines: candidate,
            font_size_px: size,
        };

        Ok(if roomy { Narrow::Shrink } else { Narrow::Grow })
    })?;

    if best.font_size_px == 0 {
        return Err(LayoutError::NoFittingSize {
            canvas_width: canvas.width,
            canvas_height: canvas.height,
        });
    }

    debug!(
        font_size = best.font_size_px,
        lines = best.lines.len(),
        probes,
        "Wrap-width search settled"
    );
    Ok(best)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

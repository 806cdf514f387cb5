//! Vertical placement of a wrapped block on the canvas.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::MeasuredText;
use crate::layout::line_height::line_height;
use crate::layout::{CanvasSpec, LayoutError};

/// Baseline of the first line and the spacing between consecutive baselines.
///
/// The block is centred vertically: `first_baseline = (height - descent + ascent) / 2`
/// where `ascent`/`descent` come from measuring the whole block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockPlacement {
    pub first_baseline: f32,
    pub line_height: f32,
}

impl BlockPlacement {
    pub fn compute(
        line_count: usize,
        block: &MeasuredText,
        canvas: &CanvasSpec,
    ) -> Result<Self, LayoutError> {
        Ok(Self {
            first_baseline: (canvas.height as f32 - block.descent_px + block.ascent_px) / 2.0,
            line_height: line_height(line_count, block.ascent_px, block.descent_px)?,
        })
    }

    /// Baseline `y` of line `index` (0-based).
    pub fn baseline(&self, index: usize) -> f32 {
        self.first_baseline + index as f32 * self.line_height
    }

    /// Vertical space left between the last baseline and the bottom edge.
    pub fn headroom(&self, line_count: usize, canvas: &CanvasSpec) -> f32 {
        canvas.height as f32 - self.baseline(line_count.saturating_sub(1))
    }

    /// True when at least two more line heights would fit below the last baseline.
    pub fn has_headroom(&self, line_count: usize, canvas: &CanvasSpec) -> bool {
        self.headroom(line_count, canvas) >= 2.0 * self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(ascent_px: f32, descent_px: f32) -> MeasuredText {
        MeasuredText {
            width_px: 100.0,
            ascent_px,
            descent_px,
        }
    }

    #[test]
    fn test_single_line_is_centred() {
        let canvas = CanvasSpec::new(500, 200);
        let placement = BlockPlacement::compute(1, &block(60.0, 20.0), &canvas).unwrap();
        // (200 - 20 + 60) / 2 = 120 → glyph box spans 60..140, centred in 200.
        assert!((placement.first_baseline - 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_baselines_step_by_line_height() {
        let canvas = CanvasSpec::new(500, 400);
        let placement = BlockPlacement::compute(3, &block(80.0, 220.0), &canvas).unwrap();
        let step = placement.baseline(2) - placement.baseline(1);
        assert!((step - placement.line_height).abs() < 1e-4);
        // 300 / 3 * 1.167
        assert!((placement.line_height - 116.7).abs() < 1e-2);
    }

    #[test]
    fn test_headroom_guard() {
        let canvas = CanvasSpec::new(500, 1000);
        let small = BlockPlacement::compute(2, &block(40.0, 60.0), &canvas).unwrap();
        assert!(small.has_headroom(2, &canvas));

        let tall = BlockPlacement::compute(2, &block(400.0, 560.0), &canvas).unwrap();
        assert!(!tall.has_headroom(2, &canvas));
    }
}

//! Font-Size Solver: the largest integer font size at which a block fits the canvas.

use tracing::debug;

use crate::layout::bisect::{bisect, Narrow, SearchBounds};
use crate::layout::font_metrics::{FontDescriptor, MeasurementProvider};
use crate::layout::{CanvasSpec, LayoutError};

/// Returns the largest size in `[1, max_font_size]` at which `text` fits `canvas`.
///
/// `font` supplies family and weight; its size is ignored. A block that fits at no
/// positive size is reported as `LayoutError::NoFittingSize`.
pub fn solve_font_size<M>(
    text: &str,
    canvas: &CanvasSpec,
    font: &FontDescriptor,
    max_font_size: u32,
    measure: &M,
) -> Result<u32, LayoutError>
where
    M: MeasurementProvider + ?Sized,
{
    canvas.validate()?;
    if max_font_size == 0 {
        return Err(LayoutError::InvalidArgument(
            "max_font_size must be positive".to_string(),
        ));
    }

    match largest_fitting_size(text, canvas, font, max_font_size, measure)? {
        0 => Err(LayoutError::NoFittingSize {
            canvas_width: canvas.width,
            canvas_height: canvas.height,
        }),
        size => Ok(size),
    }
}

/// Unvalidated dichotomy over `[0, max_font_size]`; `0` means nothing fits.
///
/// The upper bound is exclusive in the search, so it starts one past the cap.
pub(crate) fn largest_fitting_size<M>(
    text: &str,
    canvas: &CanvasSpec,
    font: &FontDescriptor,
    max_font_size: u32,
    measure: &M,
) -> Result<u32, LayoutError>
where
    M: MeasurementProvider + ?Sized,
{
    let bounds = SearchBounds::new(0, max_font_size as usize + 1);
    let settled = bisect(bounds, |mid| {
        let measured = measure.measure(text, &font.with_size(mid as u32))?;
        let overflows = measured.width_px > canvas.width as f32
            || measured.height_px() > canvas.height as f32;
        Ok::<_, LayoutError>(if overflows {
            Narrow::Shrink
        } else {
            Narrow::Grow
        })
    })?;

    debug!(
        font_size = settled.min,
        max_font_size,
        lines = text.split('\n').count(),
        "Font-size search settled"
    );
    Ok(settled.min as u32)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{
        FontFamily, FontWeight, MeasuredText, MetricTableMeasurer,
    };

    /// Every char is 0.5em wide; ascent 0.8em, descent 0.2em per line.
    struct FixedWidth;

    impl MeasurementProvider for FixedWidth {
        fn measure(&self, text: &str, font: &FontDescriptor) -> Result<MeasuredText, LayoutError> {
            let size = font.size_px as f32;
            let lines: Vec<&str> = text.split('\n').collect();
            let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            Ok(MeasuredText {
                width_px: widest as f32 * 0.5 * size,
                ascent_px: 0.8 * size,
                descent_px: 0.2 * size + (lines.len() - 1) as f32 * size,
            })
        }
    }

    struct Broken;

    impl MeasurementProvider for Broken {
        fn measure(&self, _: &str, _: &FontDescriptor) -> Result<MeasuredText, LayoutError> {
            Err(LayoutError::Measurement("font not registered".to_string()))
        }
    }

    fn font() -> FontDescriptor {
        FontDescriptor::new(FontFamily::Inter, FontWeight::Bold, 0)
    }

    #[test]
    fn test_width_bound_size() {
        // 10 chars * 0.5em = 5em; 5em <= 100px → size <= 20. Height 1em <= 400.
        let canvas = CanvasSpec::new(100, 400);
        let size = solve_font_size("abcdefghij", &canvas, &font(), 200, &FixedWidth).unwrap();
        assert_eq!(size, 20);
    }

    #[test]
    fn test_height_bound_size() {
        // 3 lines → height = 0.8 + 0.2 + 2 = 3em <= 91px → size <= 30.
        let canvas = CanvasSpec::new(10_000, 91);
        let size = solve_font_size("a\nb\nc", &canvas, &font(), 200, &FixedWidth).unwrap();
        assert_eq!(size, 30);
    }

    #[test]
    fn test_cap_is_reachable() {
        let canvas = CanvasSpec::new(10_000, 10_000);
        let size = solve_font_size("tiny", &canvas, &font(), 100, &FixedWidth).unwrap();
        assert_eq!(size, 100);
    }

    #[test]
    fn test_empty_text_returns_cap() {
        let canvas = CanvasSpec::new(1275, 362);
        let size = solve_font_size("", &canvas, &font(), 100, &MetricTableMeasurer).unwrap();
        assert_eq!(size, 100);
    }

    #[test]
    fn test_larger_cap_never_returns_smaller_size() {
        let canvas = CanvasSpec::new(640, 200);
        let text = "This place was\namazing! Highly\nrecommend";
        let mut previous = 0;
        for cap in 1..150 {
            let size =
                largest_fitting_size(text, &canvas, &font(), cap, &MetricTableMeasurer).unwrap();
            assert!(size >= previous, "cap {cap} gave {size} < {previous}");
            assert!(size <= cap);
            previous = size;
        }
    }

    #[test]
    fn test_result_fits_and_next_size_does_not() {
        let canvas = CanvasSpec::new(500, 300);
        let text = "Highly recommend";
        let size = solve_font_size(text, &canvas, &font(), 400, &MetricTableMeasurer).unwrap();
        let at = MetricTableMeasurer.measure(text, &font().with_size(size)).unwrap();
        let above = MetricTableMeasurer
            .measure(text, &font().with_size(size + 1))
            .unwrap();
        assert!(at.width_px <= 500.0 && at.height_px() <= 300.0);
        assert!(above.width_px > 500.0 || above.height_px() > 300.0);
    }

    #[test]
    fn test_nothing_fits_is_no_fitting_size() {
        // Three lines need 3em of height; a 1px canvas fits none of them.
        let canvas = CanvasSpec::new(1, 1);
        let err = solve_font_size("a\nb\nc", &canvas, &font(), 50, &FixedWidth).unwrap_err();
        assert!(matches!(err, LayoutError::NoFittingSize { .. }));
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        let canvas = CanvasSpec::new(100, 100);
        assert!(matches!(
            solve_font_size("a", &canvas, &font(), 0, &FixedWidth),
            Err(LayoutError::InvalidArgument(_))
        ));
        assert!(matches!(
            solve_font_size("a", &CanvasSpec::new(0, 100), &font(), 10, &FixedWidth),
            Err(LayoutError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_measurement_failure_propagates() {
        let canvas = CanvasSpec::new(100, 100);
        let err = solve_font_size("a", &canvas, &font(), 10, &Broken).unwrap_err();
        assert!(matches!(err, LayoutError::Measurement(_)));
    }
}

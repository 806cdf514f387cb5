//! Inter-line spacing derived from the measured block height.
//!
//! The multipliers for 2–5 lines are tuned visual constants. Every other line count
//! (1 included) uses `0.7 / n^1.5 + 1`.

use crate::layout::LayoutError;

fn spacing_multiplier(line_count: usize) -> f32 {
    match line_count {
        2 => 1.275,
        3 => 1.167,
        4 => 1.12,
        5 => 1.095,
        n => 0.7 / (n as f32).powf(1.5) + 1.0,
    }
}

/// Baseline-to-baseline distance for a block of `line_count` lines whose measured
/// bounding box spans `ascent + descent` pixels.
pub fn line_height(line_count: usize, ascent: f32, descent: f32) -> Result<f32, LayoutError> {
    if line_count == 0 {
        return Err(LayoutError::InvalidArgument(
            "line_count must be positive".to_string(),
        ));
    }
    Ok((ascent + descent) / line_count as f32 * spacing_multiplier(line_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_table_multipliers() {
        assert!(approx(line_height(2, 80.0, 20.0).unwrap(), 50.0 * 1.275));
        assert!(approx(line_height(3, 80.0, 10.0).unwrap(), 30.0 * 1.167));
        assert!(approx(line_height(4, 60.0, 20.0).unwrap(), 20.0 * 1.12));
        assert!(approx(line_height(5, 90.0, 10.0).unwrap(), 20.0 * 1.095));
    }

    #[test]
    fn test_single_line_uses_formula() {
        // 0.7 / 1^1.5 + 1 = 1.7
        assert!(approx(line_height(1, 40.0, 10.0).unwrap(), 85.0));
    }

    #[test]
    fn test_six_lines_uses_formula() {
        let expected = 60.0 / 6.0 * (0.7 / 6.0_f32.powf(1.5) + 1.0);
        assert!(approx(line_height(6, 50.0, 10.0).unwrap(), expected));
    }

    #[test]
    fn test_zero_lines_rejected() {
        assert!(matches!(
            line_height(0, 10.0, 2.0),
            Err(LayoutError::InvalidArgument(_))
        ));
    }
}

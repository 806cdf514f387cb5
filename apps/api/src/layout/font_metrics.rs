//! Font descriptors, measured text boxes, and the static metric-table measurer.
//!
//! Character widths are in em units (relative to font size) and scaled to pixels at
//! measurement time. This is an approximation of real glyph advances, but it is
//! deterministic and monotonic in font size, which is all the fitting searches need.
//! Tables cover ASCII 0x20..=0x7E (95 printable characters), index = (char as usize) - 32.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::LayoutError;
use crate::render::emoji::{is_emoji, is_emoji_modifier, ZWJ};

// ────────────────────────────────────────────────────────────────────────────
// Font descriptor
// ────────────────────────────────────────────────────────────────────────────

/// Supported card font families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Humanist sans-serif, the default card face.
    Inter,
    /// Old-style serif.
    EbGaramond,
    /// Condensed display sans-serif.
    Oswald,
}

impl FromStr for FontFamily {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inter" | "sans" => Ok(FontFamily::Inter),
            "eb_garamond" | "garamond" | "serif" => Ok(FontFamily::EbGaramond),
            "oswald" | "condensed" => Ok(FontFamily::Oswald),
            other => Err(LayoutError::InvalidArgument(format!(
                "unknown font family '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FromStr for FontWeight {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "regular" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            other => Err(LayoutError::InvalidArgument(format!(
                "unknown font weight '{other}'"
            ))),
        }
    }
}

/// Family, weight and pixel size of the face used for one measurement or draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size_px: u32,
}

impl FontDescriptor {
    pub fn new(family: FontFamily, weight: FontWeight, size_px: u32) -> Self {
        Self {
            family,
            weight,
            size_px,
        }
    }

    /// Same face at a different pixel size.
    pub fn with_size(&self, size_px: u32) -> Self {
        Self { size_px, ..*self }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement
// ────────────────────────────────────────────────────────────────────────────

/// Pixel bounding box of a text block at a given font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasuredText {
    pub width_px: f32,
    pub ascent_px: f32,
    pub descent_px: f32,
}

impl MeasuredText {
    pub fn height_px(&self) -> f32 {
        self.ascent_px + self.descent_px
    }
}

/// Maps `(text, font)` to a pixel bounding box.
///
/// Implementations must be deterministic and monotonic in `font.size_px`: a larger
/// size never yields a smaller width or height. Both bisection searches rely on it.
/// A provider instance is owned by one layout computation at a time.
pub trait MeasurementProvider {
    fn measure(&self, text: &str, font: &FontDescriptor) -> Result<MeasuredText, LayoutError>;
}

/// Bold faces are measured this much wider than their regular counterpart.
const BOLD_WIDTH_FACTOR: f32 = 1.06;

/// Advance of an emoji glyph, in em.
const EMOJI_WIDTH_EM: f32 = 1.0;

/// Measurer backed by the static width tables below.
///
/// Multi-line text (explicit `\n`) is measured as a block: the width is the widest
/// line, the ascent is one line's ascent, and every line after the first extends the
/// descent by one line gap. Empty text is an empty box.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricTableMeasurer;

impl MeasurementProvider for MetricTableMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> Result<MeasuredText, LayoutError> {
        if text.is_empty() {
            return Ok(MeasuredText::default());
        }

        let metrics = get_metrics(&font.family);
        let size = font.size_px as f32;
        let weight_factor = match font.weight {
            FontWeight::Normal => 1.0,
            FontWeight::Bold => BOLD_WIDTH_FACTOR,
        };

        let mut widest_em = 0.0_f32;
        let mut line_count = 0usize;
        for line in text.split('\n') {
            widest_em = widest_em.max(metrics.measure_str(line));
            line_count += 1;
        }

        let extra_lines = line_count.saturating_sub(1) as f32;
        Ok(MeasuredText {
            width_px: widest_em * weight_factor * size,
            ascent_px: metrics.ascent * size,
            descent_px: (metrics.descent + extra_lines * metrics.line_gap) * size,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Width and vertical metrics for a font family, all in em units.
///
/// `widths[i]` = width of ASCII character `(i + 32)` before `width_scale` is applied.
/// Families without their own table share the Inter table with a scale factor.
pub struct FontMetricTable {
    widths: &'static [f32; 95],
    width_scale: f32,
    /// Fallback width for other non-ASCII characters.
    pub average_char_width: f32,
    pub ascent: f32,
    pub descent: f32,
    /// Baseline-to-baseline distance between consecutive lines of a block.
    pub line_gap: f32,
}

impl FontMetricTable {
    /// Measures the advance width of a single line in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        let mut after_zwj = false;
        let mut width = 0.0;
        for c in s.chars() {
            let code = c as usize;
            width += if (32..=126).contains(&code) {
                self.widths[code - 32] * self.width_scale
            } else if is_emoji(c) {
                // A ZWJ-joined emoji shares the previous one's image.
                if after_zwj {
                    0.0
                } else {
                    EMOJI_WIDTH_EM
                }
            } else if is_emoji_modifier(c) {
                0.0
            } else {
                self.average_char_width
            };
            after_zwj = c == ZWJ;
        }
        width
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters)
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static INTER_WIDTHS: [f32; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
    0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
    // 0     1     2     3     4     5     6     7     8     9
    0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
    // :     ;     <     =     >     ?     @
    0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
    // A     B     C     D     E     F     G     H     I     J     K     L     M
    0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
    // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
    0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
    // [     \     ]     ^     _     `
    0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
    // a     b     c     d     e     f     g     h     i     j     k     l     m
    0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
    // n     o     p     q     r     s     t     u     v     w     x     y     z
    0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
    // {     |     }     ~
    0.33, 0.26, 0.33, 0.59,
];

static INTER_TABLE: FontMetricTable = FontMetricTable {
    widths: &INTER_WIDTHS,
    width_scale: 1.0,
    average_char_width: 0.52,
    ascent: 0.73,
    descent: 0.21,
    line_gap: 1.21,
};

/// EB Garamond, approx. 85% of Inter's advance.
static EB_GARAMOND_TABLE: FontMetricTable = FontMetricTable {
    widths: &INTER_WIDTHS,
    width_scale: 0.85,
    average_char_width: 0.44,
    ascent: 0.70,
    descent: 0.26,
    line_gap: 1.30,
};

/// Oswald, approx. 68% of Inter's advance but taller.
static OSWALD_TABLE: FontMetricTable = FontMetricTable {
    widths: &INTER_WIDTHS,
    width_scale: 0.68,
    average_char_width: 0.35,
    ascent: 0.81,
    descent: 0.19,
    line_gap: 1.48,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: &FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Inter => &INTER_TABLE,
        FontFamily::EbGaramond => &EB_GARAMOND_TABLE,
        FontFamily::Oswald => &OSWALD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

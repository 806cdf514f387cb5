//! Fill colors and the special-word classifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;
use unicode_normalization::UnicodeNormalization;

use crate::layout::LayoutError;

/// Special words up to this many characters must match exactly (ignoring case).
const EXACT_MATCH_MAX_LEN: usize = 3;
/// Longer special words match within this Levenshtein distance.
const FUZZY_MAX_DISTANCE: usize = 2;

/// An opaque RGB fill color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || LayoutError::InvalidArgument(format!("invalid color '{s}'"));
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Picks the fill color for each rendered word.
///
/// Both sides are lowercased and NFC-normalized, so composed and decomposed accents
/// compare equal. Special words of up to three
/// characters must match exactly; longer ones match within an edit distance of two,
/// so "wonderfull" still highlights for "wonderful".
#[derive(Debug, Clone)]
pub struct ColorClassifier {
    base: Color,
    special: Color,
    special_words: Vec<String>,
}

impl ColorClassifier {
    pub fn new<I, S>(base: Color, special: Color, special_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            base,
            special,
            special_words: special_words
                .into_iter()
                .map(|w| fold(w.as_ref().trim()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn get_color(&self, word: &str) -> Color {
        if word.is_empty() {
            return self.base;
        }
        if self.is_special(word) {
            self.special
        } else {
            self.base
        }
    }

    pub fn is_special(&self, word: &str) -> bool {
        let word = fold(word);
        self.special_words.iter().any(|special| {
            if special.chars().count() <= EXACT_MATCH_MAX_LEN {
                word == *special
            } else {
                levenshtein(&word, special) <= FUZZY_MAX_DISTANCE
            }
        })
    }
}

fn fold(word: &str) -> String {
    word.to_lowercase().nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Color = Color::new(0xff, 0xff, 0xff);
    const GOLD: Color = Color::new(0xff, 0xd7, 0x00);

    fn classifier(words: &[&str]) -> ColorClassifier {
        ColorClassifier::new(BASE, GOLD, words.iter().copied())
    }

    // ── Color ───────────────────────────────────────────────────────────────

    #[test]
    fn test_color_parse_and_display() {
        let color: Color = "#FFD700".parse().unwrap();
        assert_eq!(color, GOLD);
        assert_eq!(color.to_string(), "#ffd700");
        assert_eq!("00ff00".parse::<Color>().unwrap(), Color::new(0, 0xff, 0));
    }

    #[test]
    fn test_color_parse_rejects_garbage() {
        assert!("#fff".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("#ffé0a".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_serializes_as_hex() {
        let json = serde_json::to_string(&GOLD).unwrap();
        assert_eq!(json, "\"#ffd700\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GOLD);
    }

    // ── get_color ───────────────────────────────────────────────────────────

    #[test]
    fn test_empty_word_is_base() {
        assert_eq!(classifier(&["ok"]).get_color(""), BASE);
    }

    #[test]
    fn test_short_special_word_exact_case_insensitive() {
        let c = classifier(&["ok"]);
        assert_eq!(c.get_color("ok"), GOLD);
        assert_eq!(c.get_color("OK"), GOLD);
        // One edit away is not enough for short words.
        assert_eq!(c.get_color("oh"), BASE);
        assert_eq!(c.get_color("okay"), BASE);
    }

    #[test]
    fn test_long_special_word_fuzzy() {
        let c = classifier(&["wonderful"]);
        assert_eq!(c.get_color("wonderfull"), GOLD);
        assert_eq!(c.get_color("Wonderful"), GOLD);
        assert_eq!(c.get_color("wondrful"), GOLD);
        assert_eq!(c.get_color("wander"), BASE);
    }

    #[test]
    fn test_unrelated_word_is_base() {
        let c = classifier(&["amazing", "ok"]);
        assert_eq!(c.get_color("place"), BASE);
        assert_eq!(c.get_color("amazing"), GOLD);
    }

    #[test]
    fn test_decomposed_accents_match_composed_special_word() {
        let c = classifier(&["\u{e9}l\u{e8}ve", "o\u{f9}"]);
        assert_eq!(c.get_color("e\u{301}le\u{300}ve"), GOLD);
        assert_eq!(c.get_color("E\u{301}LE\u{300}VE"), GOLD);
        // Short words still need an exact match, now after normalization.
        assert_eq!(c.get_color("ou\u{300}"), GOLD);
        assert_eq!(c.get_color("ou"), BASE);
    }

    #[test]
    fn test_no_special_words() {
        assert_eq!(classifier(&[]).get_color("amazing"), BASE);
    }
}

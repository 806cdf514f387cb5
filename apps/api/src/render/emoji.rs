//! Emoji recognition and the glyph-substitution strategy.

use serde::{Deserialize, Serialize};

/// Whether emoji code points are drawn as image glyphs or left to the text face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiMode {
    #[default]
    Disabled,
    /// Substitute image glyphs sized to the current font, when the surface supports it.
    Images,
}

/// A piece of a word: plain text or a single emoji code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    Text(String),
    Emoji(char),
}

/// Check if character is an emoji
pub fn is_emoji(c: char) -> bool {
    matches!(c as u32,
        0x1F600..=0x1F64F |  // Emoticons
        0x1F300..=0x1F5FF |  // Misc Symbols and Pictographs
        0x1F680..=0x1F6FF |  // Transport and Map
        0x1F1E6..=0x1F1FF |  // Regional indicators
        0x1F900..=0x1F9FF |  // Supplemental Symbols
        0x1FA70..=0x1FAFF |  // Symbols and Pictographs Extended-A
        0x2600..=0x26FF   |  // Misc symbols
        0x2700..=0x27BF   |  // Dingbats
        0x231A..=0x231B   |  // Watch, Hourglass
        0x23E9..=0x23F3   |  // Media control
        0x2B50            |  // Star
        0x2B55               // Circle
    ) && !is_emoji_modifier(c)
}

pub const ZWJ: char = '\u{200D}';

/// Variation selectors, skin tones and ZWJ: zero-width parts of an emoji sequence.
pub fn is_emoji_modifier(c: char) -> bool {
    matches!(c, '\u{FE0E}' | '\u{FE0F}' | '\u{200D}' | '\u{1F3FB}'..='\u{1F3FF}')
}

pub fn contains_emoji(word: &str) -> bool {
    word.chars().any(is_emoji)
}

/// Splits `word` into text and emoji runs. Modifiers are dropped; the image for the
/// base code point stands in for the whole sequence. Code points joined by ZWJ (a
/// family, a profession with a skin tone) collapse into the first one's run, so a
/// sequence draws as one image.
pub fn split_runs(word: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut text = String::new();
    let mut joining = false;
    for c in word.chars() {
        if is_emoji(c) {
            if joining && matches!(runs.last(), Some(Run::Emoji(_))) && text.is_empty() {
                joining = false;
                continue;
            }
            if !text.is_empty() {
                runs.push(Run::Text(std::mem::take(&mut text)));
            }
            runs.push(Run::Emoji(c));
        } else if c == ZWJ {
            joining = true;
            continue;
        } else if !is_emoji_modifier(c) {
            text.push(c);
        }
        joining = false;
    }
    if !text.is_empty() {
        runs.push(Run::Text(text));
    }
    runs
}

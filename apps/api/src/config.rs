use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::layout::{default_layout_config, CanvasSpec, LayoutConfig, WrapStrategy};
use crate::render::emoji::EmojiMode;

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed or non-positive values; nothing is clamped.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub canvas: CanvasSpec,
    pub layout: LayoutConfig,
    /// Newline-delimited record file backing the random card endpoint.
    pub records_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = default_layout_config();

        let wrap = match lookup("MAX_LINE_LENGTH_CHARS") {
            Some(raw) => WrapStrategy::Fixed {
                max_line_length_chars: parse_positive("MAX_LINE_LENGTH_CHARS", &raw)?,
            },
            None => WrapStrategy::Optimized,
        };

        let emoji = match lookup("EMOJI_IMAGES") {
            Some(raw) if parse_value::<bool>("EMOJI_IMAGES", &raw)? => EmojiMode::Images,
            _ => EmojiMode::Disabled,
        };

        let special_words = lookup("SPECIAL_WORDS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let layout = LayoutConfig {
            font_family: optional(&lookup, "FONT_FAMILY")?.unwrap_or(defaults.font_family),
            font_weight: optional(&lookup, "FONT_WEIGHT")?.unwrap_or(defaults.font_weight),
            max_font_size_px: positive_or(&lookup, "MAX_FONT_SIZE_PX", defaults.max_font_size_px)?,
            wrap,
            base_color: optional(&lookup, "BASE_COLOR")?.unwrap_or(defaults.base_color),
            special_color: optional(&lookup, "SPECIAL_COLOR")?.unwrap_or(defaults.special_color),
            special_words,
            emoji,
        };

        Ok(Config {
            port: optional(&lookup, "PORT")?.unwrap_or(8080),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            canvas: CanvasSpec::new(
                positive_or(&lookup, "CANVAS_WIDTH_PX", 1275)?,
                positive_or(&lookup, "CANVAS_HEIGHT_PX", 362)?,
            ),
            layout,
            records_path: lookup("RECORDS_PATH").map(PathBuf::from),
        })
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'"))
}

fn optional<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map(|raw| parse_value(key, &raw)).transpose()
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr + Default + PartialOrd,
    T::Err: std::fmt::Display,
{
    let value: T = parse_value(key, raw)?;
    if value <= T::default() {
        bail!("Environment variable '{key}' must be positive, got '{raw}'");
    }
    Ok(value)
}

fn positive_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Default + PartialOrd,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => parse_positive(key, &raw),
        None => Ok(default),
    }
}

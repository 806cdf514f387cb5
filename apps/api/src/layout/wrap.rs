//! Greedy word-boundary line wrapper.
//!
//! Lengths are counted in `char`s, not bytes. Each explicit `\n` segment is wrapped
//! independently; an empty segment yields one empty line so blank lines survive.
//!
//! After a hard break the wrapper skips ahead to the next space when one lies within
//! a line's width, so the tail of a split word up to that space is not emitted.

use crate::layout::LayoutError;

/// Wraps `text` so that no emitted line exceeds `max_line_length` characters,
/// except when a forced hard break splits a run with no spaces (then the line is
/// exactly `max_line_length` long).
pub fn wrap(text: &str, max_line_length: usize) -> Result<Vec<String>, LayoutError> {
    if max_line_length == 0 {
        return Err(LayoutError::InvalidArgument(
            "max_line_length must be positive".to_string(),
        ));
    }

    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, max_line_length, &mut lines);
    }
    Ok(lines)
}

fn wrap_segment(segment: &str, max_line_length: usize, lines: &mut Vec<String>) {
    let chars: Vec<char> = segment.chars().collect();
    let mut start = 0;

    while chars.len() - start > max_line_length {
        let rest = &chars[start..];

        let mut pos = rest[..max_line_length]
            .iter()
            .rposition(|&c| c == ' ')
            .unwrap_or(0);
        if pos == 0 {
            pos = max_line_length;
        }

        lines.push(rest[..pos].iter().collect());

        // Resume one past the first space at or after the break. With no such space,
        // or one further than a full line away, resume at the break itself.
        let next = match rest[pos..].iter().position(|&c| c == ' ') {
            Some(offset) if offset < max_line_length => pos + offset + 1,
            _ => pos,
        };
        start += next;
    }

    lines.push(chars[start..].iter().collect());
}

/// Character count of the longest explicit line in `text`.
pub fn longest_line_length(text: &str) -> usize {
    text.split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

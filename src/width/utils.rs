//! Terminal display width helpers.
//!
//! Table cells are laid out in display columns, not bytes, so brand labels
//! with accents or wide glyphs stay aligned.

use unicode_width::UnicodeWidthChar;

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Pad `text` with spaces, or cut it, so it spans exactly `width` columns.
///
/// Control characters become spaces so they cannot break a table row.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut line = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let ch = if ch.is_control() { ' ' } else { ch };
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        line.push(ch);
        used += ch_width;
    }
    while used < width {
        line.push(' ');
        used += 1;
    }
    line
}

/// Repeat a single-column glyph `width` times.
pub fn repeat_to_width(glyph: char, width: usize) -> String {
    std::iter::repeat_n(glyph, width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_ansi() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
    }

    #[test]
    fn fit_pads_short_text() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn fit_truncates_long_text() {
        assert_eq!(fit_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn fit_counts_wide_glyphs() {
        // Each CJK glyph spans two columns; the third would overflow.
        let fitted = fit_to_width("靴靴靴", 5);
        assert_eq!(fitted, "靴靴 ");
        assert_eq!(display_width(&fitted), 5);
    }

    #[test]
    fn fit_replaces_control_characters() {
        assert_eq!(fit_to_width("Ni\tke\n", 8), "Ni ke   ");
        assert_eq!(fit_to_width("a\x1bb", 3), "a b");
    }

    #[test]
    fn repeat_builds_rule() {
        assert_eq!(repeat_to_width('─', 3), "───");
    }
}

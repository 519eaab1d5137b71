//! Shared rendering utilities.
//!
//! Widths are terminal cells: wide glyphs (CJK, most emoji) take two,
//! combining marks take none.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in cells.
#[must_use]
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Display width of one `char` in cells.
#[must_use]
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Shortens `text` to at most `width` cells, ending in `…` when cut.
///
/// ```rust
/// use brand_showcase::ui::helpers::truncate;
///
/// assert_eq!(truncate("Lighting", 20), "Lighting");
/// assert_eq!(truncate("Lighting", 5), "Ligh…");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > width - 1 {
            break;
        }
        used += w;
        cut.push(ch);
    }
    cut.push('…');
    cut
}

/// Left padding that centers `len` cells within `width`.
#[must_use]
pub const fn center_offset(len: usize, width: usize) -> usize {
    width.saturating_sub(len) / 2
}

/// Prints `text` centered on a full-width line at a 1-indexed row.
pub fn print_centered(row: usize, text: &str, cols: usize, style: &str) {
    let text = truncate(text, cols);
    let len = text_width(&text);
    let padding = center_offset(len, cols);

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", crate::ui::Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_edges() {
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("abcd", 3), "ab…");
        assert_eq!(truncate("abcd", 1), "…");
        assert_eq!(truncate("abcd", 0), "");
        assert_eq!(truncate("ÀÉÎÕÜ", 4), "ÀÉÎ…");
        assert_eq!(truncate("東京ライト", 6), "東京…");
    }

    #[test]
    fn test_wide_glyphs_take_two_cells() {
        assert_eq!(text_width("ACME"), 4);
        assert_eq!(text_width("東京"), 4);
        assert_eq!(char_width('東'), 2);
        assert_eq!(char_width('\u{301}'), 0);
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(4, 10), 3);
        assert_eq!(center_offset(12, 10), 0);
    }
}

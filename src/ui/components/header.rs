//! Header component renderer.
//!
//! Title on the left, filter summary right-aligned on the same line.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Composes the header line, exactly `cols` cells wide.
#[must_use]
pub fn header_line(header: &HeaderInfo, cols: usize) -> String {
    let title = truncate(&format!(" {}", header.title), cols);
    let used = text_width(&title);

    let summary = header
        .summary
        .as_deref()
        .map(|s| truncate(&format!("{s} "), cols.saturating_sub(used + 1)))
        .unwrap_or_default();
    let gap = cols.saturating_sub(used + text_width(&summary));

    format!("{title}{}{summary}", " ".repeat(gap))
}

/// Renders the header at a 1-indexed row and returns the next row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", header_line(header, cols));
    print!("{}", Theme::reset());
    row + 1
}

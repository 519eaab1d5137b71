//! Ticker line renderer.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;

/// Renders the visible ticker window (blank while there is none).
pub fn render_ticker(row: usize, frame: Option<&str>, theme: &Theme, cols: usize) -> usize {
    let frame = frame.unwrap_or("");
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.ticker_fg));
    print!("{frame}");
    print!("{}", " ".repeat(cols.saturating_sub(text_width(frame))));
    print!("{}", Theme::reset());
    row + 1
}
